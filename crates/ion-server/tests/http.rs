//! In-process tests of the HTTP boundary.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use ion_core::commands::CatalogEntry;
use ion_fire_control::{AttackOrchestrator, ResourceRegistry};
use ion_server::http::router;
use ion_server::state::AppState;

fn app_with(registry: ResourceRegistry) -> Router {
    router(AppState::new(AttackOrchestrator::simulated(registry, 42)))
}

fn single_cannon() -> ResourceRegistry {
    ResourceRegistry::from_catalog(vec![CatalogEntry {
        id: "cannon1".into(),
        available: true,
        fire_time: 5.0,
        generation: 1,
    }])
    .unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, value)
}

fn attack_body() -> Value {
    json!({
        "protocols": ["closest-enemies"],
        "scan": [
            {"coordinates": {"x": 10, "y": 20}, "enemies": 10, "allies": 5},
            {"coordinates": {"x": 5, "y": 5}, "enemies": 1}
        ]
    })
}

// ---- Attack ----

#[tokio::test]
async fn test_attack_selects_closest_and_reports_generation() {
    let app = app_with(single_cannon());
    let (status, body) = send(&app, "POST", "/api/attack", Some(attack_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["target"], json!({"x": 5.0, "y": 5.0}));
    assert_eq!(body["generation"], 1);
    let casualties = body["casualties"].as_u64().unwrap();
    assert!((1..=10).contains(&casualties));
}

#[tokio::test]
async fn test_attack_when_all_cannons_cooling() {
    let app = app_with(single_cannon());
    send(&app, "POST", "/api/attack", Some(attack_body())).await;
    let (status, body) = send(&app, "POST", "/api/attack", Some(attack_body())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "no ion cannons available");
}

#[tokio::test]
async fn test_attack_with_no_target() {
    let app = app_with(single_cannon());
    let body = json!({
        "protocols": ["prioritize-mech"],
        "scan": [{"coordinates": {"x": 1, "y": 1}, "enemies": {"type": "soldier", "number": 4}}]
    });
    let (status, body) = send(&app, "POST", "/api/attack", Some(body)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("no target"));

    let (_, status_body) = send(&app, "GET", "/api/cannons/cannon1/status", None).await;
    assert_eq!(status_body["available"], true);
}

#[tokio::test]
async fn test_attack_with_missing_fields() {
    let app = app_with(single_cannon());
    let body = json!({"protocols": ["closest-enemies"], "scan": [{"enemies": 1}]});
    let (status, body) = send(&app, "POST", "/api/attack", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid scan data"));
}

#[tokio::test]
async fn test_attack_with_malformed_json() {
    let app = app_with(single_cannon());
    let request = Request::builder()
        .method("POST")
        .uri("/api/attack")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---- Cannons ----

#[tokio::test]
async fn test_list_cannons_reflects_reservations() {
    let app = app_with(ResourceRegistry::default());
    let (status, body) = send(&app, "GET", "/api/cannons", None).await;
    assert_eq!(status, StatusCode::OK);
    let cannons = body.as_array().unwrap();
    assert_eq!(cannons.len(), 3);
    assert_eq!(cannons[0]["id"], "cannon1");
    assert!(cannons.iter().all(|c| c["available"] == true));

    send(&app, "POST", "/api/attack", Some(attack_body())).await;
    let (_, body) = send(&app, "GET", "/api/cannons", None).await;
    assert_eq!(body[0]["available"], false);
    assert_eq!(body[1]["available"], true);
}

#[tokio::test]
async fn test_status_known_and_unknown() {
    let app = app_with(ResourceRegistry::default());
    let (status, body) = send(&app, "GET", "/api/cannons/cannon1/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"available": true, "generation": 1}));

    let (status, body) = send(&app, "GET", "/api/cannons/cannon4/status", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Cannon not found"}));
}

#[tokio::test]
async fn test_direct_fire() {
    let app = app_with(ResourceRegistry::default());
    let target = json!({"target": {"x": 3, "y": 4}});

    let (status, body) = send(&app, "POST", "/api/cannons/cannon2/fire", Some(target.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["generation"], 2);

    let (status, _) = send(&app, "POST", "/api/cannons/cannon2/fire", Some(target.clone())).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(&app, "POST", "/api/cannons/cannon9/fire", Some(target)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Cannon not found");
}
