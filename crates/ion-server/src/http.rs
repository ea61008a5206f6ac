//! HTTP request boundary.
//!
//! Routes:
//! - `POST /api/attack` — select a target and fire the first free cannon
//! - `GET /api/cannons` — catalog with live availability
//! - `GET /api/cannons/:cannon_id/status` — one cannon's availability
//! - `POST /api/cannons/:cannon_id/fire` — fire a named cannon
//!
//! Every failure is answered with `{"error": message}`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use ion_core::commands::{AttackRequest, FireRequest};
use ion_core::error::IonError;
use ion_core::state::{AttackResponse, CannonView, ErrorBody, FireResponse, StatusView};

use crate::state::AppState;

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/attack", post(attack_handler))
        .route("/api/cannons", get(cannons_handler))
        .route("/api/cannons/:cannon_id/status", get(status_handler))
        .route("/api/cannons/:cannon_id/fire", post(fire_handler))
        .with_state(state)
}

/// Error answered at the boundary.
#[derive(Debug)]
pub enum ApiError {
    /// The body was not valid JSON for the route.
    BadRequest(String),
    Core(IonError),
}

impl From<IonError> for ApiError {
    fn from(err: IonError) -> Self {
        ApiError::Core(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Core(IonError::InvalidScanData(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Core(IonError::ResourceNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Core(IonError::ResourceUnavailable(_)) => StatusCode::CONFLICT,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Core(IonError::ResourceNotFound(_)) => "Cannon not found".to_string(),
            ApiError::Core(err) => err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.message(), "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self.message(), "request rejected");
        }
        (status, Json(ErrorBody { error: self.message() })).into_response()
    }
}

/// `POST /api/attack`
pub async fn attack_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttackRequest>, JsonRejection>,
) -> Result<Json<AttackResponse>, ApiError> {
    let Json(request) = payload?;
    let result = state.orchestrator.execute_attack(request).await?;
    Ok(Json(AttackResponse::from(&result)))
}

/// `GET /api/cannons`
pub async fn cannons_handler(State(state): State<AppState>) -> Json<Vec<CannonView>> {
    Json(state.orchestrator.scheduler().snapshot())
}

/// `GET /api/cannons/:cannon_id/status`
pub async fn status_handler(
    State(state): State<AppState>,
    Path(cannon_id): Path<String>,
) -> Result<Json<StatusView>, ApiError> {
    let status = state.orchestrator.scheduler().status(&cannon_id)?;
    Ok(Json(StatusView::from(&status)))
}

/// `POST /api/cannons/:cannon_id/fire`
pub async fn fire_handler(
    State(state): State<AppState>,
    Path(cannon_id): Path<String>,
    payload: Result<Json<FireRequest>, JsonRejection>,
) -> Result<Json<FireResponse>, ApiError> {
    let Json(request) = payload?;
    let report = state
        .orchestrator
        .fire_cannon(&cannon_id, request.target)
        .await?;
    Ok(Json(FireResponse::from(report)))
}
