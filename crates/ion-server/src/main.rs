use clap::Parser;

use ion_fire_control::AttackOrchestrator;
use ion_server::config::{Cli, ServerConfig};
use ion_server::state::AppState;
use ion_server::{http, logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = ServerConfig::resolve(&cli, std::env::var("PORT").ok())?;
    logging::init(&config.log_level, config.log_format);

    let registry = config.load_registry()?;
    let cannons = registry.len();
    let state = AppState::new(AttackOrchestrator::simulated(registry, config.rng_seed));

    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        cannons,
        seed = config.rng_seed,
        "ion cannon service listening"
    );

    axum::serve(listener, http::router(state)).await?;
    Ok(())
}
