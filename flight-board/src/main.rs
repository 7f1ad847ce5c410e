use std::net::SocketAddr;

use flight_board::flights::{FlightStatusClient, FlightStatusConfig};
use flight_board::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const BIND_ADDR_VAR: &str = "BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Overrides the bundled static assets directory.
const STATIC_DIR_VAR: &str = "STATIC_DIR";
const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        error!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let client = FlightStatusClient::new(FlightStatusConfig::from_env())?;
    let state = AppState::new(client);

    let static_dir =
        std::env::var(STATIC_DIR_VAR).unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());
    let app = create_router(state, &static_dir);

    let addr: SocketAddr = std::env::var(BIND_ADDR_VAR)
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Flight board listening on http://{addr}");
    info!("  GET /        - Gate lookup and export forms");
    info!("  GET /health  - Health check");
    info!("  GET /gate    - Next flight at a gate (?gate=&date=&time=)");
    info!("  GET /export  - Flight status workbook (?start=&end=)");

    axum::serve(listener, app).await?;
    Ok(())
}
