//! Music chart aggregation service: one GET endpoint serving the combined
//! charts of every registered site, listening on port 8080.

mod routes;

use anyhow::{anyhow, Result};
use chart_client::ChartService;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use routes::{build_router, AppState};

const LISTEN_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    info!("starting chart-server v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(ChartService::new());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(LISTEN_ADDR).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,chart_server=info,chart_client=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|error| anyhow!("failed to initialize logging: {error}"))
}
