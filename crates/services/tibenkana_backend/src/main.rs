// --- File: crates/services/tibenkana_backend/src/main.rs ---
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use tibenkana_backend::{build_app, AppState};
use tibenkana_common::{logging, Context, TibenkanaError};
use tibenkana_config::load_config;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        error!("Server stopped: {}", err);
        eprintln!("tibenkana-backend: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), TibenkanaError> {
    let config = Arc::new(load_config().map_err(tibenkana_common::config_error)?);
    let _log_guard = logging::init_from_config(&config.logging);

    let state = AppState::new(config.clone()).await?;
    let app = build_app(&state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("binding {}", addr))?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("serving HTTP")?;
    Ok(())
}
