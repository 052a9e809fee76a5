//! HTTP server for Stencil (axum).
//!
//! Serves the browser UI at `GET /`, the generate endpoint at
//! `POST /api/generate`, and a liveness probe at `GET /healthz`.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`], [`ServeConfig`].

mod app;
mod generate;
mod page;

pub use app::ServeConfig;

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use app::{router, AppState};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Runs the server on an existing listener with the given config.
/// Used by tests (bind to 127.0.0.1:0 then pass the listener).
pub async fn run_serve_on_listener(
    listener: TcpListener,
    config: ServeConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    info!("listening on http://{}", addr);

    let state = Arc::new(AppState { config });
    let app = router(state);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Runs the server. Listens on `addr` (default `127.0.0.1:3000`, or `STENCIL_ADDR`).
pub async fn run_serve(addr: Option<&str>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_addr = std::env::var("STENCIL_ADDR").ok();
    let addr = addr.or(env_addr.as_deref()).unwrap_or(DEFAULT_ADDR);
    let listener = TcpListener::bind(addr).await?;
    run_serve_on_listener(listener, ServeConfig::from_env()?).await
}
