//! Axum app: config, shared state, and router.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use stencil::{generator_from_env, Generate, TemplateGenerator};

/// Simulated "thinking time" before each generate response; no functional effect.
const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1500;

/// Server configuration: the generation strategy and the simulated latency.
pub struct ServeConfig {
    /// Strategy behind `/api/generate`. Immutable after startup.
    pub generator: Arc<dyn Generate>,
    /// Sleep before each generate response.
    pub simulated_latency: Duration,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            generator: Arc::new(TemplateGenerator::new()),
            simulated_latency: Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS),
        }
    }
}

impl ServeConfig {
    /// Builds config from environment variables.
    ///
    /// - `STENCIL_GENERATOR`: `templates` (default) or `openai`. Unknown
    ///   values are an error, not a silent fallback.
    /// - `STENCIL_SIMULATED_LATENCY_MS` (default 1500; invalid values fall
    ///   back to the default).
    pub fn from_env() -> Result<Self, String> {
        let generator = generator_from_env()?;
        let simulated_latency = std::env::var("STENCIL_SIMULATED_LATENCY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS));
        Ok(Self {
            generator,
            simulated_latency,
        })
    }
}

/// Shared state for the server.
///
/// Injected into the router and cloned per request so handlers reach the
/// generator without passing it through every layer.
pub(crate) struct AppState {
    pub(crate) config: ServeConfig,
}

/// Builds the router: UI page, liveness probe, generate endpoint.
/// CORS on the API is permissive.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(super::page::index))
        .route("/healthz", get(super::page::healthz))
        .route("/api/generate", post(super::generate::generate))
        .layer(cors)
        .with_state(state)
}
