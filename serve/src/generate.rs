//! `POST /api/generate`: parse the body, run the configured strategy, answer
//! with `{ code }` or a 500 `{ error }`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use stencil::{ErrorResponse, GenerateRequest, GenerateResponse};

use super::app::AppState;

/// Wire message for every failure path; causes go to the log, not the caller.
const GENERIC_ERROR: &str = "failed to generate code";

/// Handles `POST /api/generate`.
///
/// The body is parsed by hand so an unparseable body maps to 500 like any
/// other failure (the `Json` extractor would answer 4xx).
pub(crate) async fn generate(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let req: GenerateRequest = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!("generate body parse error: {}", e);
            return error_response();
        }
    };

    tokio::time::sleep(state.config.simulated_latency).await;

    match state.config.generator.generate(&req.prompt).await {
        Ok(code) => (StatusCode::OK, Json(GenerateResponse { code })).into_response(),
        Err(e) => {
            tracing::warn!("generate failed: {}", e);
            error_response()
        }
    }
}

fn error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: GENERIC_ERROR.to_string(),
        }),
    )
        .into_response()
}
