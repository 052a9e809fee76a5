//! Browser UI and liveness probe.

use axum::response::Html;
use axum::Json;

/// The page is embedded at compile time; the server ships no static files.
const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Handles `GET /`: the prompt form and code panel.
pub(crate) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handles `GET /healthz`.
pub(crate) async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The embedded page must keep the client-side contract: the 500-char cap
    /// and the generate endpoint path.
    #[test]
    fn embedded_page_keeps_client_contract() {
        assert!(INDEX_HTML.contains(r#"maxlength="500""#));
        assert!(INDEX_HTML.contains("/api/generate"));
    }
}
