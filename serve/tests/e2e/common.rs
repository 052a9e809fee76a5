//! Shared helpers for e2e tests. Raw response bodies are logged with
//! `[e2e] received: ...`; run tests with `--nocapture` to see them.

use std::sync::Arc;
use std::time::Duration;

use serve::ServeConfig;
use stencil::TemplateGenerator;
use tokio::net::TcpListener;

/// Loads `.env` from the current directory (or project root when run via
/// `cargo test`). Call at the start of each e2e test so STENCIL_* vars are visible.
pub fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Binds 127.0.0.1:0 and spawns the server with zero simulated latency.
/// Returns (base_url, server_handle); abort the handle when done.
pub async fn spawn_server() -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let config = ServeConfig {
        generator: Arc::new(TemplateGenerator::new()),
        simulated_latency: Duration::ZERO,
    };
    let handle = tokio::spawn(async move {
        let _ = serve::run_serve_on_listener(listener, config).await;
    });
    (format!("http://{}", addr), handle)
}

/// POSTs raw bytes to `/api/generate` and returns (status, raw body) so tests
/// can assert on wire content.
pub async fn post_generate_raw(base: &str, body: &str) -> (reqwest::StatusCode, String) {
    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{}/api/generate", base))
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap();
    let status = resp.status();
    let text = resp.text().await.unwrap();
    eprintln!("[e2e] received: {}", text);
    (status, text)
}
