//! Logging initialization: logs go to a file (or are dropped), never to the console.
//!
//! Reads `RUST_LOG` (level) and `LOG_FILE` (path) from env (e.g. via `.env`).
//! When `LOG_FILE` is set, logs are appended to that file; otherwise they are
//! dropped so stdout carries only the generated code.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_filter(filter);
        tracing_subscriber::registry().with(file_layer).init();
        tracing::info!(path = %path, "stencil logging to file");
    } else {
        let sink_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::sink)
            .with_filter(filter);
        tracing_subscriber::registry().with(sink_layer).init();
    }
    Ok(())
}
