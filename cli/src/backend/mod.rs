//! Backend abstraction used by the `stencil` CLI.
//!
//! Two execution modes:
//! - **LocalBackend**: run the configured generator in-process.
//! - **RemoteBackend**: POST to a running `stencil serve` instance.
//!
//! Callers depend only on [`GenerateBackend`], so switching local/remote is a
//! one-line decision in `main.rs`.

mod local;
mod remote;

pub use local::LocalBackend;
pub use remote::RemoteBackend;

use async_trait::async_trait;
use thiserror::Error;

/// Error from a CLI generate run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The in-process generator failed.
    #[error("generate failed: {0}")]
    Generate(#[from] stencil::GenerateError),

    /// Transport or server-side failure in remote mode.
    #[error("remote error: {0}")]
    Remote(String),

    /// Invalid configuration (e.g. unknown `STENCIL_GENERATOR` value).
    #[error("config error: {0}")]
    Config(String),
}

/// Produces component source for one prompt.
#[async_trait]
pub trait GenerateBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, RunError>;
}
