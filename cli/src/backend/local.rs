//! LocalBackend: run the configured generator in-process.

use std::sync::Arc;

use async_trait::async_trait;
use stencil::Generate;

use super::{GenerateBackend, RunError};

/// In-process execution: same strategy selection as the server
/// (`STENCIL_GENERATOR`), no network round trip.
pub struct LocalBackend {
    generator: Arc<dyn Generate>,
}

impl LocalBackend {
    /// Builds the generator from the environment.
    pub fn from_env() -> Result<Self, RunError> {
        let generator = stencil::generator_from_env().map_err(RunError::Config)?;
        Ok(Self { generator })
    }
}

#[async_trait]
impl GenerateBackend for LocalBackend {
    async fn generate(&self, prompt: &str) -> Result<String, RunError> {
        Ok(self.generator.generate(prompt).await?)
    }
}
