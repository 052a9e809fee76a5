//! Generation strategies behind the generate endpoint.
//!
//! [`Generate`] is the seam between the HTTP boundary and whatever produces
//! the component source: the deterministic [`TemplateGenerator`] (default) or
//! the remote [`OpenAiGenerator`]. Callers pick one with
//! [`generator_from_env`] and depend only on the trait, so the wire contract
//! is the same for both.

mod openai;
mod templates;

pub use openai::OpenAiGenerator;
pub use templates::TemplateGenerator;

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Error from a generation strategy.
///
/// [`TemplateGenerator`] never fails; all variants come from the remote path.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Remote completion failed (request build, transport, or empty response).
    #[error("completion failed: {0}")]
    Completion(String),
}

/// Generation strategy: given a prompt, produce component source text.
///
/// Implementations: [`TemplateGenerator`] (fixed lookup table),
/// [`OpenAiGenerator`] (Chat Completions pass-through).
#[async_trait]
pub trait Generate: Send + Sync {
    /// Produce component source for one prompt.
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Which strategy backs generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GeneratorKind {
    /// Keyword classifier + fixed template table (default).
    #[default]
    Templates,
    /// Remote model via the OpenAI Chat Completions API.
    OpenAi,
}

impl FromStr for GeneratorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "templates" => Ok(Self::Templates),
            "openai" => Ok(Self::OpenAi),
            _ => Err(format!(
                "unknown generator: {} (use templates or openai)",
                s
            )),
        }
    }
}

/// Builds the configured generator from the environment.
///
/// `STENCIL_GENERATOR`: `templates` (default) or `openai`. The openai
/// strategy reads `OPENAI_API_KEY` at request time, so selection itself
/// cannot fail on a missing key.
pub fn generator_from_env() -> Result<Arc<dyn Generate>, String> {
    let kind = match std::env::var("STENCIL_GENERATOR") {
        Ok(v) => v.parse::<GeneratorKind>()?,
        Err(_) => GeneratorKind::default(),
    };
    Ok(match kind {
        GeneratorKind::Templates => Arc::new(TemplateGenerator::new()),
        GeneratorKind::OpenAi => Arc::new(OpenAiGenerator::new()),
    })
}
