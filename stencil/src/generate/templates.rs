//! Deterministic template strategy: classify the prompt, return the fixed template.

use async_trait::async_trait;

use crate::category::classify;
use crate::template::template;

use super::{Generate, GenerateError};

/// Template lookup: [`classify`] the prompt, return that category's template.
///
/// Pure and stateless; the same prompt yields a byte-identical result on
/// every call, and every input succeeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Generate for TemplateGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let category = classify(prompt);
        tracing::debug!(%category, prompt_len = prompt.len(), "template dispatch");
        Ok(template(category).to_string())
    }
}
