//! OpenAI Chat Completions strategy implementing [`Generate`].
//!
//! Pass-through to the real Chat Completions API. Requires `OPENAI_API_KEY`
//! (or explicit config via [`OpenAiGenerator::with_config`]). The model is
//! instructed to emit raw TypeScript/React source with no markdown fences.
//!
//! **Interaction**: Implements [`Generate`]; selected by
//! `STENCIL_GENERATOR=openai` and used by the serve handler like
//! [`TemplateGenerator`](super::TemplateGenerator).

use async_trait::async_trait;
use tracing::debug;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};

use super::{Generate, GenerateError};

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2000;

/// Instructions for accessible, production-ready component output.
const SYSTEM_PROMPT: &str = "You are an expert React developer who specializes in creating accessible, production-ready components.

Generate React components based on user descriptions with these requirements:
- Use TypeScript with proper type definitions
- Use Tailwind CSS for styling (utility classes only)
- Include comprehensive accessibility features:
  * Semantic HTML elements (button, nav, header, main, etc.)
  * ARIA labels, roles, and properties where appropriate
  * Keyboard navigation support (Tab, Enter, Escape, Arrow keys)
  * Focus management and visible focus indicators
  * Screen reader friendly text
- Use React best practices (proper hooks, no prop drilling for simple components)
- Make components responsive (mobile-first approach)
- Add helpful comments explaining accessibility choices

Output ONLY the component code with no markdown formatting, no explanations, and no backticks. Just the raw TypeScript/React code.";

/// Chat Completions client implementing [`Generate`].
///
/// Uses `OPENAI_API_KEY` from the environment by default; or provide config
/// via [`OpenAiGenerator::with_config`] (e.g. a custom base URL).
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiGenerator {
    /// Build a client with default config (API key from `OPENAI_API_KEY` env).
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Build a client with custom config (e.g. custom API key or base URL).
    pub fn with_config(config: OpenAIConfig) -> Self {
        Self {
            client: Client::with_config(config),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the model (builder).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl Default for OpenAiGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Generate for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage::from(
                SYSTEM_PROMPT,
            )),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage::from(prompt)),
        ];

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(messages);
        args.temperature(TEMPERATURE);
        args.max_tokens(MAX_TOKENS);
        let request = args
            .build()
            .map_err(|e| GenerateError::Completion(format!("request build failed: {}", e)))?;

        debug!(model = %self.model, prompt_len = prompt.len(), "chat completion create");

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| GenerateError::Completion(format!("api error: {}", e)))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GenerateError::Completion("no choices in response".to_string()))?;

        Ok(choice.message.content.unwrap_or_default())
    }
}
