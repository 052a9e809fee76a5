//! # Stencil
//!
//! Describe a UI component in plain language, get React/TypeScript source back.
//!
//! The core is deliberately small: a prompt [`classify`]-er over a closed
//! [`Category`] set, a fixed template table, and a [`Generate`] strategy
//! trait with two interchangeable implementations:
//!
//! - [`TemplateGenerator`]: classify → template lookup. Deterministic, no I/O.
//! - [`OpenAiGenerator`]: Chat Completions pass-through (requires `OPENAI_API_KEY`).
//!
//! The strategy behind `/api/generate` is chosen with `STENCIL_GENERATOR` (see
//! [`generator_from_env`]); the wire contract in [`protocol`] stays the same
//! either way.
//!
//! ## Main modules
//!
//! - [`category`]: [`Category`] and [`classify`].
//! - [`mod@template`]: the five component templates and the lookup function.
//! - [`generate`]: [`Generate`], [`GenerateError`], [`GeneratorKind`], the two strategies.
//! - [`protocol`]: [`GenerateRequest`], [`GenerateResponse`], [`ErrorResponse`].
//!
//! ## Quick start
//!
//! ```rust
//! use stencil::{Generate, TemplateGenerator};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let generator = TemplateGenerator::new();
//! let code = generator.generate("a modal dialog with a close button").await.unwrap();
//! assert!(code.contains("aria-modal"));
//! # }
//! ```

pub mod category;
pub mod generate;
pub mod protocol;
pub mod template;

pub use category::{classify, Category};
pub use generate::{
    generator_from_env, Generate, GenerateError, GeneratorKind, OpenAiGenerator,
    TemplateGenerator,
};
pub use protocol::{ErrorResponse, GenerateRequest, GenerateResponse, PROMPT_MAX_LEN};
pub use template::template;
