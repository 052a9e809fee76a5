//! Wire types for the generate endpoint.
//!
//! `POST /api/generate` takes a [`GenerateRequest`] and answers with a
//! [`GenerateResponse`] (200) or an [`ErrorResponse`] (500). There is no
//! cause taxonomy on the wire; failures carry a single human-readable string.

use serde::{Deserialize, Serialize};

/// Max prompt length enforced by clients (browser textarea and CLI).
/// The server accepts any length; validation is not part of the contract.
pub const PROMPT_MAX_LEN: usize = 500;

/// Generate request: free-text component description.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Success response: generated component source text.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub code: String,
}

/// Failure response: single human-readable message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
