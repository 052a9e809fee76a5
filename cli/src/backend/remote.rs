//! RemoteBackend: generate via HTTP against `stencil serve`.

use std::time::Duration;

use async_trait::async_trait;
use stencil::{ErrorResponse, GenerateRequest, GenerateResponse};

use super::{GenerateBackend, RunError};

const CONNECT_TIMEOUT_SECS: u64 = 10;
/// Max time to wait for the response (the remote strategy may call a model).
const REQUEST_TIMEOUT_SECS: u64 = 300;

/// Remote execution: one `POST /api/generate` per run.
pub struct RemoteBackend {
    url: String,
}

impl RemoteBackend {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generate", self.url.trim_end_matches('/'))
    }
}

#[async_trait]
impl GenerateBackend for RemoteBackend {
    async fn generate(&self, prompt: &str) -> Result<String, RunError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| RunError::Remote(e.to_string()))?;

        let resp = client
            .post(self.endpoint())
            .json(&GenerateRequest {
                prompt: prompt.to_string(),
            })
            .send()
            .await
            .map_err(|e| RunError::Remote(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| RunError::Remote(e.to_string()))?;

        if status.is_success() {
            let parsed: GenerateResponse = serde_json::from_str(&body)
                .map_err(|e| RunError::Remote(format!("bad response: {}", e)))?;
            Ok(parsed.code)
        } else {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("status {}", status));
            Err(RunError::Remote(message))
        }
    }
}
