//! Explicit view-model for one generate interaction:
//! idle → loading → success | error, with error → loading for manual retry.
//!
//! Replaces ad-hoc UI flags (loading / code / error) with a single state whose
//! transitions can be tested independent of the classifier and the transport.

/// Presentation state for one generate interaction.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Nothing in flight, nothing to show.
    #[default]
    Idle,
    /// One request in flight; submit is disabled.
    Loading,
    /// Generated code, ready to display.
    Success(String),
    /// Failure message; the user may retry.
    Error(String),
}

impl ViewState {
    /// Starts a request. Valid from any settled state; a second submit while
    /// loading is a no-op (there is at most one in-flight request).
    pub fn submit(self) -> Self {
        ViewState::Loading
    }

    /// Resolves the in-flight request with generated code. Ignored outside
    /// `Loading`, so a stale completion cannot overwrite a settled view.
    pub fn complete(self, code: impl Into<String>) -> Self {
        match self {
            ViewState::Loading => ViewState::Success(code.into()),
            other => other,
        }
    }

    /// Resolves the in-flight request with a failure message. Ignored outside
    /// `Loading`.
    pub fn fail(self, message: impl Into<String>) -> Self {
        match self {
            ViewState::Loading => ViewState::Error(message.into()),
            other => other,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}
