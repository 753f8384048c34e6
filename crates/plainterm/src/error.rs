//! Error types for the non-interactive UI.
//!
//! Rendering never fails: malformed but well-typed input degrades to a
//! fallback format instead. The only error surfaced to callers is an attempt
//! to read interactive input.

/// Errors returned by [`NonInteractiveUi`](crate::NonInteractiveUi).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    /// An interactive read was requested from a backend that cannot prompt.
    #[error("noninteractive UI doesn't support this operation")]
    NonInteractive,
}

impl UiError {
    /// Whether this error means the caller should fall back to a default
    /// instead of prompting.
    pub fn is_non_interactive(&self) -> bool {
        matches!(self, UiError::NonInteractive)
    }
}
