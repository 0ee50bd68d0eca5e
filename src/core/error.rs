//! Error types for the typing animation configuration.

use thiserror::Error;

/// Reasons a [`TypingConfig`](super::typing::TypingConfig) can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypingError {
    /// No strings to cycle through
    #[error("typing animation needs at least one string")]
    EmptySequence,

    /// One of the strings has no characters
    #[error("typing animation string at index {index} is empty")]
    EmptyString { index: usize },
}
