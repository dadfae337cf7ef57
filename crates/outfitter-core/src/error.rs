//! Unified error handling for Outfitter Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Outfitter Core operations.
#[derive(Debug, Error, Clone)]
pub enum OutfitterError {
    /// Errors from the domain layer (invalid garments, records, weather).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl OutfitterError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Run `outfitter config list` to inspect the effective configuration".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Outfitter".into(),
                "Please report this issue at: https://github.com/outfitter-rs/outfitter/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Compatibility => ErrorCategory::Compatibility,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(e) if e.is_transient())
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type OutfitterResult<T> = Result<T, OutfitterError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> OutfitterResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> OutfitterResult<T> {
        self.map_err(|e| OutfitterError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GarmentId;

    #[test]
    fn categories_follow_the_wrapped_error() {
        let missing: OutfitterError = ApplicationError::GarmentNotFound {
            id: GarmentId::new(4),
        }
        .into();
        assert_eq!(missing.category(), ErrorCategory::NotFound);

        let mismatch: OutfitterError = DomainError::CategoryMismatch {
            subcategory: "scarf".into(),
            category: "top".into(),
        }
        .into();
        assert_eq!(mismatch.category(), ErrorCategory::Compatibility);
        assert!(!mismatch.suggestions().is_empty());
    }

    #[test]
    fn only_lock_and_weather_failures_are_retryable() {
        assert!(OutfitterError::from(ApplicationError::StoreLockError).is_retryable());
        assert!(
            !OutfitterError::Configuration {
                message: "bad".into()
            }
            .is_retryable()
        );
    }

    #[test]
    fn context_wraps_foreign_errors() {
        let parsed: Result<u32, _> = "x".parse::<u32>();
        let err = parsed.context("reading seed").unwrap_err();
        assert!(err.to_string().contains("reading seed"));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
