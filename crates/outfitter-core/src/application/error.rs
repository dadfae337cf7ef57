//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::GarmentId;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No garment with this id in the wardrobe.
    #[error("Garment {id} not found")]
    GarmentNotFound { id: GarmentId },

    /// No saved outfit with this id.
    #[error("Saved outfit {id} not found")]
    OutfitNotFound { id: String },

    /// A garment with this id is already stored.
    #[error("Garment {id} already exists")]
    DuplicateGarment { id: GarmentId },

    /// Reading or writing the backing store failed.
    #[error("Storage error at {path}: {reason}")]
    StorageError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Wardrobe store is unavailable")]
    StoreLockError,

    /// The weather source could not produce a snapshot.
    #[error("Weather unavailable: {reason}")]
    WeatherUnavailable { reason: String },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::GarmentNotFound { id } => vec![
                format!("No garment has id {}", id),
                "Try: outfitter wardrobe list to see garment ids".into(),
            ],
            Self::OutfitNotFound { .. } => vec![
                "Try: outfitter outfits list to see saved outfits".into(),
            ],
            Self::DuplicateGarment { id } => vec![
                format!("Garment {} is already in the wardrobe", id),
                "Remove it first or let the wardrobe assign a new id".into(),
            ],
            Self::StorageError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the file exists and is readable".into(),
                "Use --wardrobe to point at a different file".into(),
            ],
            Self::StoreLockError => vec![
                "The wardrobe store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::WeatherUnavailable { .. } => vec![
                "Pass temperatures explicitly with --high, --low and --current".into(),
            ],
            Self::ValidationFailed(_) => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::GarmentNotFound { .. } | Self::OutfitNotFound { .. } => ErrorCategory::NotFound,
            Self::DuplicateGarment { .. } | Self::ValidationFailed(_) => ErrorCategory::Validation,
            Self::StorageError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::WeatherUnavailable { .. } => ErrorCategory::Configuration,
        }
    }

    /// Whether trying again unchanged might succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::StoreLockError | Self::WeatherUnavailable { .. })
    }
}
