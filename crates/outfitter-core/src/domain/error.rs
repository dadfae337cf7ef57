// ============================================================================
// domain/error.rs - WARDROBE ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so services can hand them back out of shared stores)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid garment: {0}")]
    InvalidGarment(String),

    #[error("Invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Malformed garment record '{record}': {reason}")]
    MalformedRecord { record: String, reason: String },

    #[error("Invalid weather snapshot: {0}")]
    InvalidWeather(String),

    // ========================================================================
    // Compatibility Errors (409-level equivalent)
    // ========================================================================
    #[error("subcategory '{subcategory}' does not belong to category '{category}'")]
    CategoryMismatch {
        subcategory: String,
        category: String,
    },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidGarment(msg) => vec![
                "Check the garment's fields".into(),
                format!("Details: {}", msg),
            ],
            Self::InvalidColor { value, .. } => vec![
                format!("'{}' is not a usable color", value),
                "Colors are written as #rrggbb, e.g. #1a2b3c".into(),
            ],
            Self::UnknownVariant { kind, .. } => vec![
                format!("Use one of the supported {} values", kind),
                match *kind {
                    "category" => {
                        "  • top, bottom, shoe, full-body, outerwear, accessory".into()
                    }
                    "formality" => "  • formal, informal, flex".into(),
                    "material" => {
                        "  • wool-cotton, plastic-nylon, leather, denim, soft-fur, \
                         stretchy-spandex, not-applicable"
                            .into()
                    }
                    _ => "  • See `outfitter --help` for accepted values".into(),
                },
            ],
            Self::CategoryMismatch { category, .. } => vec![
                format!("Pick a subcategory that is worn as a {}", category),
                "Example: a jacket is outerwear, a scarf is an accessory".into(),
            ],
            Self::MalformedRecord { .. } => vec![
                "Wardrobe records look like: 3,0,1,2,#ffffff,null,0".into(),
                "The wardrobe file may have been edited by hand".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidGarment(_)
            | Self::InvalidColor { .. }
            | Self::UnknownVariant { .. }
            | Self::InvalidWeather(_) => ErrorCategory::Validation,
            Self::CategoryMismatch { .. } => ErrorCategory::Compatibility,
            Self::MalformedRecord { .. } | Self::MissingRequiredField { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Internal,
}
