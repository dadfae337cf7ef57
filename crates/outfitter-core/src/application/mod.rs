//! Application layer for Outfitter.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (WardrobeService, OutfitService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Scoring and selection live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{OutfitService, ResolvedOutfit, WardrobeService};

// Re-export port traits (for adapter implementation)
pub use ports::{OutfitStore, WardrobeStore, WeatherSource};

pub use error::ApplicationError;
