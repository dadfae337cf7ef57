//! Infrastructure adapters for Outfitter.
//!
//! This crate implements the ports defined in `outfitter_core::application::ports`.
//! Everything that touches the filesystem lives here.

pub mod store;
pub mod weather;

// Re-export commonly used adapters
pub use store::{InMemoryCloset, TomlCloset, WardrobeData};
pub use weather::FixedWeather;
