//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `outfitter-adapters` crate provides implementations.

use uuid::Uuid;

use crate::domain::{Garment, GarmentId, Location, SavedOutfit, WeatherSnapshot};
use crate::error::OutfitterResult;

/// Port for wardrobe storage.
///
/// Implemented by:
/// - `outfitter_adapters::InMemoryCloset` (testing, ephemeral sessions)
/// - `outfitter_adapters::TomlCloset` (wardrobe file on disk)
#[cfg_attr(test, mockall::automock)]
pub trait WardrobeStore: Send + Sync {
    /// Every garment, in insertion order.
    fn list(&self) -> OutfitterResult<Vec<Garment>>;

    /// A single garment by id.
    fn get(&self, id: GarmentId) -> OutfitterResult<Garment>;

    /// Store a garment. Fails if the id is taken.
    fn insert(&self, garment: Garment) -> OutfitterResult<()>;

    /// Remove a garment, returning it.
    fn remove(&self, id: GarmentId) -> OutfitterResult<Garment>;

    /// The id the next inserted garment should get.
    fn next_id(&self) -> OutfitterResult<GarmentId>;
}

/// Port for saved outfits.
#[cfg_attr(test, mockall::automock)]
pub trait OutfitStore: Send + Sync {
    fn save(&self, outfit: SavedOutfit) -> OutfitterResult<()>;

    /// Saved outfits, oldest first.
    fn list(&self) -> OutfitterResult<Vec<SavedOutfit>>;

    fn remove(&self, id: Uuid) -> OutfitterResult<SavedOutfit>;
}

/// Port for weather lookups.
///
/// Implemented by:
/// - `outfitter_adapters::FixedWeather` (temperatures supplied by the user)
#[cfg_attr(test, mockall::automock)]
pub trait WeatherSource: Send + Sync {
    /// Today's weather at `location`.
    fn current(&self, location: Location) -> OutfitterResult<WeatherSnapshot>;
}
