//! Outfitter Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Outfitter,
//! which picks an outfit from your own wardrobe for the day's weather and
//! the formality you ask for.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          outfitter-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (WardrobeService, OutfitService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (WardrobeStore, OutfitStore, Weather)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    outfitter-adapters (Infrastructure)  │
//! │ (InMemoryCloset, TomlCloset, Fixed...)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Garment, ClosetIndex, Generator)      │
//! │              No I/O                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use outfitter_core::domain::{
//!     ClosetIndex, Color, Formality, Garment, GarmentId, GenerationSettings, Material,
//!     OutfitGenerator, Palette, Subcategory, WeatherSnapshot,
//! };
//!
//! let wardrobe = vec![Garment::new(
//!     GarmentId::new(1),
//!     Subcategory::LongSleeve,
//!     Formality::Flex,
//!     Palette::solid(Color::new(0.1, 0.2, 0.5)),
//!     Material::WoolCotton,
//! )];
//!
//! let mut generator =
//!     OutfitGenerator::seeded(ClosetIndex::build(wardrobe), GenerationSettings::default(), 42);
//! let outfit = generator.generate(&WeatherSnapshot::constant(60), Formality::Informal);
//! assert!(outfit.top.is_some());
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        OutfitService, ResolvedOutfit, WardrobeService,
        ports::{OutfitStore, WardrobeStore, WeatherSource},
    };
    pub use crate::domain::{
        Category, ClosetIndex, Color, Formality, Garment, GarmentId, GenerationSettings,
        Location, Material, NewGarment, Outfit, OutfitGenerator, Palette, SavedOutfit,
        ScoringWeights, Slot, Subcategory, WeatherSnapshot,
    };
    pub use crate::error::{OutfitterError, OutfitterResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
