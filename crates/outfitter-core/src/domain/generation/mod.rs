//! The outfit generation engine.
//!
//! ```text
//! wardrobe ─► ClosetIndex ─► OutfitGenerator ─► Outfit
//!                                  │
//!                                  └─ CompatibilityScorer (per candidate)
//! ```
//!
//! Everything here is synchronous and free of I/O. Randomness comes from
//! the `Rng` handed to the generator.

pub mod closet;
pub mod color;
pub mod compatibility;
pub mod generator;
pub mod rules;

pub use closet::{ClosetIndex, DEFAULT_OVERSAMPLE};
pub use compatibility::{CompatibilityScorer, ScoringWeights};
pub use generator::{GenerationSettings, OutfitGenerator};
pub use rules::{OutfitRule, RULES, apply_rules, violates_any};
