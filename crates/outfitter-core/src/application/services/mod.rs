//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "add a garment" or "dress me for today".

pub mod outfit_service;
pub mod wardrobe_service;

pub use outfit_service::{OutfitService, ResolvedOutfit};
pub use wardrobe_service::WardrobeService;
