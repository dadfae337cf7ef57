//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `outfitter-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `WardrobeStore`: Garment storage/retrieval
//!   - `OutfitStore`: Saved outfits
//!   - `WeatherSource`: Current weather for a location
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{OutfitStore, WardrobeStore, WeatherSource};

#[cfg(test)]
pub use output::{MockOutfitStore, MockWardrobeStore, MockWeatherSource};
