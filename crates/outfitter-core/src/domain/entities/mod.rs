// ============================================================================
// domain/entities/mod.rs
// ============================================================================
pub mod garment;
pub mod outfit;
pub mod weather;

pub use garment::*;
pub use outfit::*;
pub use weather::*;
