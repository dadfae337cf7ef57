//! Wardrobe and saved-outfit stores.

mod data;
pub mod memory;
pub mod toml_file;

pub use data::WardrobeData;
pub use memory::InMemoryCloset;
pub use toml_file::TomlCloset;
