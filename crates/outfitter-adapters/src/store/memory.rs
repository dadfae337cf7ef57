//! In-memory wardrobe store.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use outfitter_core::{
    application::{
        ApplicationError,
        ports::{OutfitStore, WardrobeStore},
    },
    domain::{Garment, GarmentId, SavedOutfit},
    error::OutfitterResult,
};
use uuid::Uuid;

use super::data::WardrobeData;

/// Thread-safe in-memory wardrobe and saved-outfit store.
///
/// Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCloset {
    inner: Arc<RwLock<WardrobeData>>,
}

impl InMemoryCloset {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `garments` as given, duplicates included.
    pub fn with_garments(garments: impl IntoIterator<Item = Garment>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(WardrobeData {
                garments: garments.into_iter().collect(),
                ..WardrobeData::default()
            })),
        }
    }

    /// Get the number of garments.
    pub fn len(&self) -> usize {
        self.read().map(|data| data.garments.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> OutfitterResult<RwLockReadGuard<'_, WardrobeData>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }

    fn write(&self) -> OutfitterResult<RwLockWriteGuard<'_, WardrobeData>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError.into())
    }
}

impl WardrobeStore for InMemoryCloset {
    fn list(&self) -> OutfitterResult<Vec<Garment>> {
        Ok(self.read()?.garments.clone())
    }

    fn get(&self, id: GarmentId) -> OutfitterResult<Garment> {
        self.read()?.get(id)
    }

    fn insert(&self, garment: Garment) -> OutfitterResult<()> {
        self.write()?.insert(garment)
    }

    fn remove(&self, id: GarmentId) -> OutfitterResult<Garment> {
        self.write()?.remove(id)
    }

    fn next_id(&self) -> OutfitterResult<GarmentId> {
        Ok(self.read()?.next_id())
    }
}

impl OutfitStore for InMemoryCloset {
    fn save(&self, outfit: SavedOutfit) -> OutfitterResult<()> {
        self.write()?.save_outfit(outfit);
        Ok(())
    }

    fn list(&self) -> OutfitterResult<Vec<SavedOutfit>> {
        Ok(self.read()?.outfits.clone())
    }

    fn remove(&self, id: Uuid) -> OutfitterResult<SavedOutfit> {
        self.write()?.remove_outfit(id)
    }
}
