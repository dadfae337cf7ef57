//! Wardrobe Service - garment management operations.
//!
//! Handles adding, listing and removing garments. New garments are validated
//! and given the store's next free id.

use tracing::{info, instrument};

use crate::{
    application::ports::WardrobeStore,
    domain::{DomainValidator as validator, Garment, GarmentId, NewGarment},
    error::{OutfitterError, OutfitterResult},
};

/// Service for wardrobe operations.
pub struct WardrobeService {
    store: Box<dyn WardrobeStore>,
}

impl WardrobeService {
    /// Create a new wardrobe service.
    pub fn new(store: Box<dyn WardrobeStore>) -> Self {
        Self { store }
    }

    /// Validate and store a new garment, returning it with its assigned id.
    #[instrument(skip_all, fields(subcategory = %garment.subcategory))]
    pub fn add(&self, garment: NewGarment) -> OutfitterResult<Garment> {
        validator::validate_new_garment(&garment).map_err(OutfitterError::Domain)?;

        let id = self.store.next_id()?;
        let garment = garment.into_garment(id);
        self.store.insert(garment.clone())?;

        info!(id = %garment.id, "Garment added");
        Ok(garment)
    }

    /// Get a garment by id.
    pub fn get(&self, id: GarmentId) -> OutfitterResult<Garment> {
        self.store.get(id)
    }

    /// List all garments.
    pub fn list(&self) -> OutfitterResult<Vec<Garment>> {
        self.store.list()
    }

    /// Remove a garment.
    #[instrument(skip(self))]
    pub fn remove(&self, id: GarmentId) -> OutfitterResult<Garment> {
        let removed = self.store.remove(id)?;
        info!(%id, "Garment removed");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::{
        application::{ApplicationError, ports::MockWardrobeStore},
        domain::{Category, Color, DomainError, Formality, Material, Palette, Subcategory},
    };

    fn new_jacket() -> NewGarment {
        NewGarment {
            category: Category::Outerwear,
            subcategory: Subcategory::Jacket,
            formality: Formality::Informal,
            palette: Palette::solid(Color::new(0.2, 0.2, 0.2)),
            material: Material::Leather,
        }
    }

    #[test]
    fn add_assigns_next_id() {
        let mut store = MockWardrobeStore::new();
        store.expect_next_id().returning(|| Ok(GarmentId::new(5)));
        store
            .expect_insert()
            .withf(|g| g.id == GarmentId::new(5) && g.subcategory == Subcategory::Jacket)
            .times(1)
            .returning(|_| Ok(()));

        let service = WardrobeService::new(Box::new(store));
        let garment = service.add(new_jacket()).unwrap();

        assert_eq!(garment.id, GarmentId::new(5));
        assert_eq!(garment.category, Category::Outerwear);
    }

    #[test]
    fn add_rejects_mismatched_category_without_touching_store() {
        let mut store = MockWardrobeStore::new();
        store.expect_next_id().never();
        store.expect_insert().never();

        let service = WardrobeService::new(Box::new(store));
        let mut garment = new_jacket();
        garment.category = Category::Shoe;

        let err = service.add(garment).unwrap_err();
        assert!(matches!(
            err,
            OutfitterError::Domain(DomainError::CategoryMismatch { .. })
        ));
    }

    #[test]
    fn remove_propagates_not_found() {
        let mut store = MockWardrobeStore::new();
        store
            .expect_remove()
            .with(eq(GarmentId::new(9)))
            .returning(|id| Err(ApplicationError::GarmentNotFound { id }.into()));

        let service = WardrobeService::new(Box::new(store));
        let err = service.remove(GarmentId::new(9)).unwrap_err();
        assert!(matches!(
            err,
            OutfitterError::Application(ApplicationError::GarmentNotFound { .. })
        ));
    }
}
