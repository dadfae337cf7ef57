//! Wardrobe contents shared by the store adapters.

use outfitter_core::{
    application::ApplicationError,
    domain::{Garment, GarmentId, SavedOutfit},
    error::OutfitterResult,
};
use uuid::Uuid;

/// Garments and saved outfits, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WardrobeData {
    pub garments: Vec<Garment>,
    pub outfits: Vec<SavedOutfit>,
    /// Highest id ever stored, kept after that garment is removed.
    pub last_id: Option<GarmentId>,
}

impl WardrobeData {
    pub fn get(&self, id: GarmentId) -> OutfitterResult<Garment> {
        self.garments
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(|| ApplicationError::GarmentNotFound { id }.into())
    }

    pub fn insert(&mut self, garment: Garment) -> OutfitterResult<()> {
        if self.garments.iter().any(|g| g.id == garment.id) {
            return Err(ApplicationError::DuplicateGarment { id: garment.id }.into());
        }
        self.last_id = self.last_id.max(Some(garment.id));
        self.garments.push(garment);
        Ok(())
    }

    pub fn remove(&mut self, id: GarmentId) -> OutfitterResult<Garment> {
        let index = self
            .garments
            .iter()
            .position(|g| g.id == id)
            .ok_or(ApplicationError::GarmentNotFound { id })?;
        Ok(self.garments.remove(index))
    }

    /// One past the highest id ever stored or referenced by a saved outfit,
    /// starting at 1. Ids are never handed out twice.
    pub fn next_id(&self) -> GarmentId {
        let in_use = self.garments.iter().map(|g| g.id);
        let referenced = self.outfits.iter().flat_map(|o| o.garments.iter());

        in_use
            .chain(referenced)
            .chain(self.last_id)
            .max()
            .map_or(GarmentId::new(1), GarmentId::next)
    }

    pub fn save_outfit(&mut self, outfit: SavedOutfit) {
        self.outfits.push(outfit);
    }

    pub fn remove_outfit(&mut self, id: Uuid) -> OutfitterResult<SavedOutfit> {
        let index = self
            .outfits
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| ApplicationError::OutfitNotFound { id: id.to_string() })?;
        Ok(self.outfits.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outfitter_core::{
        domain::{Color, Formality, Material, OutfitIds, Palette, Subcategory},
        error::OutfitterError,
    };

    fn sandal(id: u32) -> Garment {
        Garment::new(
            GarmentId::new(id),
            Subcategory::Sandal,
            Formality::Informal,
            Palette::solid(Color::new(0.8, 0.7, 0.5)),
            Material::Leather,
        )
    }

    #[test]
    fn next_id_follows_highest() {
        let mut data = WardrobeData::default();
        assert_eq!(data.next_id(), GarmentId::new(1));

        data.insert(sandal(4)).unwrap();
        data.insert(sandal(2)).unwrap();
        assert_eq!(data.next_id(), GarmentId::new(5));
    }

    #[test]
    fn removed_ids_are_not_reissued() {
        let mut data = WardrobeData::default();
        data.insert(sandal(1)).unwrap();
        data.insert(sandal(2)).unwrap();
        data.remove(GarmentId::new(2)).unwrap();

        assert_eq!(data.next_id(), GarmentId::new(3));
    }

    #[test]
    fn saved_outfit_ids_are_not_reissued() {
        let mut data = WardrobeData::default();
        data.save_outfit(SavedOutfit::new(OutfitIds {
            shoe: Some(GarmentId::new(9)),
            ..OutfitIds::default()
        }));

        assert_eq!(data.next_id(), GarmentId::new(10));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut data = WardrobeData::default();
        data.insert(sandal(1)).unwrap();

        let err = data.insert(sandal(1)).unwrap_err();
        assert!(matches!(
            err,
            OutfitterError::Application(ApplicationError::DuplicateGarment { .. })
        ));
        assert_eq!(data.garments.len(), 1);
    }

    #[test]
    fn removing_unknown_ids_fails() {
        let mut data = WardrobeData::default();
        assert!(data.remove(GarmentId::new(3)).is_err());
        assert!(data.remove_outfit(Uuid::new_v4()).is_err());
    }
}
