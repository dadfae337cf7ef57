//! Outfit Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Fetch the wardrobe and the weather
//! 2. Index the wardrobe and run the generator
//! 3. Optionally persist the result as a saved outfit

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{OutfitStore, WardrobeStore, WeatherSource},
    },
    domain::{
        ClosetIndex, DomainValidator as validator, Formality, Garment, GarmentId,
        GenerationSettings, Location, Outfit, OutfitGenerator, SavedOutfit, Slot,
        WeatherSnapshot,
    },
    error::{OutfitterError, OutfitterResult},
};

/// A saved outfit with its garment ids looked up in the current wardrobe.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOutfit {
    pub id: Uuid,
    pub saved_at: DateTime<Utc>,
    pub outfit: Outfit,
    /// Ids that no longer exist in the wardrobe.
    pub missing: Vec<GarmentId>,
}

/// Outfit generation and saved-outfit management.
pub struct OutfitService {
    wardrobe: Box<dyn WardrobeStore>,
    outfits: Box<dyn OutfitStore>,
    weather: Box<dyn WeatherSource>,
    settings: GenerationSettings,
    seed: Option<u64>,
}

impl OutfitService {
    /// Create a new outfit service with the given adapters.
    pub fn new(
        wardrobe: Box<dyn WardrobeStore>,
        outfits: Box<dyn OutfitStore>,
        weather: Box<dyn WeatherSource>,
    ) -> Self {
        Self {
            wardrobe,
            outfits,
            weather,
            settings: GenerationSettings::default(),
            seed: None,
        }
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Seed every generation run. Without a seed each run draws from the OS.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Generate an outfit for today's weather at `location`.
    #[instrument(skip(self), fields(lat = location.latitude, lon = location.longitude))]
    pub fn generate(&self, location: Location, formality: Formality) -> OutfitterResult<Outfit> {
        let weather = self.weather.current(location)?;
        self.generate_with(&weather, formality)
    }

    /// Generate an outfit for a weather snapshot the caller already has.
    #[instrument(
        skip_all,
        fields(%formality, high = weather.high, low = weather.low, current = weather.current)
    )]
    pub fn generate_with(
        &self,
        weather: &WeatherSnapshot,
        formality: Formality,
    ) -> OutfitterResult<Outfit> {
        validator::validate_weather(weather).map_err(OutfitterError::Domain)?;

        let wardrobe = self.wardrobe.list()?;
        if wardrobe.is_empty() {
            warn!("Wardrobe is empty; the outfit will be empty too");
        }

        let closet = ClosetIndex::build(wardrobe);
        let outfit = match self.seed {
            Some(seed) => {
                OutfitGenerator::seeded(closet, self.settings, seed).generate(weather, formality)
            }
            None => OutfitGenerator::new(closet, self.settings).generate(weather, formality),
        };

        info!(garments = outfit.garments().count(), "Outfit generated");
        Ok(outfit)
    }

    /// Persist an outfit's garment ids.
    #[instrument(skip_all)]
    pub fn save(&self, outfit: &Outfit) -> OutfitterResult<SavedOutfit> {
        if outfit.is_empty() {
            return Err(
                ApplicationError::ValidationFailed("cannot save an empty outfit".into()).into(),
            );
        }

        let saved = SavedOutfit::new(outfit.ids());
        self.outfits.save(saved.clone())?;

        info!(id = %saved.id, "Outfit saved");
        Ok(saved)
    }

    /// Saved outfits resolved against the current wardrobe, oldest first.
    pub fn saved(&self) -> OutfitterResult<Vec<ResolvedOutfit>> {
        let wardrobe: HashMap<GarmentId, Garment> = self
            .wardrobe
            .list()?
            .into_iter()
            .map(|g| (g.id, g))
            .collect();

        Ok(self
            .outfits
            .list()?
            .into_iter()
            .map(|saved| resolve(saved, &wardrobe))
            .collect())
    }

    /// Delete a saved outfit.
    #[instrument(skip(self))]
    pub fn remove_saved(&self, id: Uuid) -> OutfitterResult<SavedOutfit> {
        let removed = self.outfits.remove(id)?;
        info!(%id, "Saved outfit removed");
        Ok(removed)
    }
}

fn resolve(saved: SavedOutfit, wardrobe: &HashMap<GarmentId, Garment>) -> ResolvedOutfit {
    let mut outfit = Outfit::empty();
    let mut missing = Vec::new();

    for slot in Slot::ALL {
        let Some(id) = saved.garments.get(slot) else {
            continue;
        };
        // Ids can repeat across categories; only accept the garment that fits the slot.
        match wardrobe.get(&id).filter(|g| Slot::for_category(g.category) == slot) {
            Some(garment) => outfit.set(slot, garment.clone()),
            None => missing.push(id),
        }
    }

    ResolvedOutfit {
        id: saved.id,
        saved_at: saved.saved_at,
        outfit,
        missing,
    }
}
