// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Outfitter.
//!
//! This module contains the wardrobe model and the outfit generation engine.
//! Storage and weather lookups are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Injected randomness**: The generator takes its `Rng` from the caller
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod generation;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    Color, Garment, GarmentId, Location, NewGarment, Outfit, OutfitIds, Palette, SavedOutfit,
    Slot, WeatherSnapshot,
};

pub use error::{DomainError, ErrorCategory};

pub use generation::{
    ClosetIndex, CompatibilityScorer, GenerationSettings, OutfitGenerator, ScoringWeights,
};

pub use value_objects::{Category, Formality, Material, Subcategory};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn category_parses_correctly() {
        assert_eq!(Category::from_str("top").unwrap(), Category::Top);
        assert_eq!(Category::from_str("FULL_BODY").unwrap(), Category::FullBody);
        assert_eq!(Category::from_str("shoes").unwrap(), Category::Shoe);
        assert!(Category::from_str("hat").is_err());
    }

    #[test]
    fn every_subcategory_belongs_to_one_category() {
        for category in Category::ALL {
            assert_eq!(category.subcategories().count(), 3, "{category}");
            assert!(category.subcategories().all(|sub| sub.category() == category));
        }
    }

    #[test]
    fn subcategory_ideal_temperatures() {
        assert_eq!(Subcategory::Jacket.ideal_temperature(), Some(30.0));
        assert_eq!(Subcategory::Shorts.ideal_temperature(), Some(65.0));
        assert_eq!(Subcategory::Sneaker.ideal_temperature(), None);
        assert_eq!(Subcategory::Headwear.ideal_temperature(), None);
        assert!(Subcategory::NoSleeve.is_sleeveless());
        assert!(!Subcategory::ShortSleeve.is_sleeveless());
    }

    #[test]
    fn formality_visibility() {
        assert_eq!(Formality::Flex.visible_under(), &Formality::ALL);
        assert_eq!(Formality::Formal.visible_under(), &[Formality::Formal]);
        assert_eq!(Formality::from_str("casual").unwrap(), Formality::Informal);
    }

    #[test]
    fn material_table_is_symmetric() {
        for a in Material::ALL {
            assert_eq!(a.compatibility_with(a), 1.0);
            assert_eq!(a.compatibility_with(Material::NotApplicable), 1.0);
            for b in Material::ALL {
                assert_eq!(a.compatibility_with(b), b.compatibility_with(a));
            }
        }
    }

    #[test]
    fn codes_round_trip() {
        for sub in Subcategory::ALL {
            assert_eq!(Subcategory::from_code(sub.code()).unwrap(), sub);
        }
        assert!(Material::from_code(7).is_err());
        assert!(Category::from_code(6).is_err());
    }

    // ========================================================================
    // Color Tests
    // ========================================================================

    #[test]
    fn color_hex_parsing() {
        let color = Color::from_hex("#ff0080").unwrap();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 128.0 / 255.0);
        assert_eq!(color.to_hex(), "#ff0080");

        assert!(Color::from_hex("#ff00").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn color_hex_truncates_channels() {
        assert_eq!(Color::new(0.5, 1.0, 0.0).to_hex(), "#7fff00");
    }

    // ========================================================================
    // Garment Record Tests
    // ========================================================================

    #[test]
    fn garment_record_round_trip() {
        let garment = Garment::new(
            GarmentId::new(3),
            Subcategory::Cardigan,
            Formality::Flex,
            Palette::with_accent(Color::from_hex("#336699").unwrap(), Color::new(1.0, 1.0, 1.0)),
            Material::WoolCotton,
        );

        let record = garment.to_record();
        assert_eq!(record, "3,4,14,2,#336699,#ffffff,0");
        assert_eq!(Garment::from_record(&record).unwrap(), garment);
    }

    #[test]
    fn garment_record_without_accent() {
        let garment = Garment::from_record("12,1,4,0,#000000,null,3").unwrap();
        assert_eq!(garment.id, GarmentId::new(12));
        assert_eq!(garment.subcategory, Subcategory::Pants);
        assert_eq!(garment.formality, Formality::Formal);
        assert_eq!(garment.material, Material::Denim);
        assert!(garment.palette.accent.is_none());
    }

    #[test]
    fn garment_record_rejects_garbage() {
        for record in ["", "1,2,3", "x,0,0,0,#000000,null,0", "1,0,0,9,#000000,null,0"] {
            assert!(Garment::from_record(record).is_err(), "{record}");
        }

        let err = Garment::from_record("1,0,0").unwrap_err();
        assert!(matches!(err, DomainError::MalformedRecord { .. }));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    // ========================================================================
    // Outfit Tests
    // ========================================================================

    #[test]
    fn outfit_slots() {
        let boot = Garment::new(
            GarmentId::new(8),
            Subcategory::Boot,
            Formality::Informal,
            Palette::solid(Color::new(0.1, 0.1, 0.1)),
            Material::Leather,
        );

        let mut outfit = Outfit::empty();
        assert!(outfit.is_empty());

        outfit.set(Slot::for_category(boot.category), boot.clone());
        assert_eq!(outfit.get(Slot::Shoe), Some(&boot));
        assert!(outfit.ids().contains(GarmentId::new(8)));
        assert_eq!(outfit.garments().count(), 1);

        assert_eq!(outfit.clear(Slot::Shoe), Some(boot));
        assert!(outfit.is_empty());
    }

    #[test]
    fn outfit_json_uses_fullbody_key_and_hex_colors() {
        let mut outfit = Outfit::empty();
        outfit.set(
            Slot::FullBody,
            Garment::new(
                GarmentId::new(2),
                Subcategory::Dress,
                Formality::Flex,
                Palette::solid(Color::new(1.0, 0.0, 0.0)),
                Material::StretchySpandex,
            ),
        );

        let json = serde_json::to_value(&outfit).unwrap();
        assert_eq!(json["fullbody"]["palette"]["primary"], "#ff0000");
        assert_eq!(json["fullbody"]["subcategory"], "dress");
        assert!(json["top"].is_null());

        let back: Outfit = serde_json::from_value(json).unwrap();
        assert_eq!(back, outfit);
    }

    #[test]
    fn weighted_temperature_doubles_current() {
        let weather = WeatherSnapshot::new(80, 40, 50);
        assert_eq!(weather.weighted_temperature(), 55.0);
    }
}
