//! Scoring a candidate garment against the garments already chosen.
//!
//! A score is a weighted sum of three sub-scores:
//!
//! | Sub-score | Range | Measures |
//! |-----------|-------|----------|
//! | weather   | `[0.3, 1]` | distance between the day's temperature and the subcategory's ideal |
//! | material  | `[0.5, 1]` | mean pairwise material compatibility |
//! | color     | `[-1, 1]`  | hue and shade agreement with every existing color |
//!
//! With the default weights (4, 1, 5) a well-matched garment scores close to 10.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::color::{
    hue_compatibility, hue_family_count, shade_compatibility, shade_family_count,
};
use crate::domain::entities::{Color, Garment, WeatherSnapshot};

/// Weather score for subcategories that do not depend on temperature.
pub const TEMPERATURE_INDEPENDENT_SCORE: f64 = 0.8;

/// Share of the color score taken by the primary color when an accent exists.
const PRIMARY_SHARE: f64 = 0.7;

/// Relative weights of the three sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub weather: f64,
    pub material: f64,
    pub color: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            weather: 4.0,
            material: 1.0,
            color: 5.0,
        }
    }
}

/// Stateless scorer; cheap to copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityScorer {
    weights: ScoringWeights,
}

impl CompatibilityScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Weighted sum of the weather, material and color sub-scores.
    pub fn score(
        &self,
        candidate: &Garment,
        chosen: &[&Garment],
        weather: &WeatherSnapshot,
    ) -> f64 {
        self.weights.weather * self.weather_score(candidate, weather)
            + self.weights.material * self.material_score(candidate, chosen)
            + self.weights.color * self.color_score(candidate, chosen)
    }

    /// `1 - |effective - ideal|` with both temperatures divided by 100 and the
    /// effective temperature clamped to 30..=70 °F.
    pub fn weather_score(&self, candidate: &Garment, weather: &WeatherSnapshot) -> f64 {
        let Some(ideal) = candidate.subcategory.ideal_temperature() else {
            return TEMPERATURE_INDEPENDENT_SCORE;
        };

        let effective = weather.weighted_temperature().clamp(30.0, 70.0) / 100.0;
        1.0 - (effective - ideal / 100.0).abs()
    }

    /// Mean material compatibility against the chosen garments; 1 when
    /// nothing has been chosen.
    pub fn material_score(&self, candidate: &Garment, chosen: &[&Garment]) -> f64 {
        if chosen.is_empty() {
            return 1.0;
        }

        let total: f64 = chosen
            .iter()
            .map(|existing| candidate.material.compatibility_with(existing.material))
            .sum();
        total / chosen.len() as f64
    }

    /// Color agreement with every primary and accent already chosen.
    ///
    /// When the existing colors span several hue families the shade has to
    /// match as well; otherwise only the hue counts. An accent contributes
    /// 30% of the result. Neutral (1) when nothing has been chosen;
    /// [`Self::pick_best`] never scores against an empty chosen set.
    pub fn color_score(&self, candidate: &Garment, chosen: &[&Garment]) -> f64 {
        let existing: Vec<Color> = chosen.iter().flat_map(|g| g.palette.colors()).collect();
        if existing.is_empty() {
            return 1.0;
        }

        let hue_families = hue_family_count(&existing);
        let shade_matters = hue_families > 1;
        trace!(
            hue_families,
            shade_families = shade_family_count(&existing),
            "Color families in chosen set"
        );

        // A single hue family is judged on hue alone, however many shades it spans.
        let evaluate = |color: Color| {
            if shade_matters {
                (hue_compatibility(color, &existing) + shade_compatibility(color, &existing)) / 2.0
            } else {
                hue_compatibility(color, &existing)
            }
        };

        let primary = evaluate(candidate.palette.primary);
        match candidate.palette.accent {
            Some(accent) => PRIMARY_SHARE * primary + (1.0 - PRIMARY_SHARE) * evaluate(accent),
            None => primary,
        }
    }

    /// Highest-scoring option, first wins ties.
    ///
    /// The running best starts at the first option with a score of zero, so
    /// when no option scores above zero the first option is returned with a
    /// score of zero. `None` only for an empty slice.
    ///
    /// With nothing chosen yet the color score has no colors to average
    /// over, so no option is scored: the first sampled option is returned
    /// with a score of zero.
    pub fn pick_best<'a>(
        &self,
        options: &[&'a Garment],
        chosen: &[&Garment],
        weather: &WeatherSnapshot,
    ) -> Option<(&'a Garment, f64)> {
        let first = *options.first()?;
        if chosen.is_empty() {
            return Some((first, 0.0));
        }

        let best = options.iter().fold((first, 0.0), |(best, best_score), &option| {
            let score = self.score(option, chosen, weather);
            if score > best_score {
                (option, score)
            } else {
                (best, best_score)
            }
        });
        Some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{GarmentId, Palette},
        value_objects::{Formality, Material, Subcategory},
    };
    use approx::assert_relative_eq;

    const GREY: Color = Color::new(0.5, 0.5, 0.5);
    const PINK: Color = Color::new(1.0, 0.6, 1.0);
    const LIGHT_RED: Color = Color::new(1.0, 0.6, 0.6);
    const DARK_GREEN: Color = Color::new(0.05, 0.3, 0.05);

    fn garment(id: u32, subcategory: Subcategory) -> Garment {
        dressed(id, subcategory, Palette::solid(GREY), Material::NotApplicable)
    }

    fn dressed(id: u32, subcategory: Subcategory, palette: Palette, material: Material) -> Garment {
        Garment::new(GarmentId::new(id), subcategory, Formality::Flex, palette, material)
    }

    fn scorer() -> CompatibilityScorer {
        CompatibilityScorer::default()
    }

    #[test]
    fn cold_weather_prefers_cold_weather_garments() {
        let cold = WeatherSnapshot::constant(0);
        let s = scorer();

        let pairs = [
            (Subcategory::Jacket, Subcategory::Cardigan),
            (Subcategory::Sneaker, Subcategory::Sandal),
            (Subcategory::LongSleeve, Subcategory::NoSleeve),
            (Subcategory::Scarf, Subcategory::Headwear),
        ];
        for (warmer, cooler) in pairs {
            let warmer_score = s.weather_score(&garment(1, warmer), &cold);
            let cooler_score = s.weather_score(&garment(2, cooler), &cold);
            assert!(warmer_score > cooler_score, "{warmer} should beat {cooler} when cold");
        }
    }

    #[test]
    fn warm_weather_prefers_warm_weather_garments() {
        let warm = WeatherSnapshot::constant(100);
        let s = scorer();

        let pairs = [
            (Subcategory::Cardigan, Subcategory::Jacket),
            (Subcategory::Sandal, Subcategory::Sneaker),
            (Subcategory::NoSleeve, Subcategory::LongSleeve),
            (Subcategory::Headwear, Subcategory::Scarf),
        ];
        for (lighter, heavier) in pairs {
            let lighter_score = s.weather_score(&garment(1, lighter), &warm);
            let heavier_score = s.weather_score(&garment(2, heavier), &warm);
            assert!(lighter_score > heavier_score, "{lighter} should beat {heavier} when warm");
        }
    }

    #[test]
    fn weather_score_clamps_effective_temperature() {
        let s = scorer();
        let jacket = garment(1, Subcategory::Jacket);

        // 0 °F clamps to 30 °F, the jacket's ideal
        assert_relative_eq!(s.weather_score(&jacket, &WeatherSnapshot::constant(0)), 1.0);
        // 100 °F clamps to 70 °F
        assert_relative_eq!(s.weather_score(&jacket, &WeatherSnapshot::constant(100)), 0.6);
        assert_relative_eq!(
            s.weather_score(&garment(2, Subcategory::Boot), &WeatherSnapshot::constant(50)),
            TEMPERATURE_INDEPENDENT_SCORE
        );
    }

    #[test]
    fn weather_score_weights_current_temperature_double() {
        let s = scorer();
        let pants = garment(1, Subcategory::Pants);
        // (40 + 60 + 2·70) / 4 = 60, the ideal for pants
        assert_relative_eq!(s.weather_score(&pants, &WeatherSnapshot::new(40, 60, 70)), 1.0);
    }

    #[test]
    fn stretch_matches_cotton_better_than_leather() {
        let s = scorer();
        let grey = Palette::solid(GREY);
        let stretch = dressed(1, Subcategory::Pants, grey, Material::StretchySpandex);
        let cotton = dressed(2, Subcategory::LongSleeve, grey, Material::WoolCotton);
        let leather = dressed(3, Subcategory::LongSleeve, grey, Material::Leather);

        assert!(s.material_score(&cotton, &[&stretch]) > s.material_score(&leather, &[&stretch]));
    }

    #[test]
    fn material_score_averages_and_defaults_to_one() {
        let s = scorer();
        let denim = dressed(1, Subcategory::Pants, Palette::solid(GREY), Material::Denim);
        let nylon = dressed(2, Subcategory::Jacket, Palette::solid(GREY), Material::PlasticNylon);
        let cotton =
            dressed(3, Subcategory::LongSleeve, Palette::solid(GREY), Material::WoolCotton);

        assert_relative_eq!(s.material_score(&cotton, &[]), 1.0);
        // (0.8 + 0.5) / 2
        assert_relative_eq!(s.material_score(&cotton, &[&denim, &nylon]), 0.65);
    }

    #[test]
    fn shared_hue_outscores_clashing_hue() {
        let s = scorer();
        let pink = dressed(1, Subcategory::LongSleeve, Palette::solid(PINK), Material::WoolCotton);
        let magenta = dressed(
            2,
            Subcategory::Pants,
            Palette::solid(Color::new(0.8, 0.2, 0.8)),
            Material::WoolCotton,
        );
        let dark_green =
            dressed(3, Subcategory::Pants, Palette::solid(DARK_GREEN), Material::WoolCotton);

        assert_relative_eq!(s.color_score(&magenta, &[&pink]), 1.0);
        assert_relative_eq!(s.color_score(&dark_green, &[&pink]), -1.0);
    }

    #[test]
    fn shade_counts_once_chosen_colors_span_several_hues() {
        let s = scorer();
        let pink = dressed(1, Subcategory::LongSleeve, Palette::solid(PINK), Material::WoolCotton);
        let light_red =
            dressed(2, Subcategory::Pants, Palette::solid(LIGHT_RED), Material::WoolCotton);
        let candidate =
            dressed(3, Subcategory::Sandal, Palette::solid(LIGHT_RED), Material::WoolCotton);

        let hue_only = hue_compatibility(LIGHT_RED, &[PINK, LIGHT_RED]);
        let shade = shade_compatibility(LIGHT_RED, &[PINK, LIGHT_RED]);
        assert_relative_eq!(
            s.color_score(&candidate, &[&pink, &light_red]),
            (hue_only + shade) / 2.0
        );
    }

    #[test]
    fn color_score_is_neutral_with_nothing_chosen() {
        let pink = dressed(1, Subcategory::LongSleeve, Palette::solid(PINK), Material::WoolCotton);
        assert_relative_eq!(scorer().color_score(&pink, &[]), 1.0);
    }

    #[test]
    fn accent_takes_thirty_percent_of_color_score() {
        let s = scorer();
        let red = Color::new(1.0, 0.0, 0.0);
        let green = Color::new(0.0, 1.0, 0.0);
        let base = dressed(1, Subcategory::Pants, Palette::solid(red), Material::WoolCotton);

        let solid = dressed(2, Subcategory::LongSleeve, Palette::solid(red), Material::WoolCotton);
        let accented = dressed(
            3,
            Subcategory::LongSleeve,
            Palette::with_accent(red, green),
            Material::WoolCotton,
        );

        assert_relative_eq!(s.color_score(&solid, &[&base]), 1.0);
        // 0.7 · 1 + 0.3 · (-1)
        assert_relative_eq!(s.color_score(&accented, &[&base]), 0.4);
    }

    #[test]
    fn chosen_accents_count_as_existing_colors() {
        let s = scorer();
        let red = Color::new(1.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 1.0);
        let solid_red = dressed(1, Subcategory::Pants, Palette::solid(red), Material::WoolCotton);
        let red_with_blue = dressed(
            2,
            Subcategory::Pants,
            Palette::with_accent(red, blue),
            Material::WoolCotton,
        );
        let candidate =
            dressed(3, Subcategory::LongSleeve, Palette::solid(red), Material::WoolCotton);

        assert!(
            s.color_score(&candidate, &[&solid_red]) > s.color_score(&candidate, &[&red_with_blue])
        );
    }

    #[test]
    fn score_combines_weighted_sub_scores() {
        let s = scorer();
        let boot = garment(1, Subcategory::Boot);
        // 4 · 0.8 + 1 · 1 + 5 · 1
        assert_relative_eq!(s.score(&boot, &[], &WeatherSnapshot::constant(50)), 9.2);

        let custom = CompatibilityScorer::new(ScoringWeights {
            weather: 1.0,
            material: 0.0,
            color: 0.0,
        });
        assert_relative_eq!(custom.score(&boot, &[], &WeatherSnapshot::constant(50)), 0.8);
    }

    #[test]
    fn pick_best_prefers_highest_score() {
        let s = scorer();
        let pants = garment(9, Subcategory::Pants);
        let jacket = garment(1, Subcategory::Jacket);
        let cardigan = garment(2, Subcategory::Cardigan);
        let cold = WeatherSnapshot::constant(0);

        let (best, score) = s.pick_best(&[&cardigan, &jacket], &[&pants], &cold).unwrap();
        assert_eq!(best.id, jacket.id);
        assert_relative_eq!(score, s.score(&jacket, &[&pants], &cold));
    }

    #[test]
    fn pick_best_keeps_first_on_ties() {
        let s = scorer();
        let pants = garment(9, Subcategory::Pants);
        let first = garment(1, Subcategory::Boot);
        let second = garment(2, Subcategory::Sneaker);

        let (best, _) = s
            .pick_best(&[&first, &second], &[&pants], &WeatherSnapshot::constant(50))
            .unwrap();
        assert_eq!(best.id, GarmentId::new(1));
    }

    #[test]
    fn pick_best_floors_at_zero() {
        let zero = CompatibilityScorer::new(ScoringWeights {
            weather: 0.0,
            material: 0.0,
            color: -1.0,
        });
        let pants = garment(9, Subcategory::Pants);
        let first = garment(1, Subcategory::Boot);
        let second = garment(2, Subcategory::Sneaker);

        let (best, score) = zero
            .pick_best(&[&first, &second], &[&pants], &WeatherSnapshot::constant(50))
            .unwrap();
        assert_eq!(best.id, GarmentId::new(1));
        assert_eq!(score, 0.0);
    }

    #[test]
    fn first_pick_is_the_first_option_unscored() {
        let s = scorer();
        let cardigan = garment(1, Subcategory::Cardigan);
        let jacket = garment(2, Subcategory::Jacket);

        // The jacket scores higher in the cold but nothing is chosen yet.
        let (best, score) = s
            .pick_best(&[&cardigan, &jacket], &[], &WeatherSnapshot::constant(0))
            .unwrap();
        assert_eq!(best.id, cardigan.id);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn pick_best_of_nothing_is_none() {
        assert!(scorer().pick_best(&[], &[], &WeatherSnapshot::constant(50)).is_none());
    }
}
