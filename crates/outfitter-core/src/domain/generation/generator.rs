//! Outfit assembly.
//!
//! One call to [`OutfitGenerator::generate`] runs a fixed pipeline:
//!
//! ```text
//! silhouette ─┬─ full body ──────────┐
//!             └─ top ─► bottom ──────┴─► shoe ─► outerwear? ─► accessory ─► rules
//! ```
//!
//! Each stage samples candidates from the closet, scores them against what
//! has been picked so far and commits the winner. A stage with nothing to
//! choose from leaves its slot empty; nothing is backfilled afterwards.

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{
    closet::{ClosetIndex, DEFAULT_OVERSAMPLE},
    compatibility::{CompatibilityScorer, ScoringWeights},
    rules::apply_rules,
};
use crate::domain::{
    entities::{Garment, Outfit, Slot, WeatherSnapshot},
    value_objects::{Category, Formality},
};

/// Tunables for a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Draws per bucket item when sampling candidates.
    pub oversample: f64,
    /// An accessory scoring below this is left out.
    pub accessory_threshold: f64,
    /// Scaled temperature below which outerwear is always worn.
    pub outerwear_always_below: f64,
    /// Scaled temperature above which outerwear is never worn.
    pub outerwear_never_above: f64,
    pub weights: ScoringWeights,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            oversample: DEFAULT_OVERSAMPLE,
            accessory_threshold: 6.9,
            outerwear_always_below: 0.4,
            outerwear_never_above: 0.78,
            weights: ScoringWeights::default(),
        }
    }
}

/// Builds outfits from one closet.
///
/// The random source is injectable: [`OutfitGenerator::new`] seeds from the
/// OS, [`OutfitGenerator::seeded`] gives reproducible runs.
#[derive(Debug)]
pub struct OutfitGenerator<R = StdRng> {
    closet: ClosetIndex,
    scorer: CompatibilityScorer,
    settings: GenerationSettings,
    rng: R,
}

impl OutfitGenerator<StdRng> {
    pub fn new(closet: ClosetIndex, settings: GenerationSettings) -> Self {
        Self::with_rng(closet, settings, StdRng::from_entropy())
    }

    pub fn seeded(closet: ClosetIndex, settings: GenerationSettings, seed: u64) -> Self {
        Self::with_rng(closet, settings, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> OutfitGenerator<R> {
    pub fn with_rng(closet: ClosetIndex, settings: GenerationSettings, rng: R) -> Self {
        Self {
            closet: closet.with_oversample(settings.oversample),
            scorer: CompatibilityScorer::new(settings.weights),
            settings,
            rng,
        }
    }

    pub fn closet(&self) -> &ClosetIndex {
        &self.closet
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Assemble one outfit for the weather and requested formality.
    #[instrument(skip(self, weather), fields(weighted = weather.weighted_temperature()))]
    pub fn generate(&mut self, weather: &WeatherSnapshot, formality: Formality) -> Outfit {
        let Self {
            closet,
            scorer,
            settings,
            rng,
        } = self;
        let mut run = Run {
            closet,
            scorer,
            rng,
            weather,
            formality,
            chosen: Vec::new(),
            outfit: Outfit::empty(),
        };

        if run.wants_full_body() {
            run.add(Category::FullBody, None);
        } else {
            run.add(Category::Top, None);
            run.add(Category::Bottom, None);
        }

        run.add(Category::Shoe, None);

        if run.wants_outerwear(settings) {
            run.add(Category::Outerwear, None);
        }

        run.add(Category::Accessory, Some(settings.accessory_threshold));

        let mut outfit = run.outfit;
        let fired = apply_rules(&mut outfit);
        debug!(rules_fired = fired.len(), garments = outfit.garments().count(), "Outfit assembled");
        outfit
    }
}

/// State of a single `generate` call.
struct Run<'a, R> {
    closet: &'a ClosetIndex,
    scorer: &'a CompatibilityScorer,
    rng: &'a mut R,
    weather: &'a WeatherSnapshot,
    formality: Formality,
    chosen: Vec<&'a Garment>,
    outfit: Outfit,
}

impl<R: Rng> Run<'_, R> {
    /// Full body with probability equal to the closet's full-body ratio.
    /// No draw is made when the ratio is zero.
    fn wants_full_body(&mut self) -> bool {
        let ratio = self.closet.full_body_ratio(self.formality);
        if ratio <= 0.0 {
            return false;
        }

        let full_body = self.rng.gen_range(0.0..1.0) < ratio;
        debug!(ratio, full_body, "Silhouette chosen");
        full_body
    }

    /// Outerwear below the lower bound, none above the upper bound, and in
    /// between with probability falling linearly as it gets warmer.
    fn wants_outerwear(&mut self, settings: &GenerationSettings) -> bool {
        let scaled = self.weather.weighted_temperature().clamp(0.0, 100.0) / 100.0;

        let wanted = if scaled < settings.outerwear_always_below {
            true
        } else if scaled > settings.outerwear_never_above {
            false
        } else {
            self.rng.gen_range(0.0..1.0) > scaled
        };
        debug!(scaled, wanted, "Outerwear decision");
        wanted
    }

    /// Sample, score and commit the best garment for `category`.
    ///
    /// With a `threshold`, a winner scoring below it is discarded and does not
    /// join the chosen set.
    fn add(&mut self, category: Category, threshold: Option<f64>) {
        let options = self
            .closet
            .sample_candidates(self.formality, category, &mut *self.rng);

        let Some((garment, score)) = self.scorer.pick_best(&options, &self.chosen, self.weather)
        else {
            debug!(%category, "No candidates");
            return;
        };

        if threshold.is_some_and(|min| score < min) {
            debug!(%category, id = %garment.id, score, "Best candidate below threshold");
            return;
        }

        debug!(%category, id = %garment.id, score, "Selected");
        self.chosen.push(garment);
        self.outfit.set(Slot::for_category(category), garment.clone());
    }
}
