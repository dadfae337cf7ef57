//! Formality-aware index over a wardrobe.
//!
//! Garments are stored once, in wardrobe order. Buckets keyed by
//! `(category, formality)` hold indices into that store; a `Flex` garment is
//! indexed under all three formalities of its category.

use std::collections::HashMap;

use rand::Rng;
use tracing::trace;

use crate::domain::{
    entities::Garment,
    value_objects::{Category, Formality},
};

/// Default draws per bucket item when sampling candidates.
pub const DEFAULT_OVERSAMPLE: f64 = 1.5;

/// Largest oversampling factor honoured.
pub const MAX_OVERSAMPLE: f64 = 100.0;

/// Read-only view of a wardrobe, built once per generation request.
#[derive(Debug, Clone)]
pub struct ClosetIndex {
    garments: Vec<Garment>,
    buckets: HashMap<(Category, Formality), Vec<usize>>,
    oversample: f64,
}

impl ClosetIndex {
    pub fn build(wardrobe: impl IntoIterator<Item = Garment>) -> Self {
        let garments: Vec<Garment> = wardrobe.into_iter().collect();
        let mut buckets: HashMap<(Category, Formality), Vec<usize>> = HashMap::new();

        for (index, garment) in garments.iter().enumerate() {
            for &formality in garment.formality.visible_under() {
                let bucket = buckets.entry((garment.category, formality)).or_default();
                // Ids are unique within a bucket; a repeated id replaces the earlier record.
                match bucket.iter().position(|&i| garments[i].id == garment.id) {
                    Some(slot) => bucket[slot] = index,
                    None => bucket.push(index),
                }
            }
        }

        Self {
            garments,
            buckets,
            oversample: DEFAULT_OVERSAMPLE,
        }
    }

    /// Override the oversampling factor used by [`Self::sample_candidates`].
    ///
    /// Clamped to `0..=MAX_OVERSAMPLE`; NaN falls back to the default.
    pub fn with_oversample(mut self, oversample: f64) -> Self {
        self.oversample = if oversample.is_nan() {
            DEFAULT_OVERSAMPLE
        } else {
            oversample.clamp(0.0, MAX_OVERSAMPLE)
        };
        self
    }

    /// Every garment in the wardrobe, in input order.
    pub fn garments(&self) -> &[Garment] {
        &self.garments
    }

    pub fn is_empty(&self) -> bool {
        self.garments.is_empty()
    }

    /// Garments visible for a formality within a category.
    pub fn bucket(
        &self,
        formality: Formality,
        category: Category,
    ) -> impl Iterator<Item = &Garment> {
        self.indices(formality, category)
            .iter()
            .map(move |&i| &self.garments[i])
    }

    pub fn bucket_len(&self, formality: Formality, category: Category) -> usize {
        self.indices(formality, category).len()
    }

    /// Draw `ceil(oversample · n)` garments uniformly with replacement from
    /// the bucket of size `n`. Empty when the bucket is empty.
    ///
    /// Duplicates are expected; not every garment is guaranteed to appear.
    pub fn sample_candidates<R: Rng>(
        &self,
        formality: Formality,
        category: Category,
        rng: &mut R,
    ) -> Vec<&Garment> {
        let indices = self.indices(formality, category);
        let n = indices.len();
        if n == 0 {
            return Vec::new();
        }

        let draws = (n as f64 * self.oversample).ceil() as usize;
        let sample: Vec<&Garment> = (0..draws)
            .map(|_| &self.garments[indices[rng.gen_range(0..n)]])
            .collect();

        trace!(%category, %formality, bucket = n, draws, "Sampled candidates");
        sample
    }

    /// Share of full-body garments among full-body garments and tops for a
    /// formality. Zero when the closet has neither.
    pub fn full_body_ratio(&self, formality: Formality) -> f64 {
        let full_body = self.bucket_len(formality, Category::FullBody) as f64;
        let tops = self.bucket_len(formality, Category::Top) as f64;

        if full_body + tops == 0.0 {
            return 0.0;
        }
        full_body / (full_body + tops)
    }

    fn indices(&self, formality: Formality, category: Category) -> &[usize] {
        self.buckets
            .get(&(category, formality))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
