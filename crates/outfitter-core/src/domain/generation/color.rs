//! Hue and shade arithmetic for color matching.
//!
//! A color is split into two independent properties:
//!
//! - **hue**: the color with its grey component removed and stretched to
//!   full range (`(c - min) / (max - min)` per channel);
//! - **shade**: a `(whiteness, blackness)` pair, where whiteness measures
//!   saturation relative to brightness and blackness is the brightest channel.
//!
//! Similarities are `1 - distance`; below a cutoff they are replaced by a
//! flat penalty so that clashing colors drag an average down harder than
//! merely different ones.

use crate::domain::entities::Color;

/// Hue similarity below this is treated as a clash.
pub const HUE_CLASH_BELOW: f64 = 0.6;
/// Score given to a hue clash.
pub const HUE_CLASH_PENALTY: f64 = -1.0;
/// Shade similarity below this is treated as a clash.
pub const SHADE_CLASH_BELOW: f64 = 0.5;
/// Score given to a shade clash.
pub const SHADE_CLASH_PENALTY: f64 = -0.5;

/// Hues closer than this belong to the same family.
const HUE_FAMILY_DISTANCE: f64 = 0.2;
/// Shades closer than this on both axes belong to the same family.
const SHADE_FAMILY_DISTANCE: f64 = 0.1;

/// The color with its grey component removed, stretched to `[0, 1]`.
/// Greys (zero channel range) are returned unchanged.
pub fn true_hue(color: Color) -> Color {
    let min = color.min_channel();
    let range = color.max_channel() - min;

    if range == 0.0 {
        return color;
    }

    Color::new(
        (color.r - min) / range,
        (color.g - min) / range,
        (color.b - min) / range,
    )
}

/// Channel spread relative to brightness, scaled to roughly `[0, 1]`.
/// Near zero for greys and white; black is defined as zero.
pub fn whiteness(color: Color) -> f64 {
    let mean = color.mean_channel();
    if mean == 0.0 {
        return 0.0;
    }
    (color.max_channel() - color.min_channel()) / mean / 3.0
}

/// The brightest channel. Near zero for black.
pub fn blackness(color: Color) -> f64 {
    color.max_channel()
}

fn hue_distance(a: Color, b: Color) -> f64 {
    let (a, b) = (true_hue(a), true_hue(b));
    (a.r - b.r).abs() + (a.g - b.g).abs() + (a.b - b.b).abs()
}

fn shade_deltas(a: Color, b: Color) -> (f64, f64) {
    (
        (whiteness(a) - whiteness(b)).abs(),
        (blackness(a) - blackness(b)).abs(),
    )
}

/// `1 - manhattan(true_hue(a), true_hue(b))`. May be negative.
pub fn hue_similarity(a: Color, b: Color) -> f64 {
    1.0 - hue_distance(a, b)
}

/// `1 - |Δwhiteness| - |Δblackness|`. May be negative.
pub fn shade_similarity(a: Color, b: Color) -> f64 {
    let (dw, db) = shade_deltas(a, b);
    1.0 - dw - db
}

/// Mean hue similarity of `color` against each existing color, with clashes
/// replaced by [`HUE_CLASH_PENALTY`]. Zero when `existing` is empty.
pub fn hue_compatibility(color: Color, existing: &[Color]) -> f64 {
    penalized_mean(existing, |other| {
        let similarity = hue_similarity(color, other);
        if similarity < HUE_CLASH_BELOW {
            HUE_CLASH_PENALTY
        } else {
            similarity
        }
    })
}

/// Mean shade similarity of `color` against each existing color, with
/// clashes replaced by [`SHADE_CLASH_PENALTY`]. Zero when `existing` is empty.
pub fn shade_compatibility(color: Color, existing: &[Color]) -> f64 {
    penalized_mean(existing, |other| {
        let similarity = shade_similarity(color, other);
        if similarity < SHADE_CLASH_BELOW {
            SHADE_CLASH_PENALTY
        } else {
            similarity
        }
    })
}

fn penalized_mean(existing: &[Color], score: impl Fn(Color) -> f64) -> f64 {
    if existing.is_empty() {
        return 0.0;
    }
    existing.iter().map(|&c| score(c)).sum::<f64>() / existing.len() as f64
}

/// Number of distinct hue families, clustered greedily in input order.
pub fn hue_family_count(colors: &[Color]) -> usize {
    count_families(colors, |candidate, representative| {
        hue_distance(candidate, representative) >= HUE_FAMILY_DISTANCE
    })
}

/// Number of distinct shade families, clustered greedily in input order.
///
/// Two colors share a family only when both their whiteness and their
/// blackness differ by less than the family distance.
pub fn shade_family_count(colors: &[Color]) -> usize {
    count_families(colors, |candidate, representative| {
        let (dw, db) = shade_deltas(candidate, representative);
        dw >= SHADE_FAMILY_DISTANCE || db >= SHADE_FAMILY_DISTANCE
    })
}

/// A color founds a new family when it is `distinct` from every current
/// representative.
fn count_families(colors: &[Color], distinct: impl Fn(Color, Color) -> bool) -> usize {
    let mut representatives: Vec<Color> = Vec::new();
    for &color in colors {
        if representatives.iter().all(|&rep| distinct(color, rep)) {
            representatives.push(color);
        }
    }
    representatives.len()
}
