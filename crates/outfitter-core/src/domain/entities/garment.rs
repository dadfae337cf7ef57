//! Garments and their colors.
//!
//! A [`Garment`] is one physical item in a wardrobe. Besides the entity
//! itself this module owns the compact record form garments are persisted
//! in:
//!
//! ```text
//! id,category,subcategory,formality,#rrggbb,#rrggbb|null,material
//! 3,0,1,2,#ffffff,null,0
//! ```
//!
//! Enum fields are written as their numeric codes (see `value_objects`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{Category, Formality, Material, Subcategory},
};

// ── GarmentId ────────────────────────────────────────────────────────────────

/// Identifier of a garment, unique within one wardrobe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GarmentId(u32);

impl GarmentId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for GarmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GarmentId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|e| DomainError::InvalidGarment(format!("bad garment id '{s}': {e}")))
    }
}

// ── Color ────────────────────────────────────────────────────────────────────

/// An RGB color with channels in `[0, 1]`.
///
/// Serialized as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn max_channel(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    pub fn min_channel(&self) -> f64 {
        self.r.min(self.g).min(self.b)
    }

    pub fn mean_channel(&self) -> f64 {
        (self.r + self.g + self.b) / 3.0
    }

    pub fn is_in_gamut(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, DomainError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(DomainError::InvalidColor {
                value: hex.into(),
                reason: "expected six hex digits".into(),
            });
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|byte| f64::from(byte) / 255.0)
                .map_err(|e| DomainError::InvalidColor {
                    value: hex.into(),
                    reason: e.to_string(),
                })
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as lowercase `#rrggbb`. Channels are truncated, not rounded.
    pub fn to_hex(&self) -> String {
        // The epsilon keeps `from_hex(x).to_hex() == x` despite float error.
        let byte = |c: f64| ((c * 255.0 + 1e-9).floor() as i64).clamp(0, 255);
        format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.r),
            byte(self.g),
            byte(self.b)
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// ── Palette ──────────────────────────────────────────────────────────────────

/// A garment's colors: one primary, optionally one accent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Color>,
}

impl Palette {
    pub const fn solid(primary: Color) -> Self {
        Self {
            primary,
            accent: None,
        }
    }

    pub const fn with_accent(primary: Color, accent: Color) -> Self {
        Self {
            primary,
            accent: Some(accent),
        }
    }

    /// Primary first, then the accent if present.
    pub fn colors(self) -> impl Iterator<Item = Color> {
        std::iter::once(self.primary).chain(self.accent)
    }
}

// ── Garment ──────────────────────────────────────────────────────────────────

/// One item in a wardrobe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garment {
    pub id: GarmentId,
    pub category: Category,
    pub subcategory: Subcategory,
    pub formality: Formality,
    pub palette: Palette,
    pub material: Material,
}

impl Garment {
    pub fn new(
        id: GarmentId,
        subcategory: Subcategory,
        formality: Formality,
        palette: Palette,
        material: Material,
    ) -> Self {
        Self {
            id,
            category: subcategory.category(),
            subcategory,
            formality,
            palette,
            material,
        }
    }

    /// Encode into the persisted record form.
    pub fn to_record(&self) -> String {
        let accent = self
            .palette
            .accent
            .map_or_else(|| "null".to_string(), |c| c.to_hex());
        format!(
            "{},{},{},{},{},{},{}",
            self.id,
            self.category.code(),
            self.subcategory.code(),
            self.formality.code(),
            self.palette.primary.to_hex(),
            accent,
            self.material.code(),
        )
    }

    /// Decode a persisted record.
    ///
    /// The category field is taken as written; checking it against the
    /// subcategory is the validator's job.
    pub fn from_record(record: &str) -> Result<Self, DomainError> {
        let malformed = |reason: String| DomainError::MalformedRecord {
            record: record.to_string(),
            reason,
        };

        let parts: Vec<&str> = record.trim().split(',').map(str::trim).collect();
        if parts.len() != 7 {
            return Err(malformed(format!("expected 7 fields, found {}", parts.len())));
        }

        let code = |field: &str, name: &str| {
            field
                .parse::<u8>()
                .map_err(|e| malformed(format!("{name}: {e}")))
        };

        let id = parts[0]
            .parse::<u32>()
            .map(GarmentId::new)
            .map_err(|e| malformed(format!("id: {e}")))?;
        let category = Category::from_code(code(parts[1], "category")?)?;
        let subcategory = Subcategory::from_code(code(parts[2], "subcategory")?)?;
        let formality = Formality::from_code(code(parts[3], "formality")?)?;
        let primary = Color::from_hex(parts[4])?;
        let accent = match parts[5] {
            "null" | "" => None,
            hex => Some(Color::from_hex(hex)?),
        };
        let material = Material::from_code(code(parts[6], "material")?)?;

        Ok(Self {
            id,
            category,
            subcategory,
            formality,
            palette: Palette { primary, accent },
            material,
        })
    }
}

impl fmt::Display for Garment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} ({}, {})",
            self.id, self.palette.primary, self.subcategory, self.material, self.formality
        )
    }
}

// ── NewGarment ───────────────────────────────────────────────────────────────

/// A garment that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGarment {
    pub category: Category,
    pub subcategory: Subcategory,
    pub formality: Formality,
    pub palette: Palette,
    pub material: Material,
}

impl NewGarment {
    pub fn into_garment(self, id: GarmentId) -> Garment {
        Garment {
            id,
            category: self.category,
            subcategory: self.subcategory,
            formality: self.formality,
            palette: self.palette,
            material: self.material,
        }
    }
}
