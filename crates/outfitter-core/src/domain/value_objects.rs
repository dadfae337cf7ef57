//! Domain value objects: Category, Subcategory, Formality, Material.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Each carries its string form, a `FromStr` parser, and a stable numeric
//! code. The codes are the ordinals used by persisted wardrobe records, so
//! variants must only ever be appended, never reordered.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Category ─────────────────────────────────────────────────────────────────

/// Where on the body a garment is worn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Top,
    Bottom,
    Shoe,
    FullBody,
    Outerwear,
    Accessory,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Top,
        Self::Bottom,
        Self::Shoe,
        Self::FullBody,
        Self::Outerwear,
        Self::Accessory,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Shoe => "shoe",
            Self::FullBody => "full-body",
            Self::Outerwear => "outerwear",
            Self::Accessory => "accessory",
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Result<Self, DomainError> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| unknown("category", code))
    }

    /// Subcategories that are worn as this category.
    pub fn subcategories(self) -> impl Iterator<Item = Subcategory> {
        Subcategory::ALL
            .into_iter()
            .filter(move |sub| sub.category() == self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "top" | "tops" => Ok(Self::Top),
            "bottom" | "bottoms" => Ok(Self::Bottom),
            "shoe" | "shoes" => Ok(Self::Shoe),
            "full-body" | "fullbody" => Ok(Self::FullBody),
            "outerwear" => Ok(Self::Outerwear),
            "accessory" | "accessories" => Ok(Self::Accessory),
            other => Err(unknown("category", other)),
        }
    }
}

// ── Subcategory ──────────────────────────────────────────────────────────────

/// Finer garment type. Carries the temperature the garment is best worn at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subcategory {
    LongSleeve,
    ShortSleeve,
    NoSleeve,
    Skirt,
    Pants,
    Shorts,
    Sneaker,
    Boot,
    Sandal,
    Dress,
    Suit,
    Romper,
    Sweatshirt,
    Jacket,
    Cardigan,
    Headwear,
    Scarf,
    Bag,
}

impl Subcategory {
    pub const ALL: [Subcategory; 18] = [
        Self::LongSleeve,
        Self::ShortSleeve,
        Self::NoSleeve,
        Self::Skirt,
        Self::Pants,
        Self::Shorts,
        Self::Sneaker,
        Self::Boot,
        Self::Sandal,
        Self::Dress,
        Self::Suit,
        Self::Romper,
        Self::Sweatshirt,
        Self::Jacket,
        Self::Cardigan,
        Self::Headwear,
        Self::Scarf,
        Self::Bag,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LongSleeve => "long-sleeve",
            Self::ShortSleeve => "short-sleeve",
            Self::NoSleeve => "no-sleeve",
            Self::Skirt => "skirt",
            Self::Pants => "pants",
            Self::Shorts => "shorts",
            Self::Sneaker => "sneaker",
            Self::Boot => "boot",
            Self::Sandal => "sandal",
            Self::Dress => "dress",
            Self::Suit => "suit",
            Self::Romper => "romper",
            Self::Sweatshirt => "sweatshirt",
            Self::Jacket => "jacket",
            Self::Cardigan => "cardigan",
            Self::Headwear => "headwear",
            Self::Scarf => "scarf",
            Self::Bag => "bag",
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Result<Self, DomainError> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| unknown("subcategory", code))
    }

    /// Ideal outdoor temperature in °F, or `None` when the garment is worn
    /// regardless of temperature.
    pub const fn ideal_temperature(self) -> Option<f64> {
        match self {
            Self::LongSleeve => Some(60.0),
            Self::ShortSleeve => Some(70.0),
            Self::NoSleeve => Some(70.0),
            Self::Skirt => Some(70.0),
            Self::Pants => Some(60.0),
            Self::Shorts => Some(65.0),
            Self::Sneaker => None,
            Self::Boot => None,
            Self::Sandal => Some(70.0),
            Self::Dress => Some(70.0),
            Self::Suit => Some(60.0),
            Self::Romper => Some(60.0),
            Self::Sweatshirt => Some(50.0),
            Self::Jacket => Some(30.0),
            Self::Cardigan => Some(40.0),
            Self::Headwear => None,
            Self::Scarf => Some(30.0),
            Self::Bag => Some(60.0),
        }
    }

    /// The category this subcategory is worn as.
    pub const fn category(self) -> Category {
        match self {
            Self::LongSleeve | Self::ShortSleeve | Self::NoSleeve => Category::Top,
            Self::Skirt | Self::Pants | Self::Shorts => Category::Bottom,
            Self::Sneaker | Self::Boot | Self::Sandal => Category::Shoe,
            Self::Dress | Self::Suit | Self::Romper => Category::FullBody,
            Self::Sweatshirt | Self::Jacket | Self::Cardigan => Category::Outerwear,
            Self::Headwear | Self::Scarf | Self::Bag => Category::Accessory,
        }
    }

    pub const fn is_sleeveless(self) -> bool {
        matches!(self, Self::NoSleeve)
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subcategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "tank" | "tank-top" | "sleeveless" => return Ok(Self::NoSleeve),
            "hat" | "cap" => return Ok(Self::Headwear),
            "hoodie" => return Ok(Self::Sweatshirt),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|sub| sub.as_str() == normalized)
            .ok_or_else(|| unknown("subcategory", s))
    }
}

// ── Formality ────────────────────────────────────────────────────────────────

/// How dressy a garment (or a requested outfit) is.
///
/// `Flex` garments are eligible for any request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    Formal,
    Informal,
    Flex,
}

impl Formality {
    pub const ALL: [Formality; 3] = [Self::Formal, Self::Informal, Self::Flex];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Informal => "informal",
            Self::Flex => "flex",
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Result<Self, DomainError> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| unknown("formality", code))
    }

    /// Formalities under which a garment of this formality is visible.
    pub fn visible_under(self) -> &'static [Formality] {
        match self {
            Self::Formal => &[Self::Formal],
            Self::Informal => &[Self::Informal],
            Self::Flex => &Self::ALL,
        }
    }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formality {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "formal" => Ok(Self::Formal),
            "informal" | "casual" => Ok(Self::Informal),
            "flex" | "any" => Ok(Self::Flex),
            other => Err(unknown("formality", other)),
        }
    }
}

// ── Material ─────────────────────────────────────────────────────────────────

/// Fabric family. Pairwise compatibility is a fixed symmetric table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Material {
    WoolCotton,
    PlasticNylon,
    Leather,
    Denim,
    SoftFur,
    StretchySpandex,
    NotApplicable,
}

/// Row/column order follows the variant order of [`Material`].
const MATERIAL_COMPATIBILITY: [[f64; 7]; 7] = [
    [1.0, 0.5, 0.7, 0.8, 0.8, 0.8, 1.0],
    [0.5, 1.0, 0.5, 0.6, 0.5, 0.9, 1.0],
    [0.7, 0.5, 1.0, 0.8, 0.8, 0.6, 1.0],
    [0.8, 0.6, 0.8, 1.0, 0.7, 0.7, 1.0],
    [0.8, 0.5, 0.8, 0.7, 1.0, 0.5, 1.0],
    [0.8, 0.9, 0.6, 0.7, 0.5, 1.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
];

impl Material {
    pub const ALL: [Material; 7] = [
        Self::WoolCotton,
        Self::PlasticNylon,
        Self::Leather,
        Self::Denim,
        Self::SoftFur,
        Self::StretchySpandex,
        Self::NotApplicable,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WoolCotton => "wool-cotton",
            Self::PlasticNylon => "plastic-nylon",
            Self::Leather => "leather",
            Self::Denim => "denim",
            Self::SoftFur => "soft-fur",
            Self::StretchySpandex => "stretchy-spandex",
            Self::NotApplicable => "not-applicable",
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Result<Self, DomainError> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| unknown("material", code))
    }

    /// How well two materials are worn together, in `[0, 1]`.
    pub const fn compatibility_with(self, other: Material) -> f64 {
        MATERIAL_COMPATIBILITY[self as usize][other as usize]
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Material {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "wool-cotton" | "wool" | "cotton" => Ok(Self::WoolCotton),
            "plastic-nylon" | "plastic" | "nylon" => Ok(Self::PlasticNylon),
            "leather" => Ok(Self::Leather),
            "denim" => Ok(Self::Denim),
            "soft-fur" | "fur" => Ok(Self::SoftFur),
            "stretchy-spandex" | "spandex" | "stretch" => Ok(Self::StretchySpandex),
            "not-applicable" | "other" | "n/a" => Ok(Self::NotApplicable),
            other => Err(unknown("material", other)),
        }
    }
}

fn unknown(kind: &'static str, value: impl fmt::Display) -> DomainError {
    DomainError::UnknownVariant {
        kind,
        value: value.to_string(),
    }
}
