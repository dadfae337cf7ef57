//! Outfits: six optional garment slots.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::garment::{Garment, GarmentId},
    value_objects::Category,
};

/// A position in an outfit. One slot per garment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Top,
    Bottom,
    Shoe,
    Outerwear,
    FullBody,
    Accessory,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Self::Top,
        Self::Bottom,
        Self::Shoe,
        Self::Outerwear,
        Self::FullBody,
        Self::Accessory,
    ];

    pub const fn for_category(category: Category) -> Self {
        match category {
            Category::Top => Self::Top,
            Category::Bottom => Self::Bottom,
            Category::Shoe => Self::Shoe,
            Category::FullBody => Self::FullBody,
            Category::Outerwear => Self::Outerwear,
            Category::Accessory => Self::Accessory,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Shoe => "shoe",
            Self::Outerwear => "outerwear",
            Self::FullBody => "fullbody",
            Self::Accessory => "accessory",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated outfit. Every slot may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub top: Option<Garment>,
    pub bottom: Option<Garment>,
    pub shoe: Option<Garment>,
    pub outerwear: Option<Garment>,
    #[serde(rename = "fullbody")]
    pub full_body: Option<Garment>,
    pub accessory: Option<Garment>,
}

impl Outfit {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> Option<&Garment> {
        self.slot_ref(slot).as_ref()
    }

    pub fn set(&mut self, slot: Slot, garment: Garment) {
        *self.slot_mut(slot) = Some(garment);
    }

    /// Empty a slot, returning what was in it.
    pub fn clear(&mut self, slot: Slot) -> Option<Garment> {
        self.slot_mut(slot).take()
    }

    pub fn is_empty(&self) -> bool {
        Slot::ALL.iter().all(|slot| self.get(*slot).is_none())
    }

    /// Filled slots in slot order.
    pub fn garments(&self) -> impl Iterator<Item = (Slot, &Garment)> {
        Slot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|g| (slot, g)))
    }

    pub fn ids(&self) -> OutfitIds {
        let id = |slot| self.get(slot).map(|g| g.id);
        OutfitIds {
            top: id(Slot::Top),
            bottom: id(Slot::Bottom),
            shoe: id(Slot::Shoe),
            outerwear: id(Slot::Outerwear),
            full_body: id(Slot::FullBody),
            accessory: id(Slot::Accessory),
        }
    }

    fn slot_ref(&self, slot: Slot) -> &Option<Garment> {
        match slot {
            Slot::Top => &self.top,
            Slot::Bottom => &self.bottom,
            Slot::Shoe => &self.shoe,
            Slot::Outerwear => &self.outerwear,
            Slot::FullBody => &self.full_body,
            Slot::Accessory => &self.accessory,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<Garment> {
        match slot {
            Slot::Top => &mut self.top,
            Slot::Bottom => &mut self.bottom,
            Slot::Shoe => &mut self.shoe,
            Slot::Outerwear => &mut self.outerwear,
            Slot::FullBody => &mut self.full_body,
            Slot::Accessory => &mut self.accessory,
        }
    }
}

/// Garment ids per slot; what gets persisted for a saved outfit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitIds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<GarmentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<GarmentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoe: Option<GarmentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outerwear: Option<GarmentId>,
    #[serde(default, rename = "fullbody", skip_serializing_if = "Option::is_none")]
    pub full_body: Option<GarmentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessory: Option<GarmentId>,
}

impl OutfitIds {
    pub fn get(&self, slot: Slot) -> Option<GarmentId> {
        match slot {
            Slot::Top => self.top,
            Slot::Bottom => self.bottom,
            Slot::Shoe => self.shoe,
            Slot::Outerwear => self.outerwear,
            Slot::FullBody => self.full_body,
            Slot::Accessory => self.accessory,
        }
    }

    pub fn contains(&self, id: GarmentId) -> bool {
        self.iter().any(|held| held == id)
    }

    /// Ids of the filled slots, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = GarmentId> + '_ {
        Slot::ALL.into_iter().filter_map(move |slot| self.get(slot))
    }
}

/// An outfit the user chose to keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedOutfit {
    pub id: Uuid,
    pub saved_at: DateTime<Utc>,
    pub garments: OutfitIds,
}

impl SavedOutfit {
    pub fn new(garments: OutfitIds) -> Self {
        Self {
            id: Uuid::new_v4(),
            saved_at: Utc::now(),
            garments,
        }
    }
}
