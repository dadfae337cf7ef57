//! Hard combination rules applied to a finished outfit.
//!
//! Rules run once, in declaration order. Each one looks at the outfit as
//! left by the rules before it and can only empty its own slot.

use tracing::debug;

use crate::domain::{
    entities::{Outfit, Slot},
    value_objects::Subcategory,
};

/// A forbidden combination and the slot that gives way when it occurs.
#[derive(Debug, Clone, Copy)]
pub struct OutfitRule {
    pub name: &'static str,
    pub violated_by: fn(&Outfit) -> bool,
    pub drops: Slot,
}

fn is(outfit: &Outfit, slot: Slot, subcategory: Subcategory) -> bool {
    outfit
        .get(slot)
        .is_some_and(|garment| garment.subcategory == subcategory)
}

fn dress_with_sweatshirt(o: &Outfit) -> bool {
    is(o, Slot::FullBody, Subcategory::Dress) && is(o, Slot::Outerwear, Subcategory::Sweatshirt)
}

fn suit_with_outerwear(o: &Outfit) -> bool {
    is(o, Slot::FullBody, Subcategory::Suit) && o.get(Slot::Outerwear).is_some()
}

fn sleeveless_with_scarf(o: &Outfit) -> bool {
    o.get(Slot::Top).is_some_and(|top| top.subcategory.is_sleeveless())
        && is(o, Slot::Accessory, Subcategory::Scarf)
}

fn suit_with_headwear(o: &Outfit) -> bool {
    is(o, Slot::FullBody, Subcategory::Suit) && is(o, Slot::Accessory, Subcategory::Headwear)
}

pub const RULES: &[OutfitRule] = &[
    OutfitRule {
        name: "no sweatshirt over a dress",
        violated_by: dress_with_sweatshirt,
        drops: Slot::Outerwear,
    },
    OutfitRule {
        name: "no outerwear over a suit",
        violated_by: suit_with_outerwear,
        drops: Slot::Outerwear,
    },
    OutfitRule {
        name: "no scarf with a sleeveless top",
        violated_by: sleeveless_with_scarf,
        drops: Slot::Accessory,
    },
    OutfitRule {
        name: "no headwear with a suit",
        violated_by: suit_with_headwear,
        drops: Slot::Accessory,
    },
];

/// Apply [`RULES`] to `outfit`, returning the names of the rules that fired.
pub fn apply_rules(outfit: &mut Outfit) -> Vec<&'static str> {
    let mut fired = Vec::new();
    for rule in RULES {
        if (rule.violated_by)(outfit) {
            if let Some(dropped) = outfit.clear(rule.drops) {
                debug!(rule = rule.name, dropped = %dropped, "Rule removed garment");
            }
            fired.push(rule.name);
        }
    }
    fired
}

/// Whether any rule would still fire on `outfit`.
pub fn violates_any(outfit: &Outfit) -> bool {
    RULES.iter().any(|rule| (rule.violated_by)(outfit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{Color, Garment, GarmentId, Palette},
        value_objects::{Formality, Material},
    };

    fn item(id: u32, subcategory: Subcategory) -> Garment {
        Garment::new(
            GarmentId::new(id),
            subcategory,
            Formality::Flex,
            Palette::solid(Color::new(0.2, 0.2, 0.2)),
            Material::WoolCotton,
        )
    }

    fn outfit(items: &[Garment]) -> Outfit {
        let mut outfit = Outfit::empty();
        for garment in items {
            outfit.set(Slot::for_category(garment.category), garment.clone());
        }
        outfit
    }

    #[test]
    fn dress_drops_sweatshirt_but_keeps_jacket() {
        let mut with_sweatshirt =
            outfit(&[item(1, Subcategory::Dress), item(2, Subcategory::Sweatshirt)]);
        assert_eq!(apply_rules(&mut with_sweatshirt), ["no sweatshirt over a dress"]);
        assert!(with_sweatshirt.outerwear.is_none());
        assert!(with_sweatshirt.full_body.is_some());

        let mut with_jacket = outfit(&[item(1, Subcategory::Dress), item(2, Subcategory::Jacket)]);
        assert!(apply_rules(&mut with_jacket).is_empty());
        assert!(with_jacket.outerwear.is_some());
    }

    #[test]
    fn suit_drops_any_outerwear_and_headwear() {
        let mut suited = outfit(&[
            item(1, Subcategory::Suit),
            item(2, Subcategory::Cardigan),
            item(3, Subcategory::Headwear),
        ]);

        let fired = apply_rules(&mut suited);
        assert_eq!(fired, ["no outerwear over a suit", "no headwear with a suit"]);
        assert!(suited.outerwear.is_none());
        assert!(suited.accessory.is_none());
        assert!(suited.full_body.is_some());
    }

    #[test]
    fn suit_keeps_bag() {
        let mut suited = outfit(&[item(1, Subcategory::Suit), item(2, Subcategory::Bag)]);
        apply_rules(&mut suited);
        assert!(suited.accessory.is_some());
    }

    #[test]
    fn sleeveless_top_drops_scarf() {
        let mut summer = outfit(&[
            item(1, Subcategory::NoSleeve),
            item(2, Subcategory::Shorts),
            item(3, Subcategory::Scarf),
        ]);
        apply_rules(&mut summer);
        assert!(summer.accessory.is_none());
        assert!(summer.top.is_some());

        let mut sleeved = outfit(&[item(1, Subcategory::LongSleeve), item(3, Subcategory::Scarf)]);
        apply_rules(&mut sleeved);
        assert!(sleeved.accessory.is_some());
    }

    #[test]
    fn rules_leave_no_violation_behind() {
        let mut worst = outfit(&[
            item(1, Subcategory::Suit),
            item(2, Subcategory::Sweatshirt),
            item(3, Subcategory::Headwear),
        ]);
        assert!(violates_any(&worst));
        apply_rules(&mut worst);
        assert!(!violates_any(&worst));
    }

    #[test]
    fn empty_outfit_triggers_nothing() {
        let mut empty = Outfit::empty();
        assert!(apply_rules(&mut empty).is_empty());
        assert!(empty.is_empty());
    }
}
