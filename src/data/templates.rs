use crate::shared::*;

/// A (type, rarity) pairing: the unit the generator draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementTemplate {
    pub element_type: ElementType,
    pub rarity: Rarity,
}

impl ElementTemplate {
    const fn new(element_type: ElementType, rarity: Rarity) -> Self {
        Self { element_type, rarity }
    }

    pub fn is_premium(&self) -> bool {
        self.element_type.is_premium()
    }
}

use ElementType as T;
use Rarity as R;

/// The full catalog. Declaration order is part of the deterministic contract.
pub const ELEMENT_TEMPLATES: &[ElementTemplate] = &[
    // ── Flowers ─────────────────────────────────────────────────────────
    ElementTemplate::new(T::Flower, R::Common),
    ElementTemplate::new(T::Flower, R::Uncommon),
    ElementTemplate::new(T::Flower, R::Rare),
    // ── Trees ───────────────────────────────────────────────────────────
    ElementTemplate::new(T::Tree, R::Common),
    ElementTemplate::new(T::Tree, R::Uncommon),
    ElementTemplate::new(T::Tree, R::Rare),
    ElementTemplate::new(T::Tree, R::Epic),
    // ── Stones ──────────────────────────────────────────────────────────
    ElementTemplate::new(T::Stone, R::Common),
    ElementTemplate::new(T::Stone, R::Uncommon),
    // ── Water ───────────────────────────────────────────────────────────
    ElementTemplate::new(T::Water, R::Common),
    ElementTemplate::new(T::Water, R::Rare),
    // ── Grass ───────────────────────────────────────────────────────────
    ElementTemplate::new(T::Grass, R::Common),
    ElementTemplate::new(T::Grass, R::Uncommon),
    // ── Mushrooms ───────────────────────────────────────────────────────
    ElementTemplate::new(T::Mushroom, R::Uncommon),
    ElementTemplate::new(T::Mushroom, R::Rare),
    ElementTemplate::new(T::Mushroom, R::Epic),
    // ── Crystals ────────────────────────────────────────────────────────
    ElementTemplate::new(T::Crystal, R::Rare),
    ElementTemplate::new(T::Crystal, R::Epic),
    ElementTemplate::new(T::Crystal, R::Legendary),
    // ── Decorations ─────────────────────────────────────────────────────
    ElementTemplate::new(T::Decoration, R::Common),
    ElementTemplate::new(T::Decoration, R::Uncommon),
    ElementTemplate::new(T::Decoration, R::Rare),
    ElementTemplate::new(T::Decoration, R::Epic),
    // ── Premium ─────────────────────────────────────────────────────────
    ElementTemplate::new(T::RainbowFlower, R::Legendary),
    ElementTemplate::new(T::GlowingCrystal, R::Epic),
    ElementTemplate::new(T::MysticMushroom, R::Legendary),
    ElementTemplate::new(T::AuroraTree, R::Legendary),
    ElementTemplate::new(T::StarlightDecoration, R::Epic),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_no_duplicates_and_covers_every_type() {
        let unique: HashSet<_> = ELEMENT_TEMPLATES.iter().collect();
        assert_eq!(unique.len(), ELEMENT_TEMPLATES.len());
        for t in ElementType::ALL {
            assert!(
                ELEMENT_TEMPLATES.iter().any(|tpl| tpl.element_type == t),
                "no template for {t}"
            );
        }
    }

    #[test]
    fn exactly_five_premium_templates() {
        assert_eq!(ELEMENT_TEMPLATES.iter().filter(|t| t.is_premium()).count(), 5);
    }
}
