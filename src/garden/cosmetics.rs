//! Cosmetic attributes derived from the element id.
//!
//! Nothing here touches the RNG. Each choice is `string_hash(id + salt)` modulo
//! a table length, so any client holding an id renders the same element.

use crate::data::{base_colors, base_names, element_emoji, rarity_label, rarity_phrases, type_label};
use crate::shared::*;

use super::seed::hash_index;

pub const SCALE_STEPS: [f32; 5] = [0.85, 0.92, 1.0, 1.08, 1.15];

/// Lightness shifts for the five tonal variants, in pick order.
const VARIANT_ADJUSTMENTS: [f64; 5] = [-0.2, -0.1, 0.0, 0.1, 0.2];

#[derive(Debug, Clone, PartialEq)]
pub struct Cosmetics {
    pub name: String,
    pub description: String,
    pub emoji: String,
    pub color: String,
    pub scale: f32,
}

pub fn derive_cosmetics(seed: &str, element_type: ElementType, rarity: Rarity, mood: Mood) -> Cosmetics {
    Cosmetics {
        name: element_name(seed, element_type, rarity),
        description: element_description(element_type, rarity),
        emoji: element_emoji(element_type).to_string(),
        color: element_color(seed, element_type, mood),
        scale: element_scale(seed),
    }
}

/// Base name for the type, prefixed with a rarity phrase unless the element is
/// common or premium.
pub fn element_name(seed: &str, element_type: ElementType, rarity: Rarity) -> String {
    let names = base_names(element_type);
    let base = names[hash_index(&format!("{seed}{element_type}"), names.len())];

    let phrases = rarity_phrases(rarity);
    if rarity == Rarity::Common || element_type.is_premium() || phrases.is_empty() {
        return base.to_string();
    }

    let phrase = phrases[hash_index(&format!("{seed}{rarity}"), phrases.len())];
    format!("{phrase} {base}")
}

pub fn element_description(element_type: ElementType, rarity: Rarity) -> String {
    format!("{} {}", rarity_label(rarity), type_label(element_type))
}

pub fn element_color(seed: &str, element_type: ElementType, mood: Mood) -> String {
    let palette = base_colors(element_type, mood);
    let base = palette[hash_index(&format!("{seed}{element_type}{mood}"), palette.len())];

    let variants = color_variants(base);
    let pick = hash_index(&format!("{seed}{base}variant"), variants.len());
    variants[pick].clone()
}

pub fn element_scale(seed: &str) -> f32 {
    SCALE_STEPS[hash_index(&format!("{seed}scale"), SCALE_STEPS.len())]
}

/// Five tones of `hex`: each channel becomes
/// `channel + (255 - channel) * adjustment * 0.3`, rounded and clamped.
/// Malformed input yields five copies of the input.
pub fn color_variants(hex: &str) -> [String; 5] {
    let Some(rgb) = parse_hex(hex) else {
        return std::array::from_fn(|_| hex.to_string());
    };

    VARIANT_ADJUSTMENTS.map(|adjustment| {
        let [r, g, b] = rgb.map(|channel| {
            let c = channel as f64;
            (c + (255.0 - c) * adjustment * 0.3).round().clamp(0.0, 255.0) as u8
        });
        format!("#{r:02x}{g:02x}{b:02x}")
    })
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some([(value >> 16) as u8, (value >> 8) as u8, value as u8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_around_original() {
        let v = color_variants("#808080");
        assert_eq!(v[2], "#808080");
        // 128 + 127 * -0.06 = 120.38 -> 120
        assert_eq!(v[0], "#787878");
        // 128 + 127 * 0.03 = 131.81 -> 132
        assert_eq!(v[3], "#848484");
    }

    #[test]
    fn variants_of_white_stay_white_and_malformed_passes_through() {
        assert!(color_variants("#ffffff").iter().all(|c| c == "#ffffff"));
        assert!(color_variants("teal").iter().all(|c| c == "teal"));
    }

    #[test]
    fn common_and_premium_names_have_no_prefix() {
        let seed = "user42-2024-01-01";
        let common = element_name(seed, ElementType::Flower, Rarity::Common);
        assert!(base_names(ElementType::Flower).contains(&common.as_str()));
        assert_eq!(
            element_name(seed, ElementType::RainbowFlower, Rarity::Legendary),
            "Rainbow Bloom"
        );
    }

    #[test]
    fn rare_names_are_prefixed() {
        let name = element_name("user42-2024-01-01", ElementType::Tree, Rarity::Rare);
        let (phrase, base) = name.split_once(' ').unwrap();
        assert!(rarity_phrases(Rarity::Rare).contains(&phrase));
        assert!(base_names(ElementType::Tree).contains(&base));
    }

    #[test]
    fn description_is_fixed_lookup() {
        assert_eq!(element_description(ElementType::Crystal, Rarity::Epic), "Epic Crystal");
        assert_eq!(
            element_description(ElementType::AuroraTree, Rarity::Legendary),
            "Legendary Aurora Tree"
        );
    }

    #[test]
    fn cosmetics_are_pure_in_the_seed() {
        let a = derive_cosmetics("abc-2024-05-05", ElementType::Water, Rarity::Rare, Mood::Calm);
        let b = derive_cosmetics("abc-2024-05-05", ElementType::Water, Rarity::Rare, Mood::Calm);
        assert_eq!(a, b);
        assert!(SCALE_STEPS.contains(&a.scale));
        assert_eq!(a.color.len(), 7);
        assert_eq!(a.emoji, "💧");
    }
}
