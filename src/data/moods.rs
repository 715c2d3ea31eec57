use crate::shared::*;

/// How a mood steers generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodConfig {
    pub mood: Mood,
    /// Element types this mood may produce, premium variants included.
    pub preferred_types: &'static [ElementType],
    /// Non-negative fraction applied to every rarity weight (0.2 = +20%).
    pub rarity_bonus: f64,
}

const MOOD_CONFIGS: [MoodConfig; 6] = [
    MoodConfig {
        mood: Mood::Joy,
        preferred_types: &[
            ElementType::Flower,
            ElementType::Decoration,
            ElementType::RainbowFlower,
            ElementType::StarlightDecoration,
        ],
        rarity_bonus: 0.2,
    },
    MoodConfig {
        mood: Mood::Calm,
        preferred_types: &[
            ElementType::Tree,
            ElementType::Water,
            ElementType::Grass,
            ElementType::AuroraTree,
        ],
        rarity_bonus: 0.1,
    },
    MoodConfig {
        mood: Mood::Stress,
        preferred_types: &[ElementType::Stone, ElementType::Grass, ElementType::Mushroom],
        rarity_bonus: 0.0,
    },
    MoodConfig {
        mood: Mood::Sadness,
        preferred_types: &[
            ElementType::Water,
            ElementType::Mushroom,
            ElementType::MysticMushroom,
        ],
        rarity_bonus: 0.05,
    },
    MoodConfig {
        mood: Mood::Anger,
        preferred_types: &[
            ElementType::Stone,
            ElementType::Crystal,
            ElementType::GlowingCrystal,
        ],
        rarity_bonus: 0.0,
    },
    MoodConfig {
        mood: Mood::Anxiety,
        preferred_types: &[ElementType::Crystal, ElementType::Grass, ElementType::Tree],
        rarity_bonus: 0.15,
    },
];

pub fn mood_config(mood: Mood) -> &'static MoodConfig {
    MOOD_CONFIGS
        .iter()
        .find(|config| config.mood == mood)
        .unwrap_or(&MOOD_CONFIGS[0])
}
