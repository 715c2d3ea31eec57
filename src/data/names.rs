use crate::shared::*;

/// Base display names. Mundane types carry ten, premium types exactly one.
pub fn base_names(element_type: ElementType) -> &'static [&'static str] {
    match element_type {
        ElementType::Flower => &[
            "Daisy", "Tulip", "Bluebell", "Poppy", "Marigold",
            "Lavender", "Camellia", "Peony", "Violet", "Sunflower",
        ],
        ElementType::Tree => &[
            "Birch", "Maple", "Willow", "Oak", "Pine",
            "Cherry Tree", "Cedar", "Aspen", "Juniper", "Rowan",
        ],
        ElementType::Stone => &[
            "Pebble", "Boulder", "River Stone", "Granite", "Basalt",
            "Moonstone", "Flint", "Slate", "Sandstone", "Marble",
        ],
        ElementType::Water => &[
            "Spring", "Pond", "Brook", "Dewdrop", "Puddle",
            "Fountain", "Stream", "Lagoon", "Well", "Waterfall",
        ],
        ElementType::Grass => &[
            "Clover", "Fern", "Moss", "Reed", "Sedge",
            "Bamboo", "Meadow Grass", "Ivy", "Sorrel", "Thyme",
        ],
        ElementType::Mushroom => &[
            "Chanterelle", "Morel", "Toadstool", "Puffball", "Porcini",
            "Shiitake", "Oyster Cap", "Inkcap", "Fairy Ring", "Truffle",
        ],
        ElementType::Crystal => &[
            "Quartz", "Amethyst", "Topaz", "Sapphire", "Emerald",
            "Opal", "Garnet", "Citrine", "Aquamarine", "Obsidian",
        ],
        ElementType::Decoration => &[
            "Lantern", "Wind Chime", "Bench", "Birdhouse", "Garden Gnome",
            "Paper Crane", "Stone Path", "Bird Bath", "Sun Dial", "Wooden Arch",
        ],
        ElementType::RainbowFlower => &["Rainbow Bloom"],
        ElementType::GlowingCrystal => &["Glowing Heartstone"],
        ElementType::MysticMushroom => &["Mystic Moonshroom"],
        ElementType::AuroraTree => &["Aurora Tree"],
        ElementType::StarlightDecoration => &["Starlight Lantern"],
    }
}

/// Prefix phrases attached to non-common, non-premium names.
pub fn rarity_phrases(rarity: Rarity) -> &'static [&'static str] {
    match rarity {
        Rarity::Common => &[],
        Rarity::Uncommon => &["Bright", "Gentle", "Lucky", "Sunny"],
        Rarity::Rare => &["Shimmering", "Whispering", "Dreamy", "Silver"],
        Rarity::Epic => &["Enchanted", "Radiant", "Twilight", "Golden"],
        Rarity::Legendary => &["Celestial", "Eternal", "Mythic", "Starborn"],
    }
}

pub fn rarity_label(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => "Common",
        Rarity::Uncommon => "Uncommon",
        Rarity::Rare => "Rare",
        Rarity::Epic => "Epic",
        Rarity::Legendary => "Legendary",
    }
}

/// Badge colour shown next to the rarity label.
pub fn rarity_badge_color(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => "#9ca3af",
        Rarity::Uncommon => "#22c55e",
        Rarity::Rare => "#3b82f6",
        Rarity::Epic => "#a855f7",
        Rarity::Legendary => "#f59e0b",
    }
}

pub fn type_label(element_type: ElementType) -> &'static str {
    match element_type {
        ElementType::Flower => "Flower",
        ElementType::Tree => "Tree",
        ElementType::Stone => "Stone",
        ElementType::Water => "Water",
        ElementType::Grass => "Grass",
        ElementType::Mushroom => "Mushroom",
        ElementType::Crystal => "Crystal",
        ElementType::Decoration => "Decoration",
        ElementType::RainbowFlower => "Rainbow Flower",
        ElementType::GlowingCrystal => "Glowing Crystal",
        ElementType::MysticMushroom => "Mystic Mushroom",
        ElementType::AuroraTree => "Aurora Tree",
        ElementType::StarlightDecoration => "Starlight Decoration",
    }
}

pub fn element_emoji(element_type: ElementType) -> &'static str {
    match element_type {
        ElementType::Flower => "🌸",
        ElementType::Tree => "🌳",
        ElementType::Stone => "🪨",
        ElementType::Water => "💧",
        ElementType::Grass => "🌿",
        ElementType::Mushroom => "🍄",
        ElementType::Crystal => "💎",
        ElementType::Decoration => "🏮",
        ElementType::RainbowFlower => "🌈",
        ElementType::GlowingCrystal => "✨",
        ElementType::MysticMushroom => "🔮",
        ElementType::AuroraTree => "🌌",
        ElementType::StarlightDecoration => "⭐",
    }
}
