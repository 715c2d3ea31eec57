use crate::shared::*;

type Palette = [&'static str; 4];

/// Base colour candidates for a (type, mood) pair. Premium variants share the
/// palette of their base type.
pub fn base_colors(element_type: ElementType, mood: Mood) -> &'static Palette {
    use ElementType as T;
    use Mood as M;

    match (element_type.base_type(), mood) {
        // ── Flowers ─────────────────────────────────────────────────────
        (T::Flower, M::Joy) => &["#ff8fab", "#ffd166", "#ff6f91", "#ffc6ff"],
        (T::Flower, M::Calm) => &["#bde0fe", "#cdb4db", "#a2d2ff", "#e0c3fc"],
        (T::Flower, M::Stress) => &["#f4a261", "#e9c46a", "#e76f51", "#f6bd60"],
        (T::Flower, M::Sadness) => &["#8ecae6", "#a9a9d9", "#6c8ebf", "#b8c0ff"],
        (T::Flower, M::Anger) => &["#e63946", "#d00000", "#f94144", "#c9184a"],
        (T::Flower, M::Anxiety) => &["#cdb4db", "#ffafcc", "#b8bedd", "#d8bbff"],
        // ── Trees ───────────────────────────────────────────────────────
        (T::Tree, M::Joy) => &["#52b788", "#95d5b2", "#74c69d", "#b7e4c7"],
        (T::Tree, M::Calm) => &["#2d6a4f", "#40916c", "#1b4332", "#52b788"],
        (T::Tree, M::Stress) => &["#606c38", "#7f8c3a", "#8a9a5b", "#556b2f"],
        (T::Tree, M::Sadness) => &["#4a6670", "#5e7d7e", "#3d5a5b", "#6b8f8f"],
        (T::Tree, M::Anger) => &["#6a4c2f", "#8b5e34", "#7f4f24", "#9c6644"],
        (T::Tree, M::Anxiety) => &["#588157", "#3a5a40", "#a3b18a", "#6b9080"],
        // ── Stones ──────────────────────────────────────────────────────
        (T::Stone, M::Joy) => &["#d6ccc2", "#e3d5ca", "#f5ebe0", "#c9ada7"],
        (T::Stone, M::Calm) => &["#adb5bd", "#ced4da", "#98a6b3", "#dee2e6"],
        (T::Stone, M::Stress) => &["#6c757d", "#868e96", "#495057", "#7d8597"],
        (T::Stone, M::Sadness) => &["#5c677d", "#7d8597", "#33415c", "#979dac"],
        (T::Stone, M::Anger) => &["#3d2b2b", "#5a3e36", "#4a3728", "#6f4e37"],
        (T::Stone, M::Anxiety) => &["#8d99ae", "#9a8c98", "#a5a58d", "#b5a8b0"],
        // ── Water ───────────────────────────────────────────────────────
        (T::Water, M::Joy) => &["#4cc9f0", "#72efdd", "#56cfe1", "#80ffdb"],
        (T::Water, M::Calm) => &["#48cae4", "#90e0ef", "#00b4d8", "#ade8f4"],
        (T::Water, M::Stress) => &["#3a86ff", "#4895ef", "#4361ee", "#5e60ce"],
        (T::Water, M::Sadness) => &["#023e8a", "#0077b6", "#03045e", "#0096c7"],
        (T::Water, M::Anger) => &["#1d3557", "#274c77", "#14213d", "#2b4162"],
        (T::Water, M::Anxiety) => &["#6096ba", "#8ecae6", "#5390d9", "#7aa6c2"],
        // ── Grass ───────────────────────────────────────────────────────
        (T::Grass, M::Joy) => &["#80b918", "#aacc00", "#bfd200", "#55a630"],
        (T::Grass, M::Calm) => &["#74c69d", "#95d5b2", "#52b788", "#b7e4c7"],
        (T::Grass, M::Stress) => &["#6a994e", "#a7c957", "#386641", "#8cb369"],
        (T::Grass, M::Sadness) => &["#84a98c", "#52796f", "#6b9080", "#a4c3b2"],
        (T::Grass, M::Anger) => &["#9c6644", "#7f5539", "#b08968", "#a68a64"],
        (T::Grass, M::Anxiety) => &["#b5c99a", "#97a97c", "#cfe1b9", "#87986a"],
        // ── Mushrooms ───────────────────────────────────────────────────
        (T::Mushroom, M::Joy) => &["#ff595e", "#ffca3a", "#ff924c", "#ff7b9c"],
        (T::Mushroom, M::Calm) => &["#ddb892", "#e6ccb2", "#b08968", "#ede0d4"],
        (T::Mushroom, M::Stress) => &["#bc6c25", "#dda15e", "#a0522d", "#cd853f"],
        (T::Mushroom, M::Sadness) => &["#7209b7", "#560bad", "#8e7dbe", "#6a4c93"],
        (T::Mushroom, M::Anger) => &["#9d0208", "#6a040f", "#dc2f02", "#b5179e"],
        (T::Mushroom, M::Anxiety) => &["#b388eb", "#8093f1", "#a06cd5", "#c19ee0"],
        // ── Crystals ────────────────────────────────────────────────────
        (T::Crystal, M::Joy) => &["#f15bb5", "#fee440", "#00bbf9", "#00f5d4"],
        (T::Crystal, M::Calm) => &["#a9def9", "#e4c1f9", "#d0f4de", "#c8b6ff"],
        (T::Crystal, M::Stress) => &["#9b5de5", "#7b2cbf", "#c77dff", "#8338ec"],
        (T::Crystal, M::Sadness) => &["#4361ee", "#3f37c9", "#4895ef", "#3a0ca3"],
        (T::Crystal, M::Anger) => &["#ef233c", "#d90429", "#ff006e", "#ae2012"],
        (T::Crystal, M::Anxiety) => &["#bdb2ff", "#a0c4ff", "#cdb4db", "#9bf6ff"],
        // ── Decorations ─────────────────────────────────────────────────
        (T::Decoration, M::Joy) => &["#ffbe0b", "#fb5607", "#ff006e", "#ffd60a"],
        (T::Decoration, M::Calm) => &["#e9edc9", "#ccd5ae", "#fefae0", "#faedcd"],
        (T::Decoration, M::Stress) => &["#d4a373", "#bc8a5f", "#a98467", "#e6b17e"],
        (T::Decoration, M::Sadness) => &["#8d99ae", "#6d6875", "#b5838d", "#7a7d8c"],
        (T::Decoration, M::Anger) => &["#9a031e", "#5f0f40", "#e36414", "#a4161a"],
        (T::Decoration, M::Anxiety) => &["#c0a9bd", "#94a7ae", "#d3c4be", "#a9a3c3"],
        // base_type() never yields a premium variant
        _ => &["#cccccc", "#bbbbbb", "#dddddd", "#aaaaaa"],
    }
}
