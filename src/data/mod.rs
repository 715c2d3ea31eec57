//! Data layer. The hard-coded design tables the generator reads.
//!
//! Every table here feeds a deterministic derivation, so entries are only ever
//! appended to: reordering or editing an existing entry changes the elements
//! already persisted for every user.

mod colors;
mod moods;
mod names;
mod templates;

pub use colors::base_colors;
pub use moods::{mood_config, MoodConfig};
pub use names::{base_names, element_emoji, rarity_badge_color, rarity_label, rarity_phrases, type_label};
pub use templates::{ElementTemplate, ELEMENT_TEMPLATES};
