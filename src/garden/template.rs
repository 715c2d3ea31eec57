//! Type + rarity selection.

use bevy::prelude::*;

use crate::data::{mood_config, ElementTemplate, ELEMENT_TEMPLATES};
use crate::shared::*;

use super::rng::SeededRandom;

/// Catalog entries the mood prefers, with premium entries removed unless the
/// user has access. Falls back to the whole access-filtered catalog when the
/// mood filter leaves nothing.
pub fn eligible_templates(mood: Mood, premium_access: bool) -> Vec<ElementTemplate> {
    let preferred = mood_config(mood).preferred_types;
    let accessible = |t: &&ElementTemplate| premium_access || !t.is_premium();

    let filtered: Vec<ElementTemplate> = ELEMENT_TEMPLATES
        .iter()
        .filter(accessible)
        .filter(|t| preferred.contains(&t.element_type))
        .copied()
        .collect();

    if !filtered.is_empty() {
        return filtered;
    }

    warn!(
        "[Garden] No templates for mood {} (premium: {}); using the full catalog",
        mood, premium_access
    );
    ELEMENT_TEMPLATES.iter().filter(accessible).copied().collect()
}

/// Weighted rarity draw. Every tier's weight is scaled by `1 + rarity_bonus`
/// and tiers are walked in [`Rarity::ALL`] order.
pub fn select_rarity(rng: &mut SeededRandom, rarity_bonus: f64) -> Rarity {
    let weights = Rarity::ALL.map(|rarity| rarity.base_weight() * (1.0 + rarity_bonus));
    let total: f64 = weights.iter().sum();

    let mut roll = rng.next() * total;
    for (rarity, weight) in Rarity::ALL.into_iter().zip(weights) {
        roll -= weight;
        if roll <= 0.0 {
            return rarity;
        }
    }
    Rarity::Common
}

/// Picks the template for one day: rarity first, then a uniform pick among
/// eligible templates of that rarity.
pub fn select_template(rng: &mut SeededRandom, mood: Mood, premium_access: bool) -> ElementTemplate {
    let candidates = eligible_templates(mood, premium_access);
    let rarity = select_rarity(rng, mood_config(mood).rarity_bonus);

    let mut pool: Vec<ElementTemplate> = candidates
        .iter()
        .filter(|t| t.rarity == rarity)
        .copied()
        .collect();

    if pool.is_empty() {
        pool = Rarity::ALL
            .into_iter()
            .map(|fallback| {
                candidates
                    .iter()
                    .filter(|t| t.rarity == fallback)
                    .copied()
                    .collect::<Vec<_>>()
            })
            .find(|subset| !subset.is_empty())
            .unwrap_or_else(|| candidates.clone());
        debug!(
            "[Garden] No {} template for {}; fell back to {:?}",
            rarity,
            mood,
            pool.first().map(|t| t.rarity)
        );
    }

    let index = rng.next_int(0, pool.len() as i32 - 1) as usize;
    pool[index]
}
