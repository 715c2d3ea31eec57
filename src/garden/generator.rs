//! Daily element generation: seed → template → position → cosmetics.

use bevy::prelude::*;
use chrono::{DateTime, Datelike, Utc};

use crate::shared::*;

use super::cosmetics::derive_cosmetics;
use super::placement::{assign_position, PlacementRules};
use super::rng::SeededRandom;
use super::seed::{characteristics_seed, template_seed};
use super::template::select_template;

/// Pure generator. Holds only placement rules, so one instance can serve any
/// number of users concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementGenerator {
    pub rules: PlacementRules,
}

impl ElementGenerator {
    pub fn new(rules: PlacementRules) -> Self {
        Self { rules }
    }

    /// Builds the element `user_id` unlocks on the calendar day of `now`.
    ///
    /// Identical inputs always produce an identical element. The caller must
    /// check [`can_unlock_todays_element`](super::streak::can_unlock_todays_element)
    /// first and persist the result before the next call.
    pub fn generate(
        &self,
        user_id: &str,
        registered_at: DateTime<Utc>,
        now: DateTime<Utc>,
        mood: Mood,
        existing_positions: &[Position],
        premium_access: bool,
    ) -> GardenElement {
        let mut rng = SeededRandom::new(template_seed(registered_at, now));
        let template = select_template(&mut rng, mood, premium_access);
        let position = assign_position(&mut rng, existing_positions, &self.rules);

        let id = characteristics_seed(user_id, now);
        let cosmetics = derive_cosmetics(&id, template.element_type, template.rarity, mood);

        debug!(
            "[Garden] Generated {} {} '{}' at ({}, {}) for {}",
            template.rarity, template.element_type, cosmetics.name, position.x, position.y, id
        );

        GardenElement {
            id,
            element_type: template.element_type,
            rarity: template.rarity,
            position,
            unlock_date: now.date_naive(),
            mood_influence: mood,
            seasonal_variant: Season::from_month(now.month()),
            name: cosmetics.name,
            description: cosmetics.description,
            emoji: cosmetics.emoji,
            color: cosmetics.color,
            scale: cosmetics.scale,
        }
    }
}

/// [`ElementGenerator::generate`] with the default 4×4 room layout.
pub fn generate_daily_element(
    user_id: &str,
    registered_at: DateTime<Utc>,
    now: DateTime<Utc>,
    mood: Mood,
    existing_positions: &[Position],
    premium_access: bool,
) -> GardenElement {
    ElementGenerator::default().generate(
        user_id,
        registered_at,
        now,
        mood,
        existing_positions,
        premium_access,
    )
}
