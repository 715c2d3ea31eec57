//! Garden domain: daily element generation and mood check-ins.
//!
//! The generator itself (`generator`, `template`, `placement`, `cosmetics`,
//! `seed`, `rng`) is pure and usable without Bevy. `GardenPlugin` wires it to
//! the app: a `MoodCheckInEvent` unlocks at most one element per calendar day.
//!
//! Communicates with other domains exclusively through crate::shared
//! events/resources.

use bevy::prelude::*;

use crate::shared::*;

pub mod checkin;
pub mod cosmetics;
pub mod generator;
pub mod placement;
pub mod rng;
pub mod seed;
pub mod streak;
pub mod template;

pub use generator::{generate_daily_element, ElementGenerator};
pub use placement::{PlacementRules, DEFAULT_RANDOM_ATTEMPTS, DEFAULT_SCAN_ROOMS};
pub use rng::SeededRandom;
pub use streak::{
    calculate_streak, calculate_streak_at, can_unlock_today, can_unlock_todays_element, StreakInfo,
};

pub struct GardenPlugin;

impl Plugin for GardenPlugin {
    fn build(&self, app: &mut App) {
        app
            // Shared resources
            .init_resource::<Garden>()
            .init_resource::<PremiumAccess>()
            .init_resource::<GardenClock>()
            .init_resource::<LastCheckIn>()
            // Shared events
            .add_event::<MoodCheckInEvent>()
            .add_event::<ElementUnlockedEvent>()
            .add_event::<CheckInRejectedEvent>()
            // ------------------------------------------------------------------
            // Check-ins are only accepted once the garden has been loaded
            // ------------------------------------------------------------------
            .add_systems(
                Update,
                checkin::handle_mood_check_in.run_if(in_state(AppState::Ready)),
            );
    }
}
