//! Mood check-ins: at most one unlocked element per calendar day.

use bevy::prelude::*;

use crate::config::GardenConfig;
use crate::shared::*;

use super::generator::ElementGenerator;
use super::streak::can_unlock_todays_element;

/// Validates a check-in against the garden and, if allowed, generates and
/// appends today's element.
pub fn try_check_in(
    garden: &mut Garden,
    config: &GardenConfig,
    premium: PremiumAccess,
    mood: Mood,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<GardenElement, CheckInError> {
    if let Some(reason) = &garden.load_error {
        return Err(CheckInError::Unavailable(reason.clone()));
    }
    let profile = garden.profile.clone().ok_or(CheckInError::NotRegistered)?;

    if let Some(last) = garden.last_unlock() {
        if !can_unlock_todays_element(Some(last), now) {
            return Err(CheckInError::AlreadyUnlockedToday(last.date_naive()));
        }
    }

    let generator = ElementGenerator::new(config.placement_rules());
    let element = generator.generate(
        &profile.user_id,
        profile.registered_at,
        now,
        mood,
        &garden.occupied_positions(),
        premium.0,
    );
    garden.push(element.clone());
    Ok(element)
}

/// Handles every `MoodCheckInEvent` sent this frame.
pub fn handle_mood_check_in(
    mut check_ins: EventReader<MoodCheckInEvent>,
    mut unlocked: EventWriter<ElementUnlockedEvent>,
    mut rejected: EventWriter<CheckInRejectedEvent>,
    mut garden: ResMut<Garden>,
    mut last: ResMut<LastCheckIn>,
    config: Res<GardenConfig>,
    premium: Res<PremiumAccess>,
    clock: Res<GardenClock>,
) {
    for ev in check_ins.read() {
        let now = clock.now();
        match try_check_in(&mut garden, &config, *premium, ev.mood, now) {
            Ok(element) => {
                let streak = garden.streak(now);
                info!(
                    "[Garden] {} unlocked {} {} '{}' at ({}, {}); streak {} (best {})",
                    ev.mood,
                    element.rarity,
                    element.element_type,
                    element.name,
                    element.position.x,
                    element.position.y,
                    streak.current,
                    streak.longest
                );
                last.0 = Some(Ok(element.clone()));
                unlocked.send(ElementUnlockedEvent { element });
            }
            Err(error) => {
                warn!("[Garden] Check-in with mood {} rejected: {}", ev.mood, error);
                last.0 = Some(Err(error.clone()));
                rejected.send(CheckInRejectedEvent {
                    mood: ev.mood,
                    error,
                });
            }
        }
    }
}
