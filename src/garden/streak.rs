//! One-per-day eligibility and unlock streaks. All comparisons are by UTC
//! calendar day, never by rolling 24h windows.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::Garden;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakInfo {
    pub current: u32,
    pub longest: u32,
    pub last_unlock: Option<DateTime<Utc>>,
}

/// True when nothing was unlocked yet or `now` falls on a later calendar day
/// than the last unlock.
pub fn can_unlock_todays_element(last_unlock: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match last_unlock {
        None => true,
        Some(last) => now.date_naive() > last.date_naive(),
    }
}

/// [`can_unlock_todays_element`] against the system clock.
pub fn can_unlock_today(last_unlock: Option<DateTime<Utc>>) -> bool {
    can_unlock_todays_element(last_unlock, Utc::now())
}

/// Streaks relative to the system clock.
pub fn calculate_streak(unlock_dates: &[DateTime<Utc>]) -> StreakInfo {
    calculate_streak_at(unlock_dates, Utc::now())
}

/// The current streak only counts when the newest unlock is today or
/// yesterday. Several unlocks on one day count once.
pub fn calculate_streak_at(unlock_dates: &[DateTime<Utc>], now: DateTime<Utc>) -> StreakInfo {
    let last_unlock = unlock_dates.iter().max().copied();

    let mut days: Vec<NaiveDate> = unlock_dates.iter().map(|d| d.date_naive()).collect();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();

    let Some(&newest) = days.first() else {
        return StreakInfo::default();
    };

    let consecutive = |pair: &[NaiveDate]| (pair[0] - pair[1]).num_days() == 1;

    let current = if (now.date_naive() - newest).num_days() <= 1 {
        1 + days.windows(2).take_while(|pair| consecutive(pair)).count() as u32
    } else {
        0
    };

    let mut longest = 1;
    let mut run = 1;
    for pair in days.windows(2) {
        if consecutive(pair) {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 1;
        }
    }

    StreakInfo {
        current,
        longest,
        last_unlock,
    }
}

impl Garden {
    pub fn streak(&self, now: DateTime<Utc>) -> StreakInfo {
        calculate_streak_at(&self.unlock_dates(), now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn one_unlock_per_calendar_day() {
        let d = utc(2024, 5, 5, 10);
        assert!(!can_unlock_todays_element(Some(d), d));
        assert!(!can_unlock_todays_element(Some(utc(2024, 5, 5, 0)), utc(2024, 5, 5, 23)));
        assert!(can_unlock_todays_element(Some(utc(2024, 5, 4, 23)), utc(2024, 5, 5, 0)));
        assert!(can_unlock_todays_element(None, d));
    }

    #[test]
    fn system_clock_wrappers() {
        let now = Utc::now();
        assert!(can_unlock_today(None));
        assert!(!can_unlock_today(Some(now)));
        assert!(can_unlock_today(Some(now - Duration::days(2))));

        assert_eq!(calculate_streak(&[]), StreakInfo::default());
        let streak = calculate_streak(&[now - Duration::days(3), now - Duration::days(4)]);
        assert_eq!((streak.current, streak.longest), (0, 2));
    }

    #[test]
    fn clock_going_backwards_does_not_allow_unlock() {
        assert!(!can_unlock_todays_element(Some(utc(2024, 5, 6, 1)), utc(2024, 5, 5, 12)));
    }

    #[test]
    fn run_of_three_then_gap() {
        let today = utc(2024, 8, 20, 15);
        let dates = [
            today,
            today - Duration::days(1),
            today - Duration::days(2),
            today - Duration::days(5),
        ];
        let streak = calculate_streak_at(&dates, today);
        assert_eq!(streak.current, 3);
        assert_eq!(streak.longest, 3);
        assert_eq!(streak.last_unlock, Some(today));
    }

    #[test]
    fn current_streak_survives_until_end_of_next_day() {
        let today = utc(2024, 8, 20, 23);
        let dates = [today - Duration::days(1), today - Duration::days(2)];
        assert_eq!(calculate_streak_at(&dates, today).current, 2);

        let dates = [today - Duration::days(2), today - Duration::days(3)];
        let streak = calculate_streak_at(&dates, today);
        assert_eq!(streak.current, 0);
        assert_eq!(streak.longest, 2);
    }

    #[test]
    fn longest_streak_in_the_past() {
        let today = utc(2024, 8, 20, 9);
        let mut dates: Vec<_> = (10..15).map(|d| utc(2024, 8, d, 9)).collect();
        dates.push(today);
        let streak = calculate_streak_at(&dates, today);
        assert_eq!(streak.current, 1);
        assert_eq!(streak.longest, 5);
    }

    #[test]
    fn unsorted_and_duplicate_days() {
        let today = utc(2024, 1, 3, 12);
        let dates = [
            utc(2024, 1, 1, 8),
            utc(2024, 1, 3, 8),
            utc(2024, 1, 2, 8),
            utc(2024, 1, 2, 20),
        ];
        let streak = calculate_streak_at(&dates, today);
        assert_eq!(streak.current, 3);
        assert_eq!(streak.longest, 3);
    }

    #[test]
    fn empty_history() {
        assert_eq!(calculate_streak_at(&[], utc(2024, 1, 1, 0)), StreakInfo::default());
    }
}
