//! Seed derivation.
//!
//! Two seeds drive generation. The template seed depends only on the day and
//! picks type, rarity and position. The characteristics seed is the element id
//! and drives every cosmetic attribute through [`string_hash`].

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Calendar days from the registration day to the current day.
pub fn day_offset(registered_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now.date_naive() - registered_at.date_naive()).num_days()
}

/// The day the template seed is built from: registration day plus the offset.
pub fn template_date(registered_at: DateTime<Utc>, now: DateTime<Utc>) -> NaiveDate {
    let offset = day_offset(registered_at, now);
    (registered_at + Duration::days(offset)).date_naive()
}

/// Millisecond timestamp of midnight (UTC) on the template day.
pub fn template_seed(registered_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    template_date(registered_at, now)
        .and_time(NaiveTime::MIN)
        .and_utc()
        .timestamp_millis()
}

/// `"{user_id}-{yyyy-MM-dd}"`. Doubles as the element id.
pub fn characteristics_seed(user_id: &str, now: DateTime<Utc>) -> String {
    format!("{}-{}", user_id, now.date_naive().format("%Y-%m-%d"))
}

/// 32-bit polynomial rolling hash over UTF-16 code units:
/// `hash = hash * 31 + unit`, wrapping as a signed 32-bit integer.
///
/// Versioned by this exact definition. Never swap it for a std hasher; stored
/// ids must render the same name and colour everywhere.
pub fn string_hash(input: &str) -> i32 {
    input
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

/// `|string_hash(input)| mod len`. `len` must be non-zero.
pub fn hash_index(input: &str, len: usize) -> usize {
    let magnitude = (string_hash(input) as i64).unsigned_abs();
    (magnitude % len as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn string_hash_matches_reference_values() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("ab"), 97 * 31 + 98);
        // Java's String.hashCode uses the same recurrence.
        assert_eq!(string_hash("hello"), 99_162_322);
    }

    #[test]
    fn hash_index_handles_negative_and_min_hashes() {
        // Hashes to exactly i32::MIN.
        let extreme = "polygenelubricants";
        assert_eq!(string_hash(extreme), i32::MIN);
        assert_eq!(hash_index(extreme, 5), 2_147_483_648 % 5);
        assert!(hash_index("", 4) == 0);
    }

    #[test]
    fn template_seed_is_midnight_of_current_day() {
        let registered = utc(2024, 1, 1, 20);
        let now = utc(2024, 1, 3, 9);
        assert_eq!(day_offset(registered, now), 2);
        assert_eq!(template_date(registered, now), NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert_eq!(template_seed(registered, now), 1_704_240_000_000);
    }

    #[test]
    fn template_seed_ignores_time_of_day() {
        let registered = utc(2024, 1, 1, 0);
        assert_eq!(
            template_seed(registered, utc(2024, 2, 10, 1)),
            template_seed(registered, utc(2024, 2, 10, 23))
        );
        assert_eq!(template_seed(registered, registered), 1_704_067_200_000);
    }

    #[test]
    fn characteristics_seed_format() {
        assert_eq!(characteristics_seed("user42", utc(2024, 1, 1, 15)), "user42-2024-01-01");
    }
}
