// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::LazyLock;

use chrono::{Duration, NaiveTime};
use regex::Regex;

use crate::datetime::{afternoon_end, afternoon_start, morning_end, morning_start};

/// Matches a human-entered duration such as "2 hours", "2hours" or "30 min".
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s*(min|hours?)").expect("duration pattern must compile")
});

/// Computes the end time for a workshop from its start time and a
/// human-entered duration phrase.
///
/// On a malformed duration the end time falls back to the canonical half-day
/// blocks: 12:00 when the start is 9:00, 16:00 when the start is 13:00, and
/// the start itself otherwise. Existing schedules rely on this exact
/// asymmetric fallback, so it must not change. A warning is logged; the
/// caller never sees an error.
pub fn end_time(start: NaiveTime, duration_text: &str) -> NaiveTime {
    let duration_text = duration_text.trim();
    match parse_duration(duration_text) {
        Some(duration) => start + duration,
        None => {
            tracing::warn!(duration_text, "invalid duration format");
            if start == morning_start() {
                morning_end()
            } else if start == afternoon_start() {
                afternoon_end()
            } else {
                start
            }
        }
    }
}

/// `None` for anything the pattern rejects, and for values too large to
/// represent; both take the fallback path.
fn parse_duration(text: &str) -> Option<Duration> {
    let captures = DURATION_RE.captures(text)?;
    let value: i64 = captures[1].parse().ok()?;
    if captures[2].starts_with("hour") {
        Duration::try_hours(value)
    } else {
        Duration::try_minutes(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_add_hours() {
        assert_eq!(end_time(clock(10, 0), "2 hours"), clock(12, 0));
        assert_eq!(end_time(clock(9, 0), "3 hours"), clock(12, 0));
        assert_eq!(end_time(clock(9, 0), "1 hour"), clock(10, 0));
    }

    #[test]
    fn test_add_minutes() {
        assert_eq!(end_time(clock(10, 0), "30 min"), clock(10, 30));
        assert_eq!(end_time(clock(13, 0), "90min"), clock(14, 30));
    }

    #[test]
    fn test_invalid_duration_from_morning_start() {
        assert_eq!(end_time(clock(9, 0), "asdf"), clock(12, 0));
        assert_eq!(end_time(clock(9, 0), ""), clock(12, 0));
    }

    #[test]
    fn test_invalid_duration_from_afternoon_start() {
        assert_eq!(end_time(clock(13, 0), "invalid format"), clock(16, 0));
    }

    #[test]
    fn test_invalid_duration_from_other_start() {
        // Any other start passes through unchanged.
        assert_eq!(end_time(clock(10, 0), "invalid format"), clock(10, 0));
    }

    #[test]
    fn test_oversized_duration_falls_back() {
        // Digits that pass the pattern but overflow the duration type take
        // the same fallback as a malformed phrase.
        assert_eq!(end_time(clock(9, 0), "99999999999999 hours"), clock(12, 0));
        assert_eq!(end_time(clock(13, 0), "99999999999999999999 min"), clock(16, 0));
        assert_eq!(end_time(clock(10, 0), "99999999999999 hours"), clock(10, 0));
    }

    #[test]
    fn test_leading_whitespace_tolerated() {
        assert_eq!(end_time(clock(9, 0), "  2 hours "), clock(11, 0));
    }
}
