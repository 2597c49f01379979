// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveTime};

/// Date formats tried in order before the permissive day-first fallback.
const DATE_FORMATS: &[&str] = &[
    "%d.%m.%y", // 01.06.25
    "%d.%m.%Y", // 01.06.2025
    "%d/%m/%y", // 1/6/25
    "%d/%m/%Y", // 1/6/2025
    "%m/%d/%Y", // 6/1/2025 (only reached when day-first failed)
    "%Y-%m-%d", // 2025-06-01
];

/// Parses a free-text date as written in the schedule table.
///
/// Accepts `.`, `/`, `-` and en/em dashes as separators and the literal
/// phrase " to " as a range delimiter; only the start of a range is used.
/// Returns `None` (with a logged warning) when nothing matches; a bad date
/// never fails the run.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    // "02.06.2025 to 04.06.2025" dates the row by its first day.
    let first = match trimmed.split_once(" to ") {
        Some((start, _)) => start.trim(),
        None => trimmed,
    };
    let normalized: String = first
        .chars()
        .map(|c| if c == '\u{2013}' || c == '\u{2014}' { '-' } else { c })
        .collect();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&normalized, format) {
            return Some(date);
        }
    }

    if let Some(date) = parse_date_day_first(&normalized) {
        return Some(date);
    }

    tracing::warn!(text, "unparseable date");
    None
}

/// Permissive day-first parse: split on any of `./-`, expect day month year.
fn parse_date_day_first(text: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = text
        .split(['.', '/', '-'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 {
        return None;
    }

    let day: u32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let year: i32 = parts[2].parse().ok()?;
    let year = if year < 100 { year + 2000 } else { year };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses a clock time such as "9:00", "09.30" or the start of "9:00-12:00".
///
/// A missing leading digit is tolerated, `.` works as the separator, and a
/// range keeps only its start. Returns `None` with a logged warning on
/// failure.
pub fn parse_clock_time(text: &str) -> Option<NaiveTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized: String = trimmed
        .chars()
        .map(|c| if c == '\u{2013}' || c == '\u{2014}' { '-' } else { c })
        .collect();
    let start = normalized.split('-').next().unwrap_or(&normalized).trim();

    let time = parse_hour_minute(start);
    if time.is_none() {
        tracing::warn!(text, "unparseable clock time");
    }
    time
}

fn parse_hour_minute(text: &str) -> Option<NaiveTime> {
    let (h, m) = text.split_once([':', '.'])?;
    let hour: u32 = h.trim().parse().ok()?;
    let minute: u32 = m.trim().parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}
