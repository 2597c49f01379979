// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::Days;

use crate::schedule::{ScheduleEntry, TimeOfDay};

/// Duration literals that trigger expansion into per-day entries.
const MULTI_DAY_LITERALS: &[(&str, u64)] =
    &[("2 days", 2), ("3 days", 3), ("4 days", 4), ("5 days", 5)];

/// Expands multi-day rows into one entry per day.
///
/// A row whose duration literal is exactly "2 days".."5 days" becomes N
/// entries on consecutive calendar dates, titled "{title} - Day {k}" and with
/// ids suffixed "-{k}" to stay unique. `base_title` and `base_id` keep the
/// original title and id, and `multi_day_final` is true only on the last
/// day. Per-day time-of-day
/// and duration default to a full day whenever the inherited value is blank
/// or still the multi-day literal.
///
/// Rows that do not match a multi-day literal pass through unchanged with
/// `multi_day_final = true`. A multi-day row without a parseable date cannot
/// be expanded; it is logged and kept as a single entry.
pub fn expand_multi_day(entries: Vec<ScheduleEntry>) -> Vec<ScheduleEntry> {
    let mut expanded = Vec::with_capacity(entries.len());
    for entry in entries {
        match multi_day_count(entry.duration.as_deref()) {
            Some(days) => expand_entry(entry, days, &mut expanded),
            None => {
                let mut entry = entry;
                entry.multi_day_final = true;
                expanded.push(entry);
            }
        }
    }
    expanded
}

fn multi_day_count(duration: Option<&str>) -> Option<u64> {
    let duration = duration?.trim();
    MULTI_DAY_LITERALS
        .iter()
        .find(|(literal, _)| *literal == duration)
        .map(|(_, days)| *days)
}

fn expand_entry(entry: ScheduleEntry, days: u64, out: &mut Vec<ScheduleEntry>) {
    let Some(first_date) = entry.date else {
        tracing::warn!(
            id = %entry.id,
            title = %entry.title,
            raw_date = %entry.raw_date,
            "multi-day row without a parseable date, keeping as single entry"
        );
        let mut entry = entry;
        entry.multi_day_final = true;
        out.push(entry);
        return;
    };

    let multi_day_literal = entry.duration.clone();
    for k in 1..=days {
        // Calendar-correct increments, month and year boundaries included.
        let Some(date) = first_date.checked_add_days(Days::new(k - 1)) else {
            tracing::warn!(id = %entry.id, day = k, "date arithmetic overflow, stopping expansion");
            break;
        };

        let mut day = entry.clone();
        day.id = format!("{}-{}", entry.id, k);
        day.base_id = entry.id.clone();
        day.title = format!("{} - Day {}", entry.title, k);
        day.base_title = entry.title.clone();
        day.date = Some(date);
        day.raw_date = date.format("%d.%m.%y").to_string();
        day.multi_day_final = k == days;

        // A per-day cell that is blank or still the multi-day literal means
        // the room is occupied for the whole day.
        if day.time_of_day.is_blank() {
            day.time_of_day = TimeOfDay::AllDay;
        }
        if day.duration.as_deref().map(str::trim) == multi_day_literal.as_deref().map(str::trim)
            || day.duration.as_deref().is_none_or(|d| d.trim().is_empty())
        {
            day.duration = Some("all day".to_string());
        }

        out.push(day);
    }
}
