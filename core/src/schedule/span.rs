// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime};

use crate::datetime::{afternoon_end, morning_start};
use crate::schedule::ScheduleEntry;

/// The [earliest start, latest end] instant pair covering every day of a
/// logical workshop. One per `base_title`, used for calendar invites so a
/// 3-day workshop gets a single invite instead of three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSpan {
    /// Title with any " - Day {k}" suffix stripped.
    pub base_title: String,

    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Collapses the per-day expansion back into one span per base title.
///
/// Entries without a parseable date cannot be placed on the calendar and are
/// skipped with a warning. Missing derived times fall back to the 9:00/16:00
/// full-day block. A span whose end precedes its start is corrected to a
/// 1-hour minimum.
pub fn aggregate_spans(entries: &[ScheduleEntry]) -> Vec<EventSpan> {
    let mut spans: Vec<EventSpan> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let Some(date) = entry.date else {
            tracing::warn!(id = %entry.id, title = %entry.title, "unschedulable entry, no span");
            continue;
        };
        let start = date.and_time(entry.start_time.unwrap_or(morning_start()));
        let end = date.and_time(entry.end_time.unwrap_or(afternoon_end()));

        match index.get(entry.base_title.as_str()) {
            Some(&i) => {
                let span = &mut spans[i];
                if start < span.start {
                    span.start = start;
                }
                if end > span.end {
                    span.end = end;
                }
            }
            None => {
                index.insert(entry.base_title.as_str(), spans.len());
                spans.push(EventSpan {
                    base_title: entry.base_title.clone(),
                    start,
                    end,
                });
            }
        }
    }

    for span in &mut spans {
        if span.end < span.start {
            // Inverted input times; enforce the 1-hour minimum span.
            tracing::warn!(base_title = %span.base_title, "end before start, correcting");
            span.end = span.start + Duration::hours(1);
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn day_entry(base: &str, k: u32, d: u32, start: (u32, u32), end: (u32, u32)) -> ScheduleEntry {
        let mut e = ScheduleEntry::new(format!("07-{k}"), format!("{base} - Day {k}"));
        e.base_title = base.to_string();
        e.date = NaiveDate::from_ymd_opt(2025, 6, d);
        e.start_time = NaiveTime::from_hms_opt(start.0, start.1, 0);
        e.end_time = NaiveTime::from_hms_opt(end.0, end.1, 0);
        e
    }

    fn dt(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_three_day_group_collapses_to_one_span() {
        let entries = vec![
            day_entry("Genome assembly", 1, 1, (9, 0), (16, 0)),
            day_entry("Genome assembly", 2, 2, (9, 0), (16, 0)),
            day_entry("Genome assembly", 3, 3, (9, 0), (16, 0)),
        ];
        let spans = aggregate_spans(&entries);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].base_title, "Genome assembly");
        assert_eq!(spans[0].start, dt(1, 9));
        assert_eq!(spans[0].end, dt(3, 16));
    }

    #[test]
    fn test_single_day_span() {
        let mut e = ScheduleEntry::new("01", "Intro to X");
        e.date = NaiveDate::from_ymd_opt(2025, 6, 1);
        e.start_time = NaiveTime::from_hms_opt(9, 0, 0);
        e.end_time = NaiveTime::from_hms_opt(12, 0, 0);
        let spans = aggregate_spans(&[e]);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, dt(1, 9));
        assert_eq!(spans[0].end, dt(1, 12));
    }

    #[test]
    fn test_missing_times_fall_back_to_full_day_block() {
        let mut e = ScheduleEntry::new("01", "Intro to X");
        e.date = NaiveDate::from_ymd_opt(2025, 6, 1);
        let spans = aggregate_spans(&[e]);

        assert_eq!(spans[0].start, dt(1, 9));
        assert_eq!(spans[0].end, dt(1, 16));
    }

    #[test]
    fn test_undated_entries_are_skipped() {
        let e = ScheduleEntry::new("01", "Intro to X");
        assert!(aggregate_spans(&[e]).is_empty());
    }

    #[test]
    fn test_inverted_times_get_minimum_span() {
        let e = day_entry("Intro to X", 1, 1, (14, 0), (10, 0));
        let spans = aggregate_spans(&[e]);

        assert_eq!(spans[0].start, dt(1, 14));
        assert_eq!(spans[0].end, dt(1, 15));
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let entries = vec![
            day_entry("B", 1, 2, (9, 0), (16, 0)),
            day_entry("A", 1, 1, (9, 0), (16, 0)),
            day_entry("B", 2, 3, (9, 0), (16, 0)),
        ];
        let spans = aggregate_spans(&entries);
        assert_eq!(spans[0].base_title, "B");
        assert_eq!(spans[1].base_title, "A");
    }
}
