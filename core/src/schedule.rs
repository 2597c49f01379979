// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

mod derive;
mod expand;
mod normalize;
mod span;

pub use derive::derive_start_end;
pub use expand::expand_multi_day;
pub use normalize::TimeOfDay;
pub use span::{EventSpan, aggregate_spans};

use chrono::{NaiveDate, NaiveTime};

/// One (workshop, date, time-of-day) triple as it exists in the room/slot
/// table, enriched in place by the normalization stages.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    /// Stable identifier from the schedule table. Expanded per-day entries
    /// get a "-{k}" suffix so ids stay unique across days.
    pub id: String,

    /// Workshop title; expanded entries carry a " - Day {k}" suffix.
    pub title: String,

    /// The date cell exactly as written in the table.
    pub raw_date: String,

    /// Parsed date; `None` means the row is unschedulable.
    pub date: Option<NaiveDate>,

    /// Normalized time-of-day slot.
    pub time_of_day: TimeOfDay,

    /// Duration phrase, `None` when the cell was blank.
    pub duration: Option<String>,

    /// Room label; may be empty.
    pub room: String,

    pub main_instructor: String,
    pub helper_instructor: String,

    /// Maximum attendance, when the cell held a non-negative integer.
    pub max_attendance: Option<u32>,

    /// Derived start time; `None` until derived, or when the slot is not a
    /// morning/afternoon/all-day block.
    pub start_time: Option<NaiveTime>,

    /// Derived end time, same lifecycle as `start_time`.
    pub end_time: Option<NaiveTime>,

    /// True when the title starts with the reserved networking prefix.
    pub is_networking_event: bool,

    /// True for a single-day entry or the last day of an expansion.
    pub multi_day_final: bool,

    /// Title with any " - Day {k}" suffix stripped; identifies the logical
    /// workshop across expanded days.
    pub base_title: String,

    /// Id without the per-day "-{k}" suffix. Ids that naturally contain
    /// hyphens stay intact; only the expander diverges this from `id`.
    pub base_id: String,
}

impl ScheduleEntry {
    /// A fresh entry as read from the schedule table, before any
    /// normalization stage has run.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let id = id.into();
        let title = title.into();
        ScheduleEntry {
            base_id: id.clone(),
            id,
            base_title: title.clone(),
            title,
            raw_date: String::new(),
            date: None,
            time_of_day: TimeOfDay::Other(String::new()),
            duration: None,
            room: String::new(),
            main_instructor: String::new(),
            helper_instructor: String::new(),
            max_attendance: None,
            start_time: None,
            end_time: None,
            is_networking_event: false,
            multi_day_final: true,
        }
    }

    /// "start-end" display form, e.g. "9:00-12:00", when both times exist.
    pub fn timeslot(&self) -> Option<String> {
        use crate::datetime::format_clock;
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => {
                Some(format!("{}-{}", format_clock(start), format_clock(end)))
            }
            _ => None,
        }
    }
}

/// Flags entries whose title starts with the reserved prefix so they can be
/// excluded from standard per-workshop rendering.
pub fn annotate_networking_events(entries: &mut [ScheduleEntry], prefix: &str) {
    for entry in entries.iter_mut() {
        entry.is_networking_event = entry.title.starts_with(prefix);
    }
}
