// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveTime;

use crate::datetime::{afternoon_end, afternoon_start, end_time, morning_end, morning_start};
use crate::schedule::{ScheduleEntry, TimeOfDay};

/// Populates `start_time`/`end_time` on every entry from its normalized
/// time-of-day and duration.
///
/// Idempotent: re-deriving with unchanged raw inputs overwrites the fields
/// with the same values.
pub fn derive_start_end(entries: &mut [ScheduleEntry]) {
    for entry in entries.iter_mut() {
        let (start, end) = derive_times(entry);
        entry.start_time = start;
        entry.end_time = end;
    }
}

/// Start/end times for a single entry.
///
/// - duration "all day" wins regardless of the time column: 9:00-16:00.
/// - morning: missing or "half a day" duration gives 9:00-12:00, anything
///   else resolves against a 9:00 start.
/// - afternoon: missing or "half a day" gives 13:00-16:00, anything else
///   resolves against a 13:00 start.
/// - any other time-of-day has no derivable times. That is a legitimate
///   terminal state, not an error.
fn derive_times(entry: &ScheduleEntry) -> (Option<NaiveTime>, Option<NaiveTime>) {
    let duration = entry.duration.as_deref().map(str::trim);

    if duration == Some("all day") {
        return (Some(morning_start()), Some(afternoon_end()));
    }

    match entry.time_of_day {
        TimeOfDay::Morning => match duration {
            None | Some("") | Some("half a day") => (Some(morning_start()), Some(morning_end())),
            Some(d) => (Some(morning_start()), Some(end_time(morning_start(), d))),
        },
        TimeOfDay::Afternoon => match duration {
            None | Some("") | Some("half a day") => {
                (Some(afternoon_start()), Some(afternoon_end()))
            }
            Some(d) => (Some(afternoon_start()), Some(end_time(afternoon_start(), d))),
        },
        _ => (None, None),
    }
}
