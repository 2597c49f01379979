// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

mod duration;
mod parse;

pub use duration::end_time;
pub use parse::{parse_clock_time, parse_date};

use chrono::NaiveTime;

/// 9:00, the start of the morning block.
pub const fn morning_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).expect("09:00:00 must exist in NaiveTime")
}

/// 12:00, the end of the morning block.
pub const fn morning_end() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).expect("12:00:00 must exist in NaiveTime")
}

/// 13:00, the start of the afternoon block.
pub const fn afternoon_start() -> NaiveTime {
    NaiveTime::from_hms_opt(13, 0, 0).expect("13:00:00 must exist in NaiveTime")
}

/// 16:00, the end of the afternoon block.
pub const fn afternoon_end() -> NaiveTime {
    NaiveTime::from_hms_opt(16, 0, 0).expect("16:00:00 must exist in NaiveTime")
}

/// Formats a clock time without a leading zero on the hour, the way slot
/// times are written throughout the schedule ("9:00", "13:00").
pub fn format_clock(t: NaiveTime) -> String {
    use chrono::Timelike;
    format!("{}:{:02}", t.hour(), t.minute())
}
