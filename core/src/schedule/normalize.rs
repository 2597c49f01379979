// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Coarse slot classification for a schedule row.
///
/// The schedule table is maintained in two languages, so the raw cell is
/// mapped through a closed synonym table onto four canonical tokens.
/// Unrecognized input passes through as [`TimeOfDay::Other`]: callers treat
/// it as opaque and derive no times for it beyond the fixed fallback rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeOfDay {
    /// The 9:00-12:00 block.
    Morning,

    /// The 13:00-16:00 block.
    Afternoon,

    /// A full 9:00-16:00 day.
    AllDay,

    /// Half a day with the block decided by the time column.
    HalfDay,

    /// Anything the synonym table does not know, kept verbatim.
    Other(String),
}

/// Synonym table, exact match. Matching is case-sensitive on purpose: the
/// table is closed and anything else must survive untouched.
const SYNONYMS: &[(&str, TimeOfDay)] = &[
    ("morning", TimeOfDay::Morning),
    ("morgen", TimeOfDay::Morning),
    ("formiddag", TimeOfDay::Morning),
    ("afternoon", TimeOfDay::Afternoon),
    ("ettermiddag", TimeOfDay::Afternoon),
    ("all day", TimeOfDay::AllDay),
    ("whole day", TimeOfDay::AllDay),
    ("full day", TimeOfDay::AllDay),
    ("hel dag", TimeOfDay::AllDay),
    ("half a day", TimeOfDay::HalfDay),
    ("halv dag", TimeOfDay::HalfDay),
];

impl TimeOfDay {
    /// Maps a raw time-of-day cell onto the canonical tokens. Idempotent:
    /// canonical display strings map to themselves.
    pub fn normalize(raw: &str) -> TimeOfDay {
        for (synonym, canonical) in SYNONYMS {
            if raw == *synonym {
                return canonical.clone();
            }
        }
        TimeOfDay::Other(raw.to_string())
    }

    /// Canonical display string; `Other` yields its original text.
    pub fn as_str(&self) -> &str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::AllDay => "all day",
            TimeOfDay::HalfDay => "half a day",
            TimeOfDay::Other(raw) => raw,
        }
    }

    /// Fixed ordering for grid rows: full day, morning, afternoon, rest.
    pub fn canonical_order(&self) -> u8 {
        match self {
            TimeOfDay::AllDay => 0,
            TimeOfDay::Morning => 1,
            TimeOfDay::Afternoon => 2,
            _ => 3,
        }
    }

    /// True when the cell was blank.
    pub fn is_blank(&self) -> bool {
        matches!(self, TimeOfDay::Other(raw) if raw.trim().is_empty())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
