// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Core pipeline for the OBiWoW workshop-week site generator: table
//! ingestion, schedule normalization, submission merging, and the HTML /
//! calendar / JSON / room-grid sinks.

pub mod config;
pub mod datetime;
mod error;
pub mod grid;
pub mod html;
pub mod ics;
pub mod ingest;
pub mod io;
pub mod merge;
pub mod schedule;
pub mod submission;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::grid::RoomGrid;
pub use crate::ics::{Invite, build_invites};
pub use crate::merge::{JoinKey, JoinMode, MergeOptions, MergedRecord, merge};
pub use crate::schedule::{
    EventSpan, ScheduleEntry, TimeOfDay, aggregate_spans, annotate_networking_events,
    derive_start_end, expand_multi_day,
};
pub use crate::submission::SubmissionRecord;
