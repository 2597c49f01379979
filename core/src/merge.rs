// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

use crate::schedule::ScheduleEntry;
use crate::submission::SubmissionRecord;

/// Which fields pair a submission with a schedule row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinKey {
    /// Submission title equals the schedule row's base title.
    Title,

    /// Submission id equals the schedule row's reference id.
    #[serde(alias = "submission_id")]
    Id,
}

/// Which side drives the join. Deployments differ, so the direction is an
/// explicit configuration value with no default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinMode {
    /// Only matched pairs survive.
    Inner,

    /// Every submission survives; the schedule side may be absent.
    Left,

    /// Every schedule row survives; the submission side may be absent.
    Right,
}

/// Join configuration, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct MergeOptions {
    pub key: JoinKey,
    pub mode: JoinMode,
}

/// One joined record, the unit rendering consumes. Which side may be absent
/// depends on the join mode.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    pub schedule: Option<ScheduleEntry>,
    pub submission: Option<SubmissionRecord>,
}

impl MergedRecord {
    /// True when the schedule side is flagged as a networking event.
    pub fn is_networking_event(&self) -> bool {
        self.schedule
            .as_ref()
            .is_some_and(|s| s.is_networking_event)
    }
}

/// Joins submissions to schedule rows.
///
/// Duplicate keys on either side fan out into the cross product, standard
/// relational semantics. Unmatched and duplicated keys are reported as
/// warnings, never errors; which rows survive without a partner is decided
/// by the join mode.
pub fn merge(
    submissions: &[SubmissionRecord],
    schedule: &[ScheduleEntry],
    options: &MergeOptions,
) -> Vec<MergedRecord> {
    match options.mode {
        JoinMode::Right | JoinMode::Inner => {
            let mut records = Vec::with_capacity(schedule.len());
            for entry in schedule {
                let matches: Vec<&SubmissionRecord> = submissions
                    .iter()
                    .filter(|s| keys_match(s, entry, options.key))
                    .collect();
                report_fan_out(&entry.base_title, matches.len());

                if matches.is_empty() {
                    if options.mode == JoinMode::Right {
                        tracing::warn!(
                            id = %entry.id,
                            title = %entry.title,
                            "schedule row without a submission"
                        );
                        records.push(MergedRecord {
                            schedule: Some(entry.clone()),
                            submission: None,
                        });
                    }
                    continue;
                }
                for submission in matches {
                    records.push(MergedRecord {
                        schedule: Some(entry.clone()),
                        submission: Some(submission.clone()),
                    });
                }
            }
            records
        }
        JoinMode::Left => {
            let mut records = Vec::with_capacity(submissions.len());
            for submission in submissions {
                let matches: Vec<&ScheduleEntry> = schedule
                    .iter()
                    .filter(|e| keys_match(submission, e, options.key))
                    .collect();
                report_fan_out(&submission.title, matches.len());

                if matches.is_empty() {
                    tracing::warn!(
                        id = %submission.id,
                        title = %submission.title,
                        "submission without a schedule row"
                    );
                    records.push(MergedRecord {
                        schedule: None,
                        submission: Some(submission.clone()),
                    });
                    continue;
                }
                for entry in matches {
                    records.push(MergedRecord {
                        schedule: Some(entry.clone()),
                        submission: Some(submission.clone()),
                    });
                }
            }
            records
        }
    }
}

fn keys_match(submission: &SubmissionRecord, entry: &ScheduleEntry, key: JoinKey) -> bool {
    // The base title and id, so expanded per-day rows still match their
    // submission.
    match key {
        JoinKey::Title => submission.title.trim() == entry.base_title.trim(),
        JoinKey::Id => submission.id.trim() == entry.base_id.trim(),
    }
}

fn report_fan_out(key: &str, matches: usize) {
    if matches > 1 {
        tracing::warn!(key, matches, "duplicate join key, fanning out");
    }
}
