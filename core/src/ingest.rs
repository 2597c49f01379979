// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

use csv::StringRecord;

use crate::config::{InputFile, ScheduleColumns, SubmissionColumns};
use crate::datetime::parse_date;
use crate::error::{Error, Result};
use crate::schedule::{ScheduleEntry, TimeOfDay};
use crate::submission::SubmissionRecord;

/// Reads the instructor submission table.
///
/// Rows with a blank title or the "example" placeholder title are dropped.
pub fn read_submissions(
    input: &InputFile,
    columns: &SubmissionColumns,
) -> Result<Vec<SubmissionRecord>> {
    let mut reader = open_table(input)?;
    let header = headers(&mut reader, input)?;
    let resolve = Resolver::new("submission", &header);
    let id = resolve.column(&columns.id)?;
    let title = resolve.column(&columns.title)?;
    let description = resolve.column(&columns.description)?;
    let outcome = resolve.column(&columns.outcome)?;
    let target = resolve.column(&columns.target)?;
    let prerequisite = resolve.column(&columns.prerequisite)?;
    let material = resolve.column(&columns.material)?;

    let mut submissions = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| Error::Table {
            path: input.file_path.clone(),
            source,
        })?;
        if is_placeholder(field(&record, title)) {
            continue;
        }
        submissions.push(SubmissionRecord {
            id: field(&record, id).to_string(),
            title: field(&record, title).to_string(),
            description: field(&record, description).to_string(),
            learning_outcomes: field(&record, outcome).to_string(),
            target_audience: field(&record, target).to_string(),
            prerequisites: field(&record, prerequisite).to_string(),
            materials: field(&record, material).to_string(),
        });
    }
    Ok(submissions)
}

/// Reads the room/slot schedule table into entries with normalized
/// time-of-day cells and parsed dates.
///
/// Rows with a blank title or the "example" placeholder title are dropped.
/// Malformed date and attendance cells degrade to `None` with a warning;
/// only structural problems become errors.
pub fn read_schedule(
    input: &InputFile,
    columns: &ScheduleColumns,
) -> Result<Vec<ScheduleEntry>> {
    let mut reader = open_table(input)?;
    let header = headers(&mut reader, input)?;
    let resolve = Resolver::new("schedule", &header);
    let id = resolve.column(&columns.id)?;
    let title = resolve.column(&columns.title)?;
    let date = resolve.column(&columns.date)?;
    let time = resolve.column(&columns.time)?;
    let duration = resolve.column(&columns.duration)?;
    let room = resolve.column(&columns.room)?;
    let main_instructor = resolve.column(&columns.main_instructor)?;
    let helper_instructor = resolve.column(&columns.helper_instructor)?;
    let max_attendance = resolve.column(&columns.max_attendance)?;

    let mut schedule = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| Error::Table {
            path: input.file_path.clone(),
            source,
        })?;
        let title_cell = field(&record, title);
        if is_placeholder(title_cell) {
            continue;
        }

        let mut entry = ScheduleEntry::new(field(&record, id), title_cell);
        entry.raw_date = field(&record, date).to_string();
        entry.date = parse_date(&entry.raw_date);
        entry.time_of_day = TimeOfDay::normalize(field(&record, time));
        let duration_cell = field(&record, duration);
        entry.duration = (!duration_cell.is_empty()).then(|| duration_cell.to_string());
        entry.room = field(&record, room).to_string();
        entry.main_instructor = field(&record, main_instructor).to_string();
        entry.helper_instructor = field(&record, helper_instructor).to_string();
        entry.max_attendance = parse_attendance(&entry.id, field(&record, max_attendance));
        schedule.push(entry);
    }
    Ok(schedule)
}

fn open_table(input: &InputFile) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .delimiter(input.delimiter as u8)
        .flexible(true)
        .from_path(&input.file_path)
        .map_err(|source| Error::Table {
            path: input.file_path.clone(),
            source,
        })
}

fn headers(reader: &mut csv::Reader<std::fs::File>, input: &InputFile) -> Result<StringRecord> {
    reader
        .headers()
        .map(|h| h.clone())
        .map_err(|source| Error::Table {
            path: input.file_path.clone(),
            source,
        })
}

/// Resolves configured column names against a header row, once per table.
struct Resolver<'a> {
    table: &'static str,
    header: &'a StringRecord,
}

impl<'a> Resolver<'a> {
    fn new(table: &'static str, header: &'a StringRecord) -> Self {
        Resolver { table, header }
    }

    fn column(&self, name: &str) -> Result<usize> {
        self.header
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| Error::MissingColumn {
                table: self.table,
                column: name.to_string(),
            })
    }
}

fn field<'r>(record: &'r StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("").trim()
}

/// Template rows live in the real tables; they never reach the pipeline.
fn is_placeholder(title: &str) -> bool {
    title.is_empty() || title.eq_ignore_ascii_case("example")
}

fn parse_attendance(id: &str, cell: &str) -> Option<u32> {
    if cell.is_empty() {
        return None;
    }
    match cell.parse::<u32>() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!(id, cell, "unparseable max attendance");
            None
        }
    }
}
