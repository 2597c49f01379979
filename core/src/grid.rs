// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::{BTreeSet, HashMap};

use crate::error::{Error, Result};
use crate::schedule::ScheduleEntry;

/// Room-occupancy table: one row per (day, time) slot, one column per room
/// that is actually used.
///
/// Rows are ordered by date ascending (unparseable dates last), then by the
/// canonical slot order (full day, morning, afternoon, rest), then by the raw
/// time label. Columns are the distinct nonempty room labels, sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomGrid {
    /// Column labels, sorted alphabetically.
    pub rooms: Vec<String>,

    /// Rows in final display order.
    pub rows: Vec<GridRow>,
}

/// One grid row: a (day, time) slot and its per-room occupancy.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    /// The date label exactly as written in the schedule.
    pub day: String,

    /// The normalized time-of-day label.
    pub time: String,

    cells: HashMap<String, String>,
}

impl GridRow {
    /// The cell for a room, empty when the room is free in this slot.
    pub fn cell(&self, room: &str) -> &str {
        self.cells.get(room).map_or("", String::as_str)
    }
}

impl RoomGrid {
    /// Builds the grid from normalized schedule entries.
    ///
    /// Entries with a blank title, the "example" placeholder title or a blank
    /// room do not occupy anything. Two workshops in the same slot and room
    /// are joined with `<br>`, matching how the Markdown is rendered.
    pub fn build(entries: &[ScheduleEntry]) -> RoomGrid {
        let mut rooms: BTreeSet<String> = BTreeSet::new();
        let mut rows: Vec<GridRow> = Vec::new();
        let mut index: HashMap<(String, String), usize> = HashMap::new();
        let mut sort_keys: Vec<(bool, Option<chrono::NaiveDate>, u8, String)> = Vec::new();

        for entry in entries {
            let title = entry.title.trim();
            if title.is_empty() || title.eq_ignore_ascii_case("example") {
                continue;
            }
            let room = entry.room.trim();
            if room.is_empty() {
                continue;
            }
            rooms.insert(room.to_string());

            let day = entry.raw_date.trim().to_string();
            let time = entry.time_of_day.as_str().to_string();
            let i = *index
                .entry((day.clone(), time.clone()))
                .or_insert_with(|| {
                    sort_keys.push((
                        entry.date.is_none(),
                        entry.date,
                        entry.time_of_day.canonical_order(),
                        time.to_lowercase(),
                    ));
                    rows.push(GridRow {
                        day,
                        time,
                        cells: HashMap::new(),
                    });
                    rows.len() - 1
                });

            let cell = rows[i].cells.entry(room.to_string()).or_default();
            if !cell.is_empty() {
                cell.push_str("<br>");
            }
            cell.push_str(title);
        }

        let mut order: Vec<usize> = (0..rows.len()).collect();
        order.sort_by(|&a, &b| sort_keys[a].cmp(&sort_keys[b]));
        let mut sorted = Vec::with_capacity(rows.len());
        let mut rows: Vec<Option<GridRow>> = rows.into_iter().map(Some).collect();
        for i in order {
            if let Some(row) = rows[i].take() {
                sorted.push(row);
            }
        }

        RoomGrid {
            rooms: rooms.into_iter().collect(),
            rows: sorted,
        }
    }

    /// Renders the grid as a Markdown pipe table with a
    /// `Day | Time | <rooms...>` header.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str("| Day | Time |");
        for room in &self.rooms {
            out.push_str(&format!(" {room} |"));
        }
        out.push('\n');
        out.push('|');
        for _ in 0..self.rooms.len() + 2 {
            out.push_str("---|");
        }
        out.push('\n');
        for row in &self.rows {
            out.push_str(&format!("| {} | {} |", row.day, row.time));
            for room in &self.rooms {
                out.push_str(&format!(" {} |", row.cell(room)));
            }
            out.push('\n');
        }
        out
    }

    /// Renders the grid as CSV with the same header and row order as the
    /// Markdown table.
    pub fn to_csv(&self) -> Result<String> {
        let mut buf = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut buf);
            let mut header = vec!["Day".to_string(), "Time".to_string()];
            header.extend(self.rooms.iter().cloned());
            writer
                .write_record(&header)
                .map_err(|source| Error::Csv { what: "room grid", source })?;
            for row in &self.rows {
                let mut record = vec![row.day.clone(), row.time.clone()];
                record.extend(self.rooms.iter().map(|room| row.cell(room).to_string()));
                writer
                    .write_record(&record)
                    .map_err(|source| Error::Csv { what: "room grid", source })?;
            }
            writer
                .flush()
                .map_err(|source| Error::Csv { what: "room grid", source: source.into() })?;
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Parses a grid back from its CSV form. Inverse of [`RoomGrid::to_csv`]
    /// up to empty cells.
    pub fn from_csv(text: &str) -> Result<RoomGrid> {
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let headers = reader
            .headers()
            .map_err(|source| Error::Csv { what: "room grid", source })?
            .clone();
        let rooms: Vec<String> = headers.iter().skip(2).map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| Error::Csv { what: "room grid", source })?;
            let mut cells = HashMap::new();
            for (room, value) in rooms.iter().zip(record.iter().skip(2)) {
                if !value.is_empty() {
                    cells.insert(room.clone(), value.to_string());
                }
            }
            rows.push(GridRow {
                day: record.get(0).unwrap_or("").to_string(),
                time: record.get(1).unwrap_or("").to_string(),
                cells,
            });
        }

        Ok(RoomGrid { rooms, rows })
    }
}
