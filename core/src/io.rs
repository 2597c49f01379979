// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

//! File output. Everything here takes already-rendered content; the
//! transformation stages stay free of I/O.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::grid::RoomGrid;
use crate::ics::Invite;
use crate::schedule::ScheduleEntry;

/// Writes the rendered HTML page, creating parent directories as needed.
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    write_text(path, html)
}

/// Writes one `{id}.ics` file per invite.
///
/// The directory is created when missing and any `.ics` file from a previous
/// run is removed first, so renamed or unscheduled workshops do not leave
/// stale invites behind.
pub fn write_ics_files(dir: &Path, invites: &[Invite]) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| Error::Io {
        path: dir.to_owned(),
        source,
    })?;

    let entries = fs::read_dir(dir).map_err(|source| Error::Io {
        path: dir.to_owned(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| Error::Io {
            path: dir.to_owned(),
            source,
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "ics") && path.is_file() {
            fs::remove_file(&path).map_err(|source| Error::Io { path, source })?;
        }
    }

    for invite in invites {
        let path = dir.join(format!("{}.ics", invite.id));
        write_text(&path, &invite.calendar.to_string())?;
    }
    Ok(())
}

/// Writes the room grid in both output forms.
pub fn write_grid(markdown_path: &Path, csv_path: &Path, grid: &RoomGrid) -> Result<()> {
    write_text(markdown_path, &grid.to_markdown())?;
    write_text(csv_path, &grid.to_csv()?)
}

/// Machine-readable export of one schedule row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleExport {
    /// Date formatted `%d.%m.%y`; `None` when the row has no parseable date.
    pub date: Option<String>,

    /// `HH:MM-HH:MM` with zero-padded hours; `None` without derived times.
    pub timeslot: Option<String>,

    pub room: String,
    pub main_instructor: String,
    pub helper: String,
    pub title: String,
    pub max_attendance: Option<u32>,
}

impl From<&ScheduleEntry> for ScheduleExport {
    fn from(entry: &ScheduleEntry) -> Self {
        let timeslot = match (entry.start_time, entry.end_time) {
            (Some(start), Some(end)) => Some(format!(
                "{}-{}",
                start.format("%H:%M"),
                end.format("%H:%M")
            )),
            _ => None,
        };
        ScheduleExport {
            date: entry.date.map(|d| d.format("%d.%m.%y").to_string()),
            timeslot,
            room: entry.room.clone(),
            main_instructor: entry.main_instructor.clone(),
            helper: entry.helper_instructor.clone(),
            title: entry.title.clone(),
            max_attendance: entry.max_attendance,
        }
    }
}

/// Writes `schedule.json`: an object keyed by entry id.
pub fn write_schedule_json(path: &Path, entries: &[ScheduleEntry]) -> Result<()> {
    let export: BTreeMap<&str, ScheduleExport> = entries
        .iter()
        .map(|e| (e.id.as_str(), ScheduleExport::from(e)))
        .collect();
    let json = serde_json::to_string_pretty(&export).map_err(|source| Error::Json {
        what: "schedule export",
        source,
    })?;
    write_text(path, &json)
}

fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_owned(),
                source,
            })?;
        }
    }
    fs::write(path, content).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    use crate::config::Yearly;
    use crate::ics::build_invites;
    use crate::schedule::TimeOfDay;

    fn yearly() -> Yearly {
        Yearly {
            event_name: "Workshop Week 2026".to_string(),
            timezone: "Europe/Oslo".to_string(),
            registration_open: false,
            pre_register_link: String::new(),
            post_register_link: String::new(),
            ics_folder: String::new(),
            networking_event_url: String::new(),
            networking_prefix: "Networking event".to_string(),
        }
    }

    fn entry() -> ScheduleEntry {
        let mut e = ScheduleEntry::new("01", "Intro to X");
        e.date = NaiveDate::from_ymd_opt(2026, 6, 1);
        e.time_of_day = TimeOfDay::Morning;
        e.start_time = NaiveTime::from_hms_opt(9, 0, 0);
        e.end_time = NaiveTime::from_hms_opt(11, 0, 0);
        e.room = "R1".to_string();
        e.main_instructor = "Ada".to_string();
        e.helper_instructor = "Ben".to_string();
        e.max_attendance = Some(30);
        e
    }

    #[test]
    fn test_schedule_json_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.json");
        write_schedule_json(&path, &[entry()]).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["01"]["date"], "01.06.26");
        assert_eq!(json["01"]["timeslot"], "09:00-11:00");
        assert_eq!(json["01"]["room"], "R1");
        assert_eq!(json["01"]["main_instructor"], "Ada");
        assert_eq!(json["01"]["helper"], "Ben");
        assert_eq!(json["01"]["title"], "Intro to X");
        assert_eq!(json["01"]["max_attendance"], 30);
    }

    #[test]
    fn test_schedule_json_round_trip() {
        let export = ScheduleExport::from(&entry());
        let json = serde_json::to_string(&export).unwrap();
        let back: ScheduleExport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, export);
    }

    #[test]
    fn test_write_ics_files_clears_stale_invites() {
        let dir = tempfile::tempdir().unwrap();
        let ics_dir = dir.path().join("ical");
        fs::create_dir_all(&ics_dir).unwrap();
        fs::write(ics_dir.join("stale.ics"), "BEGIN:VCALENDAR").unwrap();
        fs::write(ics_dir.join("notes.txt"), "keep me").unwrap();

        let invites = build_invites(&[entry()], &BTreeMap::new(), &yearly());
        write_ics_files(&ics_dir, &invites).unwrap();

        assert!(!ics_dir.join("stale.ics").exists());
        assert!(ics_dir.join("notes.txt").exists());
        assert!(ics_dir.join("01.ics").exists());
    }

    #[test]
    fn test_write_page_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("site.html");
        write_page(&path, "<html></html>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_write_grid_produces_both_forms() {
        let dir = tempfile::tempdir().unwrap();
        let grid = RoomGrid::build(&[entry()]);
        let md = dir.path().join("grid.md");
        let csv = dir.path().join("grid.csv");
        write_grid(&md, &csv, &grid).unwrap();

        let markdown = fs::read_to_string(&md).unwrap();
        assert!(markdown.starts_with("| Day | Time |"));
        let recovered = RoomGrid::from_csv(&fs::read_to_string(&csv).unwrap()).unwrap();
        assert_eq!(recovered, grid);
    }
}
