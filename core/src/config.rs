// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::merge::MergeOptions;

/// The name of the OBiWoW application.
pub const APP_NAME: &str = "obiwow";

/// Configuration for a generation run, loaded once at startup and passed by
/// reference into the core functions.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Input and output file locations.
    pub paths: Paths,

    /// Settings that change from one event year to the next.
    pub yearly: Yearly,

    /// Column-name mapping for the submission (survey) table.
    pub submission_columns: SubmissionColumns,

    /// Column-name mapping for the room/slot schedule table.
    pub schedule_columns: ScheduleColumns,

    /// How submissions are joined to schedule rows. Both the key and the
    /// direction must be spelled out; there is no silent default.
    pub merge: MergeOptions,

    /// Room directory: schedule room label to display name and map URL.
    #[serde(default)]
    pub rooms: BTreeMap<String, Room>,
}

impl Config {
    /// Load and parse a YAML configuration file.
    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_owned(),
            source,
        })
    }
}

/// Input and output file locations.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Paths {
    /// The instructor submission (survey) table.
    pub survey_results: InputFile,

    /// The room/slot schedule table.
    pub schedule: InputFile,

    /// Where generated files go.
    pub output: OutputPaths,
}

/// One delimited input table.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct InputFile {
    pub file_path: PathBuf,

    /// Field delimiter, a single ASCII character. Defaults to tab.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_delimiter() -> char {
    '\t'
}

/// Output file locations.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct OutputPaths {
    /// The generated HTML page.
    pub html: PathBuf,

    /// Directory for per-workshop calendar invites.
    pub ics_dir: PathBuf,

    /// Room-occupancy grid as Markdown.
    pub grid_markdown: PathBuf,

    /// Room-occupancy grid as CSV.
    pub grid_csv: PathBuf,

    /// Machine-readable schedule export.
    pub schedule_json: PathBuf,
}

/// Settings that change from one event year to the next.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Yearly {
    /// Display name of the event, also used in invite summaries.
    pub event_name: String,

    /// IANA timezone identifier for calendar invites.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Whether registration links are rendered.
    #[serde(default)]
    pub registration_open: bool,

    /// Registration link prefix; the workshop title is appended.
    #[serde(default)]
    pub pre_register_link: String,

    /// Registration link suffix.
    #[serde(default)]
    pub post_register_link: String,

    /// Public URL prefix where the generated `.ics` files are hosted.
    #[serde(default)]
    pub ics_folder: String,

    /// Link target for the networking-event row in the schedule table.
    #[serde(default)]
    pub networking_event_url: String,

    /// Schedule titles starting with this prefix are treated as networking
    /// events and excluded from per-workshop rendering.
    #[serde(default = "default_networking_prefix")]
    pub networking_prefix: String,
}

fn default_timezone() -> String {
    "Europe/Oslo".to_string()
}

fn default_networking_prefix() -> String {
    "Networking event".to_string()
}

/// A room with a human-readable name and a map URL.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Room {
    pub name: String,

    #[serde(default)]
    pub url: Option<String>,
}

/// Column-name mapping for the submission table.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SubmissionColumns {
    pub id: String,
    pub title: String,
    pub description: String,
    pub outcome: String,
    pub target: String,
    pub prerequisite: String,
    pub material: String,
}

/// Column-name mapping for the schedule table.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ScheduleColumns {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub room: String,
    pub main_instructor: String,
    pub helper_instructor: String,
    pub max_attendance: String,
}
