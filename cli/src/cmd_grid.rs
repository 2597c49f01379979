// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use obiwow_core::{Config, RoomGrid, expand_multi_day, ingest, io};

/// Builds the room-occupancy grid and writes it as Markdown and CSV.
#[derive(Debug, Default, Clone, Copy)]
pub struct CmdGrid;

impl CmdGrid {
    pub const NAME: &str = "grid";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Generate the room schedule as Markdown and CSV")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdGrid
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!("reading schedule table...");
        let schedule =
            ingest::read_schedule(&config.paths.schedule, &config.schedule_columns)?;
        let schedule = expand_multi_day(schedule);

        let grid = RoomGrid::build(&schedule);
        io::write_grid(
            &config.paths.output.grid_markdown,
            &config.paths.output.grid_csv,
            &grid,
        )?;

        println!(
            "Wrote table to {}",
            config.paths.output.grid_markdown.display()
        );
        println!("Wrote CSV to {}", config.paths.output.grid_csv.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_grid() {
        let cmd = Command::new("test").subcommand(CmdGrid::command());
        let matches = cmd.try_get_matches_from(["test", "grid"]).unwrap();
        let _ = CmdGrid::from(matches.subcommand_matches("grid").unwrap());
    }

    #[test]
    fn test_run_writes_grid_files() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path();
        fs::write(
            base.join("schedule.tsv"),
            "Number\tWorkshop name\tDate\tTime\tDuration\tRoom\tInstructor 1\tInstructor 2\tMax attendance\n\
             01\tIntro to X\t01.06.26\tmorning\t\tR1\tAda\t\t30\n",
        )
        .unwrap();
        fs::write(base.join("survey.tsv"), "ID\tTitle\n").unwrap();
        let yaml = format!(
            r#"
paths:
  survey_results: {{ file_path: {base}/survey.tsv }}
  schedule: {{ file_path: {base}/schedule.tsv }}
  output:
    html: {base}/out/site.html
    ics_dir: {base}/out/ical
    grid_markdown: {base}/out/grid.md
    grid_csv: {base}/out/grid.csv
    schedule_json: {base}/out/schedule.json
yearly:
  event_name: Workshop Week 2026
submission_columns:
  id: ID
  title: Title
  description: Description
  outcome: Outcomes
  target: Target
  prerequisite: Prerequisites
  material: Equipment
schedule_columns:
  id: Number
  title: Workshop name
  date: Date
  time: Time
  duration: Duration
  room: Room
  main_instructor: Instructor 1
  helper_instructor: Instructor 2
  max_attendance: Max attendance
merge:
  key: title
  mode: right
"#,
            base = base.display()
        );
        fs::write(base.join("config.yaml"), yaml).unwrap();
        let config = Config::load(&base.join("config.yaml")).unwrap();

        CmdGrid.run(&config).unwrap();

        let markdown = fs::read_to_string(base.join("out/grid.md")).unwrap();
        assert!(markdown.contains("| 01.06.26 | morning | Intro to X |"));
        assert!(base.join("out/grid.csv").exists());
    }
}
