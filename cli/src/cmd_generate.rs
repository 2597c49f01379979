// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use obiwow_core::{
    Config, annotate_networking_events, build_invites, derive_start_end, expand_multi_day, html,
    ingest, io, merge,
};

/// The full pipeline: website, calendar invites and the schedule export.
#[derive(Debug, Default, Clone, Copy)]
pub struct CmdGenerate;

impl CmdGenerate {
    pub const NAME: &str = "generate";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate the website, calendar invites and schedule JSON")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdGenerate
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!("reading input tables...");
        let submissions =
            ingest::read_submissions(&config.paths.survey_results, &config.submission_columns)?;
        let mut schedule =
            ingest::read_schedule(&config.paths.schedule, &config.schedule_columns)?;

        tracing::debug!(
            submissions = submissions.len(),
            schedule_rows = schedule.len(),
            "normalizing schedule..."
        );
        schedule = expand_multi_day(schedule);
        derive_start_end(&mut schedule);
        annotate_networking_events(&mut schedule, &config.yearly.networking_prefix);

        let records = merge(&submissions, &schedule, &config.merge);

        tracing::debug!(records = records.len(), "writing output files...");
        let page = html::render_page(&records, config);
        io::write_page(&config.paths.output.html, &page)?;

        let invites = build_invites(&schedule, &config.rooms, &config.yearly);
        io::write_ics_files(&config.paths.output.ics_dir, &invites)?;

        io::write_schedule_json(&config.paths.output.schedule_json, &schedule)?;

        println!("Success! Output files written to disk.");
        println!(
            "Use '{}' as raw html for the workshop website.",
            config.paths.output.html.display()
        );
        println!(
            "Upload the '*.ics' files from '{}' next to the website.",
            config.paths.output.ics_dir.display()
        );
        Ok(())
    }
}
