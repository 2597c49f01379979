// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use obiwow_core::Config;
use obiwow_core::config::APP_NAME;

use crate::cmd_generate::CmdGenerate;
use crate::cmd_grid::CmdGrid;

/// Run the OBiWoW command-line interface.
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = Cli::parse().and_then(|cli| cli.run());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: PathBuf,

    /// The command to execute
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug)]
pub enum Commands {
    Generate(CmdGenerate),
    Grid(CmdGrid),
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Generate the workshop-week website, calendar invites and room schedule")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .default_value("config.yaml")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdGenerate::command())
            .subcommand(CmdGrid::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let matches = Self::command().get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        let config = matches
            .get_one::<PathBuf>("config")
            .cloned()
            .unwrap_or_else(|| PathBuf::from("config.yaml"));

        let command = match matches.subcommand() {
            Some((CmdGenerate::NAME, matches)) => Commands::Generate(CmdGenerate::from(matches)),
            Some((CmdGrid::NAME, matches)) => Commands::Grid(CmdGrid::from(matches)),
            _ => return Err("unknown command".into()),
        };

        Ok(Cli { config, command })
    }

    /// Load the configuration and run the selected command.
    pub fn run(&self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(config = %self.config.display(), "loading configuration");
        let config = Config::load(&self.config)?;
        match &self.command {
            Commands::Generate(cmd) => cmd.run(&config),
            Commands::Grid(cmd) => cmd.run(&config),
        }
    }
}
