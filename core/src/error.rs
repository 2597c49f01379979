// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

/// Structural errors that stop a run.
///
/// Malformed dates, clock times and durations are NOT represented here: those
/// are recovered locally with documented fallback values and a logged warning.
/// Everything in this enum means the run cannot produce meaningful output.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be read or written.
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be parsed.
    #[error("invalid configuration file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A column named by the column mapping is absent from the input table.
    #[error("missing column {column:?} in {table} table")]
    MissingColumn { table: &'static str, column: String },

    /// A delimited input table could not be parsed.
    #[error("failed to parse {path}: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Output serialization failed.
    #[error("failed to serialize {what}: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// In-memory CSV rendering or parsing failed.
    #[error("failed to process {what} as CSV: {source}")]
    Csv {
        what: &'static str,
        #[source]
        source: csv::Error,
    },
}

/// Result alias for structural errors.
pub type Result<T> = std::result::Result<T, Error>;
