// SPDX-FileCopyrightText: 2025-2026 OBiWoW contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for the OBiWoW site generator.

mod cli;
mod cmd_generate;
mod cmd_grid;

pub use crate::cli::{Cli, Commands, run};
