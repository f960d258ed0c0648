// envsort - canonical sorting and diffing for env-style config files
//
// Copyright (c) 2025 envsort contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI command definitions and argument parsing.
//!
//! Commands are grouped the same way the help output lists them:
//!
//! - [`core`]: sort, diff, help
//! - [`utility`]: shell completion
//!
//! Parsing happens once, at the boundary. Command handlers take plain values
//! and never look at process arguments themselves.

mod core;
mod utility;

use clap::{ArgAction, Parser, Subcommand};
use envsort_core::Result;

pub use self::core::{parse_file_pair, CoreCommands, FilePair, USAGE};
pub use self::utility::UtilityCommands;

/// envsort - canonical sorting and diffing for env-style config files
///
/// # Examples
///
/// ```bash
/// # Write tmp_app.env in canonical form
/// envsort sort app.env
///
/// # Sort both files and print their differences
/// envsort diff staging.env,production.env
/// ```
#[derive(Parser)]
#[command(name = "envsort")]
#[command(version, about = "Canonical sorting and diffing for env-style config files", long_about = None)]
#[command(disable_help_subcommand = true, disable_help_flag = true)]
pub struct Cli {
    /// Print one-line usage
    #[arg(short = 'h', action = ArgAction::SetTrue)]
    pub usage: bool,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Command to run. With no command, envsort exits without output.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the parsed invocation.
    ///
    /// `-h` prints the one-line usage and wins over any command. With no
    /// command, nothing happens.
    ///
    /// # Errors
    ///
    /// Returns the first error hit by the command.
    pub fn execute(self) -> Result<()> {
        if self.usage {
            return crate::commands::help();
        }
        match self.command {
            Some(command) => command.execute(),
            None => Ok(()),
        }
    }
}

/// Top-level CLI commands.
///
/// ```text
/// Commands
/// ├── Core (sort, diff, help)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Flattened so the commands appear at top level
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns the first error hit by the command; every error is fatal.
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
