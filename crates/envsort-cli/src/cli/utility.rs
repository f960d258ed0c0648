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

//! Utility commands.

use clap::Subcommand;
use clap_complete::Shell;
use envsort_core::Result;

use crate::commands;

/// Utility commands.
#[derive(Subcommand)]
pub enum UtilityCommands {
    /// Generate shell completion scripts
    ///
    /// Supported shells: bash, zsh, fish, powershell, elvish
    Completion {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL", value_enum)]
        shell: Shell,
    },
}

impl UtilityCommands {
    /// Execute the utility command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the script cannot be written to stdout.
    pub fn execute(self) -> Result<()> {
        match self {
            UtilityCommands::Completion { shell } => commands::completion(shell),
        }
    }
}
