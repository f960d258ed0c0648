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

//! Shell completion generation - Tab completion for various shells

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use envsort_core::{Error, Result};
use std::io::{self, Write};

use super::STDOUT_LABEL;
use crate::cli::Cli;

/// Write a completion script for `shell` to stdout.
///
/// # Errors
///
/// Returns `Err` if stdout cannot be flushed.
///
/// # Examples
///
/// ```no_run
/// use clap_complete::Shell;
/// use envsort_cli::commands::completion;
///
/// # fn main() -> envsort_core::Result<()> {
/// completion(Shell::Bash)?;
/// # Ok(())
/// # }
/// ```
pub fn completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut stdout = io::stdout();
    generate(shell, &mut cmd, name, &mut stdout);
    stdout
        .flush()
        .map_err(|e| Error::io("flush", STDOUT_LABEL, e))
}
