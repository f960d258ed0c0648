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

//! Core commands: sort, diff and help.

use std::path::PathBuf;

use clap::Subcommand;
use envsort_core::{Result, DEFAULT_OUTPUT_PREFIX};

use crate::commands;

/// One-line usage text printed by `envsort help`.
pub const USAGE: &str = "usage: envsort [sort|diff] [file1],[file2]";

/// Two file names given as `FILE1,FILE2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    /// Left-hand file
    pub left: PathBuf,
    /// Right-hand file
    pub right: PathBuf,
}

/// Parse `FILE1,FILE2`, splitting at the first comma.
///
/// # Errors
///
/// Returns `Err` if there is no comma or either side is empty.
///
/// # Examples
///
/// ```
/// use envsort_cli::cli::parse_file_pair;
///
/// let pair = parse_file_pair("a.env,b.env").unwrap();
/// assert_eq!(pair.left.to_str(), Some("a.env"));
/// assert!(parse_file_pair("a.env").is_err());
/// ```
pub fn parse_file_pair(value: &str) -> std::result::Result<FilePair, String> {
    let (left, right) = value
        .split_once(',')
        .ok_or_else(|| format!("expected two file names separated by a comma, got '{value}'"))?;
    if left.is_empty() || right.is_empty() {
        return Err(format!("both file names are required, got '{value}'"));
    }
    Ok(FilePair {
        left: PathBuf::from(left),
        right: PathBuf::from(right),
    })
}

/// Core envsort commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Normalize and sort a file into tmp_<FILE>
    ///
    /// Accepts KEY=value, KEY = "value" and KEY: value lines with # and //
    /// comments. The extension selects the decoder: json for JSON, anything
    /// else for YAML. The input file is never modified.
    #[command(alias = "s", short_flag = 's')]
    Sort {
        /// Input file path (must have an extension)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Check only (exit 1 if not canonical); writes nothing
        #[arg(short, long)]
        check: bool,

        /// Prefix for the output file name
        #[arg(long, value_name = "PREFIX", default_value = DEFAULT_OUTPUT_PREFIX)]
        prefix: String,
    },

    /// Sort two files and print their differences
    ///
    /// Both files are written in canonical form as a side effect. Differences
    /// are printed one per line, with related keys grouped together.
    #[command(short_flag = 'd')]
    Diff {
        /// Two file paths separated by a comma
        #[arg(value_name = "FILE1,FILE2", value_parser = parse_file_pair)]
        files: FilePair,

        /// Prefix for the output file names
        #[arg(long, value_name = "PREFIX", default_value = DEFAULT_OUTPUT_PREFIX)]
        prefix: String,
    },

    /// Print one-line usage
    #[command(alias = "h")]
    Help,
}

impl CoreCommands {
    /// Execute the core command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<()> {
        match self {
            CoreCommands::Sort {
                file,
                check,
                prefix,
            } => commands::sort(&file, check, &prefix),
            CoreCommands::Diff { files, prefix } => {
                commands::diff(&files.left, &files.right, &prefix)
            }
            CoreCommands::Help => commands::help(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_pair() {
        let pair = parse_file_pair("a.yaml,b.yaml").unwrap();
        assert_eq!(pair.left, PathBuf::from("a.yaml"));
        assert_eq!(pair.right, PathBuf::from("b.yaml"));
    }

    #[test]
    fn test_parse_file_pair_splits_at_first_comma() {
        let pair = parse_file_pair("a.env,b,c.env").unwrap();
        assert_eq!(pair.left, PathBuf::from("a.env"));
        assert_eq!(pair.right, PathBuf::from("b,c.env"));
    }

    #[test]
    fn test_parse_file_pair_errors() {
        assert!(parse_file_pair("a.env").unwrap_err().contains("comma"));
        assert!(parse_file_pair(",b.env").is_err());
        assert!(parse_file_pair("a.env,").is_err());
    }
}
