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

//! envsort CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **sort** (`s`, `-s`): normalize and sort a file into `tmp_<file>`
//! - **diff** (`-d`): sort two files and print their differences
//! - **help** (`h`, `-h`): one-line usage; `--help` prints full help
//! - **completion**: shell completion scripts
//!
//! Running `envsort` with no command does nothing and exits successfully.
//!
//! # Examples
//!
//! ```no_run
//! use envsort_cli::commands::{diff, sort};
//! use std::path::Path;
//!
//! # fn main() -> envsort_core::Result<()> {
//! sort(Path::new("app.env"), false, "tmp_")?;
//! diff(Path::new("a.env"), Path::new("b.env"), "tmp_")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All commands return `envsort_core::Result<()>`. The binary reports any
//! error on stderr and exits with a failure status; nothing is retried and
//! partially written output is not cleaned up.

pub mod cli;
pub mod commands;
