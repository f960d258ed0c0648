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

//! CLI command implementations

mod completion;
mod diff;
mod help;
mod sort;

pub use completion::completion;
pub use diff::diff;
pub use help::help;
pub use sort::sort;

use envsort_core::{Error, Result};
use std::io::{self, Write};

/// Path label used in errors for standard output.
const STDOUT_LABEL: &str = "<stdout>";

/// Write lines to stdout, one per item.
///
/// # Errors
///
/// Returns [`Error::Io`] if stdout cannot be written (for example, a closed
/// pipe).
pub fn write_lines<I, T>(lines: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: std::fmt::Display,
{
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for line in lines {
        writeln!(out, "{line}").map_err(|e| Error::io("write", STDOUT_LABEL, e))?;
    }
    out.flush().map_err(|e| Error::io("flush", STDOUT_LABEL, e))
}
