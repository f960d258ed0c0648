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

//! Diff command - sort two files and print their differences

use std::path::Path;

use envsort_core::{Pipeline, Result, SortConfig};
use tracing::debug;

use super::write_lines;

/// Sort both files, then print one difference per line to stdout.
///
/// Both canonical files are written as a side effect. Identical files print
/// nothing.
///
/// # Errors
///
/// Returns `Err` if either file fails to sort, or stdout cannot be written.
///
/// # Examples
///
/// ```no_run
/// use envsort_cli::commands::diff;
/// use std::path::Path;
///
/// # fn main() -> envsort_core::Result<()> {
/// diff(Path::new("staging.env"), Path::new("production.env"), "tmp_")?;
/// # Ok(())
/// # }
/// ```
pub fn diff(left: &Path, right: &Path, prefix: &str) -> Result<()> {
    let pipeline = Pipeline::new(SortConfig::new().with_output_prefix(prefix));
    let records = pipeline.diff_files(left, right)?;
    debug!(
        left = %left.display(),
        right = %right.display(),
        records = records.len(),
        "diff command"
    );
    write_lines(records)
}
