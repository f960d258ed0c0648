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

//! Sort command - canonical rewrite of one file

use std::path::Path;

use envsort_core::{Error, Pipeline, Result, SortConfig};
use tracing::debug;

use super::write_lines;

/// Sort a file into canonical form, or check whether it already is.
///
/// Without `check`, writes `<prefix><file name>` next to `file` and prints
/// nothing. With `check`, writes nothing and prints a confirmation when the
/// file is canonical.
///
/// # Errors
///
/// Returns `Err` if:
/// - The file name has no extension
/// - The file cannot be read or does not decode as a flat mapping
/// - The output cannot be written
/// - In check mode, the file is not canonical
///
/// # Examples
///
/// ```no_run
/// use envsort_cli::commands::sort;
/// use std::path::Path;
///
/// # fn main() -> envsort_core::Result<()> {
/// // Writes tmp_app.env
/// sort(Path::new("app.env"), false, "tmp_")?;
///
/// // Fails unless app.env is already canonical
/// sort(Path::new("app.env"), true, "tmp_")?;
/// # Ok(())
/// # }
/// ```
pub fn sort(file: &Path, check: bool, prefix: &str) -> Result<()> {
    debug!(file = %file.display(), check, prefix, "sort command");
    let pipeline = Pipeline::new(SortConfig::new().with_output_prefix(prefix));

    if check {
        if !pipeline.check_file(file)? {
            return Err(Error::NotCanonical {
                path: file.to_path_buf(),
            });
        }
        return write_lines([format!("'{}' is in canonical form", file.display())]);
    }

    pipeline.sort_file(file).map(|_| ())
}
