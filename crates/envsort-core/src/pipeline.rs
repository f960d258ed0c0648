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

//! The sort and diff pipelines.
//!
//! ```text
//! file -> normalize -> decode -> sort keys -> render -> tmp_<file>
//! ```
//!
//! Diff mode runs the sort pipeline for both files, diffs the two maps and
//! orders the resulting records.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::SortConfig;
use crate::decode::{ConfigMap, Decoder, Encoding, SerdeDecoder};
use crate::diff::{order_records, DiffEngine, DiffRecord, MapDiff};
use crate::error::{Error, Result};
use crate::normalize::normalize;
use crate::writer::{output_path, render, write_canonical};

/// Result of sorting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    /// The decoded values.
    pub values: ConfigMap,
    /// Where the canonical file was written.
    pub output: PathBuf,
}

/// Read a file into a string, refusing files larger than `max_file_size`.
///
/// The size is checked from metadata before anything is read.
///
/// # Errors
///
/// Returns [`Error::Io`] if metadata or reading fails (including invalid
/// UTF-8), and [`Error::FileTooLarge`] if the limit is exceeded.
pub fn read_file(path: &Path, max_file_size: u64) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| Error::io("metadata", path, e))?;
    if metadata.len() > max_file_size {
        return Err(Error::file_too_large(path, metadata.len(), max_file_size));
    }
    fs::read_to_string(path).map_err(|e| Error::io("read", path, e))
}

/// Sort and diff pipeline with injectable decoder and diff engine.
///
/// # Examples
///
/// ```no_run
/// use envsort_core::{Pipeline, SortConfig};
/// use std::path::Path;
///
/// # fn main() -> envsort_core::Result<()> {
/// let pipeline = Pipeline::new(SortConfig::default());
/// let outcome = pipeline.sort_file(Path::new("app.env"))?;
/// assert!(outcome.output.ends_with("tmp_app.env"));
///
/// for record in pipeline.diff_files(Path::new("a.env"), Path::new("b.env"))? {
///     println!("{record}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct Pipeline {
    config: SortConfig,
    decoder: Box<dyn Decoder + Send + Sync>,
    engine: Box<dyn DiffEngine + Send + Sync>,
}

impl Pipeline {
    /// Pipeline using [`SerdeDecoder`] and [`MapDiff`].
    pub fn new(config: SortConfig) -> Self {
        Self {
            config,
            decoder: Box::new(SerdeDecoder),
            engine: Box::new(MapDiff),
        }
    }

    /// Replace the decoder.
    pub fn with_decoder(mut self, decoder: impl Decoder + Send + Sync + 'static) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    /// Replace the diff engine.
    pub fn with_diff_engine(mut self, engine: impl DiffEngine + Send + Sync + 'static) -> Self {
        self.engine = Box::new(engine);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Read, normalize and decode a file. Returns the raw text alongside.
    fn load(&self, path: &Path) -> Result<(String, ConfigMap)> {
        let encoding = Encoding::from_file_name(path)?;
        let raw = read_file(path, self.config.max_file_size)?;
        let values = self.decoder.decode(&normalize(&raw), encoding)?;
        debug!(path = %path.display(), %encoding, keys = values.len(), "loaded");
        Ok((raw, values))
    }

    /// Decode a file without writing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the file name has no extension, cannot be read,
    /// or does not decode as a flat string mapping.
    pub fn load_file(&self, path: &Path) -> Result<ConfigMap> {
        self.load(path).map(|(_, values)| values)
    }

    /// Sort a file and write its canonical form next to it.
    ///
    /// The output is `<prefix><file name>` in the same directory; the input
    /// is never modified.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the file cannot be
    /// loaded, or the output cannot be written.
    pub fn sort_file(&self, path: &Path) -> Result<SortOutcome> {
        self.config.validate()?;
        let (_, values) = self.load(path)?;
        let output = output_path(path, &self.config.output_prefix);
        write_canonical(&output, &render(&values))?;
        info!(
            input = %path.display(),
            output = %output.display(),
            keys = values.len(),
            "sorted"
        );
        Ok(SortOutcome { values, output })
    }

    /// Whether a file is already in canonical form. Writes nothing.
    ///
    /// CRLF line endings in the input are treated as LF.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded.
    pub fn check_file(&self, path: &Path) -> Result<bool> {
        let (raw, values) = self.load(path)?;
        let canonical = raw.replace("\r\n", "\n") == render(&values);
        debug!(path = %path.display(), canonical, "checked");
        Ok(canonical)
    }

    /// Sort both files, then diff them and order the records.
    ///
    /// Both canonical files are written as a side effect. The two sort
    /// pipelines share nothing and run concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first error from either sort pipeline (left first).
    pub fn diff_files(&self, left: &Path, right: &Path) -> Result<Vec<DiffRecord>> {
        let (left, right) = rayon::join(|| self.sort_file(left), || self.sort_file(right));
        let (left, right) = (left?, right?);
        let records = order_records(self.engine.compute(&left.values, &right.values));
        info!(records = records.len(), "diffed");
        Ok(records)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(SortConfig::default())
    }
}
