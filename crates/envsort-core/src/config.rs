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

//! Sort pipeline configuration.

use crate::error::{Error, Result};

/// Prefix added to the input file name to form the output file name.
pub const DEFAULT_OUTPUT_PREFIX: &str = "tmp_";

/// Default maximum input file size (1 GB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Configuration for the sort pipeline.
///
/// # Examples
///
/// ```
/// use envsort_core::SortConfig;
///
/// let config = SortConfig::default();
/// assert_eq!(config.output_prefix, "tmp_");
///
/// let config = SortConfig::new()
///     .with_output_prefix("sorted_")
///     .with_max_file_size(64 * 1024);
/// assert_eq!(config.max_file_size, 65536);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct SortConfig {
    /// Prefix for the canonical output file name.
    ///
    /// Must be non-empty: the output never replaces the input.
    /// Default: `tmp_`
    pub output_prefix: String,

    /// Largest input file accepted, in bytes. Checked before reading.
    ///
    /// Default: [`DEFAULT_MAX_FILE_SIZE`]
    pub max_file_size: u64,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl SortConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output file prefix.
    pub fn with_output_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_prefix = prefix.into();
        self
    }

    /// Set the maximum input file size.
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// Check the configuration before any file is touched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the output prefix is empty.
    pub fn validate(&self) -> Result<()> {
        if self.output_prefix.is_empty() {
            return Err(Error::invalid_input(
                "output prefix must not be empty (the input file would be overwritten)",
            ));
        }
        Ok(())
    }
}
