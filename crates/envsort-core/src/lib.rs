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

//! envsort core
//!
//! Normalizes, canonically sorts and diffs flat key/value configuration
//! files written in loose env-file dialects (`KEY=value`, `KEY = "value"`,
//! `KEY: value`, `#` and `//` comments).
//!
//! # Overview
//!
//! - [`normalize`]: rewrite loose dialects into strict `key: value` lines
//! - [`Decoder`] / [`SerdeDecoder`]: decode normalized text as YAML or JSON
//!   into a flat [`ConfigMap`]
//! - [`compare_keys`]: grouped order over `_`-segmented variable names
//! - [`render`]: canonical `KEY: "value"` output with blank lines between
//!   groups
//! - [`DiffEngine`] / [`MapDiff`] and [`order_records`]: structural diff
//!   records, ordered so related keys appear together
//! - [`Pipeline`]: the file-level sort, check and diff operations
//!
//! # Canonical form
//!
//! ```text
//! DB_HOST: "local"
//! DB_PORT: "5432"
//!
//! LOG_LEVEL: "debug"
//! ```
//!
//! Rendering is deterministic and idempotent: sorting a canonical file
//! reproduces it byte for byte.
//!
//! # Examples
//!
//! ```
//! use envsort_core::{normalize, render, Decoder, Encoding, SerdeDecoder};
//!
//! # fn main() -> envsort_core::Result<()> {
//! let input = "DB_PORT=5432\n# comment\nDB_HOST = \"local\"\nLOG_LEVEL: debug\n";
//! let values = SerdeDecoder.decode(&normalize(input), Encoding::Yaml)?;
//! assert_eq!(
//!     render(&values),
//!     "DB_HOST: \"local\"\nDB_PORT: \"5432\"\n\nLOG_LEVEL: \"debug\"\n"
//! );
//! # Ok(())
//! # }
//! ```

mod config;
mod decode;
mod diff;
mod error;
mod normalize;
mod order;
mod pipeline;
mod writer;

pub use config::{SortConfig, DEFAULT_MAX_FILE_SIZE, DEFAULT_OUTPUT_PREFIX};
pub use decode::{ConfigMap, Decoder, Encoding, SerdeDecoder};
pub use diff::{order_records, DiffEngine, DiffRecord, MapDiff};
pub use error::{Error, Result};
pub use normalize::{normalize, normalize_line};
pub use order::{
    compare_keys, compare_records, diff_sort_key, first_segment, segments, sorted_keys,
    SEGMENT_SEPARATOR,
};
pub use pipeline::{read_file, Pipeline, SortOutcome};
pub use writer::{escape_value, output_path, render, write_canonical, CanonicalWriter};
