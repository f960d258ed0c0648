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

//! Key grouping comparator.
//!
//! Variable names are compared as sequences of `_`-delimited segments, so
//! keys sharing a leading segment sort together:
//!
//! ```text
//! DB_HOST      plain byte order would put DBA_NAME first,
//! DB_PORT      because 'A' < '_'
//! DBA_NAME
//! LOG_LEVEL
//! ```
//!
//! Segments are compared byte-wise and case-sensitively. When one key's
//! segments are a prefix of the other's, the full strings decide, which puts
//! the shorter key first. This is lexicographic order over segment
//! sequences, hence a total order.

use std::cmp::Ordering;

use crate::decode::ConfigMap;

/// Segment separator for variable names.
pub const SEGMENT_SEPARATOR: char = '_';

/// Split a key into its segments.
///
/// Empty segments are kept, so joining with `_` reproduces the key exactly.
pub fn segments(key: &str) -> std::str::Split<'_, char> {
    key.split(SEGMENT_SEPARATOR)
}

/// The leading segment of a key, used for group boundaries.
pub fn first_segment(key: &str) -> &str {
    key.split_once(SEGMENT_SEPARATOR)
        .map_or(key, |(head, _)| head)
}

/// Compare segment by segment, stopping at the shorter sequence.
fn compare_segments(a: &str, b: &str) -> Ordering {
    segments(a)
        .zip(segments(b))
        .map(|(x, y)| x.cmp(y))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Compare two variable names in grouped order.
///
/// # Examples
///
/// ```
/// use envsort_core::compare_keys;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_keys("DB_HOST", "DB_PORT"), Ordering::Less);
/// assert_eq!(compare_keys("DB_PORT", "LOG_LEVEL"), Ordering::Less);
/// assert_eq!(compare_keys("DB_HOST", "DBA_NAME"), Ordering::Less);
/// ```
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    compare_segments(a, b).then_with(|| a.cmp(b))
}

/// Keys of `map` in grouped order.
pub fn sorted_keys(map: &ConfigMap) -> Vec<&str> {
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_by(|a, b| compare_keys(a, b));
    keys
}

/// The part of a diff record used for ordering.
///
/// Diff records quote the field name, so ordering starts at the first `"`.
/// A record without quotes is used whole.
pub fn diff_sort_key(record: &str) -> &str {
    record.find('"').map_or(record, |idx| &record[idx..])
}

/// Compare two diff records by the variable name they mention.
///
/// Falls back to comparing the full record text.
pub fn compare_records(a: &str, b: &str) -> Ordering {
    compare_segments(diff_sort_key(a), diff_sort_key(b)).then_with(|| a.cmp(b))
}
