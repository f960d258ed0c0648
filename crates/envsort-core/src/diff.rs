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

//! Diff records and their ordering.

use std::collections::BTreeSet;
use std::fmt;

use crate::decode::ConfigMap;
use crate::order::{compare_records, diff_sort_key};

/// Placeholder printed for a key absent from one side.
const MISSING: &str = "(missing)";

/// One human-readable difference between two maps.
///
/// The text always mentions the differing key inside double quotes; that is
/// what [`order_records`] sorts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRecord(String);

impl DiffRecord {
    /// Wrap pre-formatted record text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Record for `key` whose value went from `left` to `right`.
    ///
    /// ```
    /// use envsort_core::DiffRecord;
    ///
    /// let record = DiffRecord::change("X", Some("1"), Some("2"));
    /// assert_eq!(record.as_str(), r#"["X"]: "1" != "2""#);
    /// ```
    pub fn change(key: &str, left: Option<&str>, right: Option<&str>) -> Self {
        Self(format!("[{key:?}]: {} != {}", side(left), side(right)))
    }

    /// The record text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The portion of the text used for ordering.
    pub fn sort_key(&self) -> &str {
        diff_sort_key(&self.0)
    }
}

impl fmt::Display for DiffRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn side(value: Option<&str>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{v:?}"))
}

/// Computes the differences between two maps.
///
/// Implementations return one record per added, removed or changed key, and
/// nothing for identical maps.
pub trait DiffEngine {
    /// Diff `left` against `right`.
    fn compute(&self, left: &ConfigMap, right: &ConfigMap) -> Vec<DiffRecord>;
}

/// Default key-by-key diff engine.
///
/// Records look like:
///
/// ```text
/// ["DB_PORT"]: "5432" != "5433"
/// ["LOG_LEVEL"]: "debug" != (missing)
/// ["CACHE_TTL"]: (missing) != "60"
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MapDiff;

impl DiffEngine for MapDiff {
    fn compute(&self, left: &ConfigMap, right: &ConfigMap) -> Vec<DiffRecord> {
        let keys: BTreeSet<&str> = left
            .keys()
            .chain(right.keys())
            .map(String::as_str)
            .collect();
        keys.into_iter()
            .filter_map(|key| {
                let l = left.get(key).map(String::as_str);
                let r = right.get(key).map(String::as_str);
                (l != r).then(|| DiffRecord::change(key, l, r))
            })
            .collect()
    }
}

/// Sort records so changes to related keys appear together.
///
/// Uses the same segment grouping as key sorting, applied to the text from
/// the first `"` of each record. The sort is stable.
pub fn order_records(mut records: Vec<DiffRecord>) -> Vec<DiffRecord> {
    records.sort_by(|a, b| compare_records(a.as_str(), b.as_str()));
    records
}
