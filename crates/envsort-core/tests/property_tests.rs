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

//! Property-based tests for ordering, grouping and canonical round-trips.
//!
//! # Properties Tested
//!
//! 1. **Total order**: `compare_keys` is antisymmetric, transitive and only
//!    equal for identical keys
//! 2. **Grouping**: adjacent keys are separated by exactly one blank line when
//!    their leading segments differ, and by none otherwise
//! 3. **Idempotence**: sorting canonical output reproduces it byte for byte
//! 4. **Value round-trip**: values without `=` or `"` survive
//!    normalize -> decode unchanged
//! 5. **Diff symmetry**: a map diffed with itself yields no records

use envsort_core::{
    compare_keys, first_segment, normalize, render, ConfigMap, Decoder, DiffEngine, Encoding,
    MapDiff, SerdeDecoder,
};
use proptest::prelude::*;
use std::cmp::Ordering;

// ===== Generators =====

/// UPPER_SNAKE_CASE variable names.
fn var_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][A-Z0-9]{0,4}(_[A-Z0-9]{1,4}){0,3}")
        .expect("Failed to create key regex")
}

/// Keys from a tiny alphabet, so shared prefixes and ties are common.
fn dense_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[AB_]{0,6}").expect("Failed to create key regex")
}

/// Any printable ASCII, including quotes and backslashes.
fn env_value() -> impl Strategy<Value = String> {
    // Printable ASCII mixed with characters the writer must escape
    prop::string::string_regex(r"[ -~\x00-\x1f\x7f\x{85}\x{2028}\x{feff}]{0,24}")
        .expect("Failed to create value regex")
}

fn config_map() -> impl Strategy<Value = ConfigMap> {
    prop::collection::btree_map(var_name(), env_value(), 0..16)
}

fn decode_yaml(text: &str) -> ConfigMap {
    SerdeDecoder
        .decode(&normalize(text), Encoding::Yaml)
        .expect("canonical text should decode")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: compare(a, b) is the reverse of compare(b, a).
    #[test]
    fn prop_comparator_antisymmetric(a in dense_key(), b in dense_key()) {
        prop_assert_eq!(compare_keys(&a, &b), compare_keys(&b, &a).reverse());
    }

    /// Property: only identical keys compare equal.
    #[test]
    fn prop_comparator_equality(a in dense_key(), b in dense_key()) {
        prop_assert_eq!(compare_keys(&a, &b) == Ordering::Equal, a == b);
    }

    /// Property: a <= b and b <= c implies a <= c.
    #[test]
    fn prop_comparator_transitive(a in dense_key(), b in dense_key(), c in dense_key()) {
        let mut keys = [a, b, c];
        keys.sort_by(|x, y| compare_keys(x, y));
        prop_assert_ne!(compare_keys(&keys[0], &keys[1]), Ordering::Greater);
        prop_assert_ne!(compare_keys(&keys[1], &keys[2]), Ordering::Greater);
        prop_assert_ne!(compare_keys(&keys[0], &keys[2]), Ordering::Greater);
    }

    /// Property: one blank line between groups, none within a group.
    #[test]
    fn prop_grouping_invariant(values in config_map()) {
        let rendered = render(&values);
        let mut previous: Option<&str> = None;
        let mut blanks = 0usize;
        for line in rendered.lines() {
            if line.is_empty() {
                blanks += 1;
                continue;
            }
            let key = line.split_once(": ").map(|(k, _)| k).unwrap_or(line);
            if let Some(prev) = previous {
                let expected = usize::from(first_segment(prev) != first_segment(key));
                prop_assert_eq!(blanks, expected, "between {} and {}", prev, key);
                prop_assert_eq!(compare_keys(prev, key), Ordering::Less);
            } else {
                prop_assert_eq!(blanks, 0);
            }
            previous = Some(key);
            blanks = 0;
        }
        prop_assert_eq!(blanks, 0, "no trailing blank line");
    }

    /// Property: canonical output decodes to the same map and re-renders
    /// identically.
    #[test]
    fn prop_canonical_idempotent(values in config_map()) {
        let first = render(&values);
        let decoded = decode_yaml(&first);
        prop_assert_eq!(&decoded, &values);
        prop_assert_eq!(render(&decoded), first);
    }

    /// Property: quoted values without `=` or `"` round-trip from the loose
    /// `KEY = "value"` dialect.
    #[test]
    fn prop_quoted_value_roundtrip(
        key in var_name(),
        value in "[a-zA-Z0-9 .,:/@#%+-]{0,20}"
    ) {
        let decoded = decode_yaml(&format!("{key} = \"{value}\"\n"));
        prop_assert_eq!(decoded.get(&key), Some(&value));
    }

    /// Property: simple bare values round-trip from `KEY=value`.
    #[test]
    fn prop_bare_value_roundtrip(
        key in var_name(),
        value in "[a-zA-Z0-9][a-zA-Z0-9./+-]{0,15}"
            .prop_filter("YAML null", |v| !matches!(v.as_str(), "null" | "Null" | "NULL"))
    ) {
        let decoded = decode_yaml(&format!("{key}={value}\n"));
        prop_assert_eq!(decoded.get(&key), Some(&value));
    }

    /// Property: a map diffed with itself has no records, and diff record
    /// counts are symmetric.
    #[test]
    fn prop_diff_symmetry(a in config_map(), b in config_map()) {
        prop_assert!(MapDiff.compute(&a, &a).is_empty());
        prop_assert_eq!(MapDiff.compute(&a, &b).len(), MapDiff.compute(&b, &a).len());
    }
}
