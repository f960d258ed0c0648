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

//! Canonical writer.
//!
//! Renders a [`ConfigMap`] in canonical form: one `KEY: "value"` line per
//! key in grouped order, with a single blank line wherever the leading
//! segment changes.
//!
//! ```text
//! DB_HOST: "local"
//! DB_PORT: "5432"
//!
//! LOG_LEVEL: "debug"
//! ```

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::decode::ConfigMap;
use crate::error::{Error, Result};
use crate::order::{first_segment, sorted_keys};

/// Pre-allocated bytes per entry (key, quotes, value and newline).
const ESTIMATED_ENTRY_SIZE: usize = 32;

/// Writer for canonical env output.
pub struct CanonicalWriter {
    output: String,
}

impl CanonicalWriter {
    /// Creates a writer sized for `entries` lines.
    pub fn with_capacity(entries: usize) -> Self {
        Self {
            output: String::with_capacity(entries * ESTIMATED_ENTRY_SIZE),
        }
    }

    /// Renders `map` and returns the canonical text.
    pub fn write_map(mut self, map: &ConfigMap) -> String {
        let keys = sorted_keys(map);
        let mut keys_iter = keys.iter().peekable();
        while let Some(&key) = keys_iter.next() {
            self.write_entry(key, &map[key]);
            if let Some(&&next) = keys_iter.peek() {
                if first_segment(key) != first_segment(next) {
                    self.output.push('\n');
                }
            }
        }
        self.output
    }

    fn write_entry(&mut self, key: &str, value: &str) {
        self.output.push_str(key);
        self.output.push_str(": \"");
        self.output.push_str(&escape_value(value));
        self.output.push_str("\"\n");
    }
}

/// Render `map` in canonical form.
///
/// # Examples
///
/// ```
/// use envsort_core::{render, ConfigMap};
///
/// let mut map = ConfigMap::new();
/// map.insert("LOG_LEVEL".into(), "debug".into());
/// map.insert("DB_HOST".into(), "local".into());
/// assert_eq!(render(&map), "DB_HOST: \"local\"\n\nLOG_LEVEL: \"debug\"\n");
/// ```
pub fn render(map: &ConfigMap) -> String {
    CanonicalWriter::with_capacity(map.len()).write_map(map)
}

/// Whether `c` must be escaped inside a YAML double-quoted scalar.
///
/// Covers every control character plus the characters a YAML 1.1 reader
/// treats as line breaks or a byte order mark.
fn needs_escape(c: char) -> bool {
    matches!(c, '\\' | '"' | '\u{2028}' | '\u{2029}' | '\u{feff}') || c.is_control()
}

/// Escape a value for a YAML double-quoted scalar.
///
/// Backslash, double quote and every control character are escaped, using
/// the short YAML escapes where one exists and `\xNN` / `\uNNNN` otherwise.
/// Values without such characters are borrowed unchanged.
///
/// # Examples
///
/// ```
/// use envsort_core::escape_value;
///
/// assert_eq!(escape_value("plain"), "plain");
/// assert_eq!(escape_value("bell\u{7}"), "bell\\a");
/// assert_eq!(escape_value("\u{1}"), "\\x01");
/// ```
pub fn escape_value(value: &str) -> Cow<'_, str> {
    if !value.chars().any(needs_escape) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\0' => escaped.push_str("\\0"),
            '\u{7}' => escaped.push_str("\\a"),
            '\u{8}' => escaped.push_str("\\b"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\u{b}' => escaped.push_str("\\v"),
            '\u{c}' => escaped.push_str("\\f"),
            '\r' => escaped.push_str("\\r"),
            '\u{1b}' => escaped.push_str("\\e"),
            '\u{85}' => escaped.push_str("\\N"),
            '\u{2028}' => escaped.push_str("\\L"),
            '\u{2029}' => escaped.push_str("\\P"),
            c if u32::from(c) <= 0xff && needs_escape(c) => {
                escaped.push_str(&format!("\\x{:02X}", u32::from(c)));
            }
            c if needs_escape(c) => {
                escaped.push_str(&format!("\\u{:04X}", u32::from(c)));
            }
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Path of the canonical output for `input`.
///
/// The prefix is applied to the final path component, so the output lands
/// next to the input: `conf/app.env` becomes `conf/tmp_app.env`.
pub fn output_path(input: &Path, prefix: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    input.with_file_name(format!("{prefix}{name}"))
}

/// Write canonical text to `path`, creating or truncating it.
///
/// # Errors
///
/// Returns [`Error::Io`] naming the failed step (`create`, `write` or
/// `flush`). A partially written file is left in place.
pub fn write_canonical(path: &Path, content: &str) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io("create", path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .map_err(|e| Error::io("write", path, e))?;
    writer.flush().map_err(|e| Error::io("flush", path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote canonical file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{Decoder, Encoding, SerdeDecoder};
    use crate::normalize::normalize;

    fn map(entries: &[(&str, &str)]) -> ConfigMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_render_groups() {
        let values = map(&[
            ("DB_PORT", "5432"),
            ("DB_HOST", "local"),
            ("LOG_LEVEL", "debug"),
        ]);
        assert_eq!(
            render(&values),
            "DB_HOST: \"local\"\nDB_PORT: \"5432\"\n\nLOG_LEVEL: \"debug\"\n"
        );
    }

    #[test]
    fn test_render_single_key_no_separator() {
        assert_eq!(render(&map(&[("X", "1")])), "X: \"1\"\n");
    }

    #[test]
    fn test_render_empty_map() {
        assert_eq!(render(&ConfigMap::new()), "");
    }

    #[test]
    fn test_render_one_blank_line_per_group_change() {
        let values = map(&[("A_1", "a"), ("B", "b"), ("C_1", "c"), ("C_2", "d")]);
        assert_eq!(
            render(&values),
            "A_1: \"a\"\n\nB: \"b\"\n\nC_1: \"c\"\nC_2: \"d\"\n"
        );
    }

    #[test]
    fn test_render_empty_value() {
        assert_eq!(render(&map(&[("EMPTY", "")])), "EMPTY: \"\"\n");
    }

    #[test]
    fn test_escape_value() {
        assert!(matches!(escape_value("plain value"), Cow::Borrowed(_)));
        assert_eq!(escape_value(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_value(r"C:\tmp"), r"C:\\tmp");
        assert_eq!(escape_value("a\nb\tc"), r"a\nb\tc");
    }

    #[test]
    fn test_escape_control_characters() {
        assert_eq!(escape_value("bell\u{7} here"), r"bell\a here");
        assert_eq!(escape_value("nel\u{85} here"), r"nel\N here");
        assert_eq!(escape_value("\0\u{8}\u{b}\u{c}\u{1b}"), r"\0\b\v\f\e");
        assert_eq!(escape_value("\u{1}\u{7f}\u{9f}"), r"\x01\x7F\x9F");
        assert_eq!(escape_value("\u{2028}\u{2029}"), r"\L\P");
        assert_eq!(escape_value("\u{feff}"), r"\uFEFF");
    }

    #[test]
    fn test_control_characters_survive_resort() {
        let values = map(&[
            ("K", "bell\u{7} here"),
            ("N", "nel\u{85} here"),
            ("Z", "\u{1}\u{7f}"),
        ]);
        let first = render(&values);
        let decoded = SerdeDecoder
            .decode(&normalize(&first), Encoding::Yaml)
            .unwrap();
        assert_eq!(decoded, values);
        assert_eq!(render(&decoded), first);
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("app.env"), "tmp_"),
            PathBuf::from("tmp_app.env")
        );
        assert_eq!(
            output_path(Path::new("conf/app.env"), "tmp_"),
            PathBuf::from("conf/tmp_app.env")
        );
    }

    #[test]
    fn test_write_canonical_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tmp_a.yaml");
        write_canonical(&path, "A: \"1\"\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "A: \"1\"\n");
    }

    #[test]
    fn test_write_canonical_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("tmp_a.yaml");
        let err = write_canonical(&path, "A: \"1\"\n").unwrap_err();
        assert!(matches!(
            err,
            Error::Io {
                operation: "create",
                ..
            }
        ));
    }
}
