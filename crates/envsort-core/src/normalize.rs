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

//! Line normalizer.
//!
//! Rewrites the loose env-file dialects envsort accepts into strict
//! `key: value` lines that a YAML decoder can read:
//!
//! ```text
//! DB_PORT=5432                 ->  DB_PORT: 5432
//! DB_HOST = "local"            ->  DB_HOST: "local"
//! LOG_LEVEL: debug  # verbose  ->  LOG_LEVEL: debug
//! # full-line comment          ->  (dropped)
//! // also a comment            ->  (dropped)
//! ```
//!
//! Each line is scanned once, tracking whether the scanner is inside a
//! double-quoted string. Precedence, in order:
//!
//! 1. Leading spaces are stripped; blank lines and lines starting with `#`
//!    or `//` are dropped.
//! 2. An inline comment is cut at the first unquoted `#`, or failing that,
//!    the first unquoted `// `. A `//` without a trailing space (as in
//!    `http://host`) is kept.
//! 3. The first unquoted `=` or `:` is the separator. Whitespace around it
//!    is collapsed to `": "`. Everything after it is the value, untouched.
//!
//! Lines without a separator pass through so that the decoder reports them.
//! Key syntax is not validated.
//!
//! Known limitation: an unbalanced `"` inside a bare value makes the rest of
//! the line count as quoted, so a trailing comment after it is kept.

use tracing::debug;

/// Scanner state for double-quote tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Bare,
    Quoted,
    Escaped,
}

/// Characters of `line` that sit outside double quotes, with byte offsets.
///
/// The quote characters themselves are not yielded.
fn bare_chars(line: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut state = QuoteState::Bare;
    line.char_indices().filter(move |&(_, c)| {
        let was_bare = state == QuoteState::Bare;
        state = match (state, c) {
            (QuoteState::Bare, '"') => QuoteState::Quoted,
            (QuoteState::Bare, _) => QuoteState::Bare,
            (QuoteState::Quoted, '"') => QuoteState::Bare,
            (QuoteState::Quoted, '\\') => QuoteState::Escaped,
            (QuoteState::Quoted, _) | (QuoteState::Escaped, _) => QuoteState::Quoted,
        };
        was_bare && c != '"'
    })
}

/// Byte offset where an inline comment starts, if any.
fn comment_start(line: &str) -> Option<usize> {
    bare_chars(line)
        .find(|&(_, c)| c == '#')
        .or_else(|| bare_chars(line).find(|&(i, _)| line[i..].starts_with("// ")))
        .map(|(i, _)| i)
}

/// Byte offset of the key/value separator, if any.
fn separator(line: &str) -> Option<usize> {
    bare_chars(line)
        .find(|&(_, c)| c == '=' || c == ':')
        .map(|(i, _)| i)
}

/// Normalize a single line.
///
/// Returns `None` for lines that are dropped (blank or full-line comments).
///
/// # Examples
///
/// ```
/// use envsort_core::normalize_line;
///
/// assert_eq!(normalize_line("DB_PORT=5432").as_deref(), Some("DB_PORT: 5432"));
/// assert_eq!(normalize_line("  # comment"), None);
/// assert_eq!(normalize_line("TOKEN=abc==").as_deref(), Some("TOKEN: abc=="));
/// ```
pub fn normalize_line(line: &str) -> Option<String> {
    let line = line.trim_start_matches(' ');
    if line.trim().is_empty() || line.starts_with('#') || line.starts_with("//") {
        return None;
    }

    let line = match comment_start(line) {
        Some(idx) => line[..idx].trim_end(),
        None => line,
    };

    let normalized = match separator(line) {
        Some(idx) => {
            // Separators are ASCII, so idx + 1 is a char boundary.
            let key = line[..idx].trim_end();
            let value = line[idx + 1..].trim_start();
            if value.is_empty() {
                format!("{key}:")
            } else {
                format!("{key}: {value}")
            }
        }
        None => line.to_string(),
    };
    Some(normalized)
}

/// Normalize a whole input text into strict `key: value` lines.
///
/// Every emitted line ends with `\n`. CRLF line endings are accepted.
pub fn normalize(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut dropped = 0usize;
    for line in input.lines() {
        match normalize_line(line) {
            Some(normalized) => {
                output.push_str(&normalized);
                output.push('\n');
            }
            None => dropped += 1,
        }
    }
    debug!(bytes = output.len(), dropped, "normalized input");
    output
}
