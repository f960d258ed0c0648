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

//! Structured decoder adapter.
//!
//! Normalized text is handed to a [`Decoder`], which turns it into a flat
//! [`ConfigMap`]. The decode format comes from the file name extension.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Flat mapping from variable name to string value.
///
/// Ordering is by plain string comparison; the grouped order is derived on
/// demand by [`crate::sorted_keys`].
pub type ConfigMap = BTreeMap<String, String>;

/// Structured format used to decode normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// JSON, selected only by an exact `json` extension.
    Json,
    /// YAML, used for every other extension.
    Yaml,
}

impl Encoding {
    /// Select the encoding from a file name.
    ///
    /// The extension is everything after the first `.` of the final path
    /// component. An extension of exactly `json` selects JSON; anything else
    /// (`yaml`, `env`, `b.json`, misspellings) falls through to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingExtension`] if the file name contains no `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envsort_core::Encoding;
    /// use std::path::Path;
    ///
    /// assert_eq!(Encoding::from_file_name(Path::new("a.json")).unwrap(), Encoding::Json);
    /// assert_eq!(Encoding::from_file_name(Path::new("conf/.env")).unwrap(), Encoding::Yaml);
    /// assert!(Encoding::from_file_name(Path::new("envfile")).is_err());
    /// ```
    pub fn from_file_name(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        match name.split_once('.') {
            Some((_, "json")) => Ok(Self::Json),
            Some(_) => Ok(Self::Yaml),
            None => Err(Error::missing_extension(path)),
        }
    }

    /// Lowercase name of the encoding.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decodes normalized text into a flat [`ConfigMap`].
///
/// The sort pipeline only depends on this trait, so a different parser can
/// be injected without touching the ordering logic.
pub trait Decoder {
    /// Decode `text` in the given encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the text is not a flat string mapping.
    fn decode(&self, text: &str, encoding: Encoding) -> Result<ConfigMap>;
}

/// Default decoder backed by `serde_yaml` and `serde_json`.
///
/// YAML scalars keep their source text (`5432`, `1.50` and `true` decode as
/// the strings `"5432"`, `"1.50"` and `"true"`). Null values, including an
/// empty `KEY:`, decode as the empty string. Nested mappings, sequences and
/// JSON non-string values are decode errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerdeDecoder;

impl Decoder for SerdeDecoder {
    fn decode(&self, text: &str, encoding: Encoding) -> Result<ConfigMap> {
        debug!(%encoding, bytes = text.len(), "decoding");
        let raw: BTreeMap<String, Option<String>> = match encoding {
            Encoding::Json => {
                serde_json::from_str(text).map_err(|e| Error::decode(encoding, e))?
            }
            // A file holding only comments normalizes to nothing.
            Encoding::Yaml if text.trim().is_empty() => BTreeMap::new(),
            Encoding::Yaml => {
                serde_yaml::from_str(text).map_err(|e| Error::decode(encoding, e))?
            }
        };
        Ok(raw
            .into_iter()
            .map(|(key, value)| (key, value.unwrap_or_default()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Encoding selection ====================

    #[test]
    fn test_json_extension() {
        assert_eq!(
            Encoding::from_file_name(Path::new("config.json")).unwrap(),
            Encoding::Json
        );
    }

    #[test]
    fn test_other_extensions_fall_back_to_yaml() {
        for name in ["a.yaml", "a.yml", "a.env", "a.jsn", "a.JSON", "a.b.json"] {
            assert_eq!(
                Encoding::from_file_name(Path::new(name)).unwrap(),
                Encoding::Yaml,
                "{name}"
            );
        }
    }

    #[test]
    fn test_extension_taken_from_file_name_only() {
        assert_eq!(
            Encoding::from_file_name(Path::new("./conf.d/settings.json")).unwrap(),
            Encoding::Json
        );
        assert!(matches!(
            Encoding::from_file_name(Path::new("./conf.d/settings")),
            Err(Error::MissingExtension { .. })
        ));
    }

    #[test]
    fn test_missing_extension() {
        let err = Encoding::from_file_name(Path::new("envfile")).unwrap_err();
        assert!(err.to_string().contains("provide full file name"));
    }

    // ==================== YAML ====================

    #[test]
    fn test_yaml_flat_map() {
        let map = SerdeDecoder
            .decode("DB_HOST: \"local\"\nDB_PORT: 5432\n", Encoding::Yaml)
            .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["DB_HOST"], "local");
        assert_eq!(map["DB_PORT"], "5432");
    }

    #[test]
    fn test_yaml_scalars_keep_source_text() {
        let map = SerdeDecoder
            .decode("RATIO: 1.50\nDEBUG: true\n", Encoding::Yaml)
            .unwrap();
        assert_eq!(map["RATIO"], "1.50");
        assert_eq!(map["DEBUG"], "true");
    }

    #[test]
    fn test_yaml_empty_value_is_empty_string() {
        let map = SerdeDecoder.decode("EMPTY:\n", Encoding::Yaml).unwrap();
        assert_eq!(map["EMPTY"], "");
    }

    #[test]
    fn test_yaml_empty_document() {
        let map = SerdeDecoder.decode("", Encoding::Yaml).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_yaml_nested_rejected() {
        let err = SerdeDecoder
            .decode("DB:\n  HOST: local\n", Encoding::Yaml)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Decode {
                encoding: Encoding::Yaml,
                ..
            }
        ));
    }

    #[test]
    fn test_yaml_not_a_mapping() {
        assert!(SerdeDecoder.decode("garbage\n", Encoding::Yaml).is_err());
    }

    // ==================== JSON ====================

    #[test]
    fn test_json_flat_map() {
        let map = SerdeDecoder
            .decode(r#"{"A": "1", "B": null}"#, Encoding::Json)
            .unwrap();
        assert_eq!(map["A"], "1");
        assert_eq!(map["B"], "");
    }

    #[test]
    fn test_json_non_string_rejected() {
        let err = SerdeDecoder
            .decode(r#"{"PORT": 5432}"#, Encoding::Json)
            .unwrap_err();
        assert!(err.to_string().starts_with("Decode error (json)"));
    }

    #[test]
    fn test_json_syntax_error() {
        assert!(SerdeDecoder.decode("{", Encoding::Json).is_err());
    }
}
