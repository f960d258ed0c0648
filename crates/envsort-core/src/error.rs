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

//! Error types for envsort operations.
//!
//! Every failure the tool can hit is fatal for the current run, so the
//! variants exist to produce a precise message rather than to drive recovery.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::decode::Encoding;

/// Result alias used throughout envsort.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for envsort operations.
///
/// Variants fall into three groups: usage errors (`MissingExtension`,
/// `InvalidInput`, `NotCanonical`), I/O errors (`Io`, `FileTooLarge`) and
/// decode errors (`Decode`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The file name has no `.`, so no decode format can be selected.
    #[error("provide full file name: '{path}' has no extension")]
    MissingExtension {
        /// The offending path
        path: PathBuf,
    },

    /// An I/O operation failed.
    ///
    /// `operation` names the step that failed (`metadata`, `read`,
    /// `create`, `write`, `flush`).
    #[error("{operation} '{path}': {message}")]
    Io {
        /// The failed operation
        operation: &'static str,
        /// The path being operated on
        path: PathBuf,
        /// The underlying error message
        message: String,
    },

    /// The input file exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The configured limit in bytes
        max: u64,
    },

    /// Normalized content did not decode as a flat string mapping.
    #[error("Decode error ({encoding}): {message}")]
    Decode {
        /// The encoding that was attempted
        encoding: Encoding,
        /// The decoder's message
        message: String,
    },

    /// The file is not in canonical form (returned by `sort --check`).
    #[error("'{path}' is not in canonical form")]
    NotCanonical {
        /// The checked path
        path: PathBuf,
    },

    /// Invalid input provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a missing-extension error.
    pub fn missing_extension(path: impl Into<PathBuf>) -> Self {
        Self::MissingExtension { path: path.into() }
    }

    /// Create an I/O error with operation and path context.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use envsort_core::Error;
    /// use std::fs;
    ///
    /// let result = fs::read_to_string("app.env")
    ///     .map_err(|e| Error::io("read", "app.env", e));
    /// ```
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
        }
    }

    /// Create a decode error from any decoder error.
    pub fn decode(encoding: Encoding, source: impl std::fmt::Display) -> Self {
        Self::Decode {
            encoding,
            message: source.to_string(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
