// ecsbench - ECS Benchmark Report Toolkit
//
// Copyright (c) 2025 ecsbench contributors.
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

//! Structured error types for report processing.
//!
//! All fallible operations in this crate return [`Result`] with [`ReportError`].
//! Malformed input files are fatal; unknown benchmark names and unsupported
//! time units are not errors at all and never surface here (see the `report`
//! and `metric` modules for how those are absorbed).

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for report processing operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while loading inputs or rendering outputs.
#[derive(Error, Debug)]
pub enum ReportError {
    /// I/O operation failed (file read, write, or directory creation).
    #[error("I/O error for '{path}': {source}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A benchmark report file could not be parsed as JSON.
    #[error("failed to parse benchmark report '{path}': {source}")]
    ReportFormat {
        /// The report file path
        path: PathBuf,
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// The frameworks-info config could not be parsed.
    #[error("failed to parse frameworks info '{path}': {message}")]
    ConfigFormat {
        /// The config file path
        path: PathBuf,
        /// The underlying parse error message
        message: String,
    },

    /// A report references a framework id that the frameworks-info config
    /// does not know about. There is no sane fallback display name, so this
    /// is a fatal configuration error.
    #[error("framework '{id}' is not present in the frameworks info config")]
    UnknownFramework {
        /// The framework identifier from the report's context block
        id: String,
    },

    /// A classified benchmark entry is missing its `entities` counter.
    #[error("benchmark entry '{name}' has no 'entities' counter")]
    MissingEntities {
        /// The benchmark entry name
        name: String,
    },

    /// Chart rendering failed.
    #[error("failed to render chart '{path}': {message}")]
    Render {
        /// The output image path
        path: PathBuf,
        /// The backend error message
        message: String,
    },
}

impl ReportError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_framework_display() {
        let err = ReportError::UnknownFramework {
            id: "entt".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("entt"));
        assert!(msg.contains("frameworks info"));
    }

    #[test]
    fn test_io_helper_keeps_path() {
        let err = ReportError::io(
            "reports/entt.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(format!("{}", err).contains("reports/entt.json"));
    }
}
