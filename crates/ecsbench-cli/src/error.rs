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

//! Error types for the CLI layer.

use ecsbench_report::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the terminal. Input and rendering failures come from
/// the report library; the CLI only adds its own directory handling.
#[derive(Error, Debug)]
pub enum CliError {
    /// Report processing failed.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// The output directory could not be created.
    #[error("cannot create output directory '{path}': {source}")]
    OutputDir {
        /// The directory path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
