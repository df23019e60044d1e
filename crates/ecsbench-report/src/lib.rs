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

//! ECS Benchmark Report Toolkit
//!
//! Reshapes JSON benchmark reports from the C++ microbenchmark harness into
//! per-metric comparison artifacts: line charts across entity-count scales
//! and a Markdown results document.
//!
//! The whole run is one linear, single-threaded pass with no state kept
//! between invocations:
//!
//! ```text
//! raw reports → normalized records → per-metric series → tables/plots → RESULTS.md
//! ```
//!
//! # Modules
//!
//! - [`report`]: report parsing and record normalization
//! - [`metric`]: metric kinds and benchmark name classification
//! - [`series`]: per-framework, per-metric series building
//! - [`tables`]: bucket-labeled Markdown result tables
//! - [`plots`]: PNG line charts via plotters
//! - [`document`]: template substitution for RESULTS.md
//! - [`config`]: frameworks-info configuration
//! - [`environment`]: run environment metadata
//!
//! # Example
//!
//! ```no_run
//! use ecsbench_report::{config::FrameworksInfo, environment, report, series};
//! use std::path::Path;
//!
//! # fn main() -> ecsbench_report::Result<()> {
//! let info = FrameworksInfo::load(Path::new("info.yml"))?;
//! let reports = vec![report::load_report(Path::new("reports/entt.json"))?];
//! let host = environment::detect_host();
//! let results = series::build_run_results(&reports, &info, &host)?;
//! ecsbench_report::plots::render_all_charts(&results, Path::new("reports"))?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod document;
pub mod environment;
pub mod error;
pub mod metric;
pub mod plots;
pub mod report;
pub mod series;
pub mod tables;

pub use config::{FrameworkInfo, FrameworksInfo};
pub use error::{ReportError, Result};
pub use metric::{classify, MetricKind};
pub use report::{load_report, parse_report, MeasurementRecord, ParsedReport, TimeBreakdown};
pub use series::{build_run_results, FrameworkResult, MetricSeries, RunResults};
