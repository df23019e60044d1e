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

//! Benchmark report parsing and normalization.
//!
//! Each input file is one Google-Benchmark-style JSON report for a single
//! framework: a `context` block naming the framework and describing the CPU,
//! followed by a `benchmarks` array of raw entries. Parsing normalizes every
//! classifiable entry into a [`MeasurementRecord`] and drops the rest.
//!
//! Only the `ns` and `ms` time units are supported. Entries declaring any
//! other unit keep their raw time but get no derived time breakdown; they are
//! unusable downstream (tables render them as `n/a`, plots skip them) but
//! they are not an error.

use crate::error::{ReportError, Result};
use crate::metric::{classify, MetricKind};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Raw report file layout, as emitted by the C++ benchmark harness.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReport {
    /// Context block with framework name and CPU description.
    pub context: RawContext,
    /// Raw benchmark entries, in harness output order.
    #[serde(default)]
    pub benchmarks: Vec<RawBenchmark>,
}

/// The `context` object of a raw report.
#[derive(Debug, Clone, Deserialize)]
pub struct RawContext {
    /// Framework identifier, e.g. `entt`.
    #[serde(rename = "framework.name")]
    pub framework_name: String,
    /// Framework version string, when the harness knows it.
    #[serde(rename = "framework.version", default)]
    pub framework_version: Option<String>,
    /// Number of logical CPUs on the benchmark host.
    pub num_cpus: u32,
    /// CPU clock speed in MHz.
    pub mhz_per_cpu: f64,
}

/// One entry of the `benchmarks` array.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBenchmark {
    /// Benchmark name, e.g. `BM_entt_CreateEntities/10000`.
    pub name: String,
    /// Wall-clock time in `time_unit`.
    pub real_time: f64,
    /// Declared time unit (`ns` or `ms` are supported).
    pub time_unit: String,
    /// Entity count counter.
    #[serde(default)]
    pub entities: Option<f64>,
    /// Auxiliary counter, pass-through only.
    #[serde(default)]
    pub entities_minimal: Option<f64>,
    /// Auxiliary counter, pass-through only.
    #[serde(default)]
    pub entities_mo: Option<f64>,
    /// Auxiliary counter, pass-through only.
    #[serde(default)]
    pub entities_mdo: Option<f64>,
}

/// Derived times for one measurement. Present only when the declared unit is
/// supported; `s == ms / 1000` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBreakdown {
    /// Time in nanoseconds (truncated to whole nanoseconds).
    pub ns: i64,
    /// Time in milliseconds.
    pub ms: f64,
    /// Time in seconds.
    pub s: f64,
}

impl TimeBreakdown {
    /// Derive the breakdown from a raw time and its declared unit.
    ///
    /// Returns `None` for unsupported units, leaving the record unusable
    /// downstream rather than erroring.
    pub fn from_unit(real_time: f64, unit: &str) -> Option<TimeBreakdown> {
        match unit {
            "ns" => {
                let ns = real_time as i64;
                let ms = ns as f64 / 1_000_000.0;
                Some(TimeBreakdown {
                    ns,
                    ms,
                    s: ms / 1000.0,
                })
            }
            "ms" => {
                let ns = (real_time * 1_000_000.0) as i64;
                Some(TimeBreakdown {
                    ns,
                    ms: real_time,
                    s: real_time / 1000.0,
                })
            }
            _ => None,
        }
    }
}

/// One normalized, classified measurement.
#[derive(Debug, Clone)]
pub struct MeasurementRecord {
    /// Original benchmark entry name.
    pub name: String,
    /// Classified metric kind.
    pub metric: MetricKind,
    /// Declared time unit as found in the report.
    pub unit: String,
    /// Raw time value in the declared unit.
    pub real_time: f64,
    /// Derived times; `None` when the declared unit is unsupported.
    pub times: Option<TimeBreakdown>,
    /// Entity count for this measurement.
    pub entities: u64,
    /// Auxiliary entity count, pass-through only.
    pub entities_minimal: Option<u64>,
    /// Auxiliary entity count, pass-through only.
    pub entities_mo: Option<u64>,
    /// Auxiliary entity count, pass-through only.
    pub entities_mdo: Option<u64>,
}

/// A parsed report: context fields plus the classified records, in input
/// order. Entries whose names match no [`MetricKind`] are already gone.
#[derive(Debug, Clone)]
pub struct ParsedReport {
    /// Framework identifier from the context block.
    pub framework: String,
    /// Framework version, if the report declared one.
    pub version: Option<String>,
    /// Logical CPU count of the benchmark host.
    pub num_cpus: u32,
    /// CPU clock speed in MHz.
    pub mhz_per_cpu: f64,
    /// Normalized measurement records.
    pub records: Vec<MeasurementRecord>,
}

impl ParsedReport {
    /// Names of records whose declared time unit is unsupported.
    ///
    /// Callers may want to surface these as warnings; the records themselves
    /// stay in place and render as `n/a`.
    pub fn unusable_records(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| r.times.is_none())
            .map(|r| r.name.as_str())
            .collect()
    }
}

/// Normalize one raw report into a [`ParsedReport`].
///
/// Pure transform: no I/O. Unclassifiable entries are dropped silently; a
/// classified entry without an `entities` counter is malformed input and
/// fatal.
pub fn parse_report(raw: &RawReport) -> Result<ParsedReport> {
    let mut records = Vec::new();

    for benchmark in &raw.benchmarks {
        let Some(metric) = classify(&benchmark.name) else {
            continue;
        };

        let entities = benchmark
            .entities
            .map(|e| e as u64)
            .ok_or_else(|| ReportError::MissingEntities {
                name: benchmark.name.clone(),
            })?;

        records.push(MeasurementRecord {
            name: benchmark.name.clone(),
            metric,
            unit: benchmark.time_unit.clone(),
            real_time: benchmark.real_time,
            times: TimeBreakdown::from_unit(benchmark.real_time, &benchmark.time_unit),
            entities,
            entities_minimal: benchmark.entities_minimal.map(|e| e as u64),
            entities_mo: benchmark.entities_mo.map(|e| e as u64),
            entities_mdo: benchmark.entities_mdo.map(|e| e as u64),
        });
    }

    Ok(ParsedReport {
        framework: raw.context.framework_name.clone(),
        version: raw.context.framework_version.clone(),
        num_cpus: raw.context.num_cpus,
        mhz_per_cpu: raw.context.mhz_per_cpu,
        records,
    })
}

/// Load and normalize a report file.
pub fn load_report(path: &Path) -> Result<ParsedReport> {
    let content = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    let raw: RawReport =
        serde_json::from_str(&content).map_err(|e| ReportError::ReportFormat {
            path: path.to_path_buf(),
            source: e,
        })?;
    parse_report(&raw)
}
