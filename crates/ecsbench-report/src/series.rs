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

//! Per-metric series building.
//!
//! Groups each framework's classified records by [`MetricKind`] into ordered
//! series of millisecond values keyed by entity count, keeping the full
//! detail records alongside. Duplicate (metric, entity count) measurements
//! overwrite earlier ones, so input record order matters. Series lengths may
//! differ across frameworks; nothing here interpolates or backfills.

use crate::config::FrameworksInfo;
use crate::environment::{HostInfo, RunMetadata};
use crate::error::Result;
use crate::metric::MetricKind;
use crate::report::{MeasurementRecord, ParsedReport};
use std::collections::BTreeMap;

/// Unit of the series values.
pub const SERIES_UNIT: &str = "ms";

/// One framework's data for one metric kind.
#[derive(Debug, Clone, Default)]
pub struct MetricSeries {
    /// Entity count → time in milliseconds. Records with an unusable time
    /// unit contribute no point. Iteration order is ascending entity count
    /// and duplicates have already been resolved last-write-wins.
    pub points: BTreeMap<u64, f64>,
    /// Full detail records in input order, including unusable ones.
    pub details: Vec<MeasurementRecord>,
}

impl MetricSeries {
    /// Entity counts in ascending order (the plot x-axis).
    pub fn entity_counts(&self) -> Vec<u64> {
        self.points.keys().copied().collect()
    }

    /// Millisecond values ordered by ascending entity count.
    pub fn values(&self) -> Vec<f64> {
        self.points.values().copied().collect()
    }
}

/// Everything reshaped for one framework, rebuilt from scratch per run.
#[derive(Debug, Clone)]
pub struct FrameworkResult {
    /// Framework identifier.
    pub framework: String,
    /// Display name from the frameworks-info config.
    pub label: String,
    /// Framework version, if reported.
    pub version: Option<String>,
    /// Unit of the series values.
    pub unit: &'static str,
    /// Per-metric series, keyed in metric enumeration order.
    pub series: BTreeMap<MetricKind, MetricSeries>,
}

impl FrameworkResult {
    /// The series for a metric kind, if this framework has any record for it.
    pub fn metric(&self, kind: MetricKind) -> Option<&MetricSeries> {
        self.series.get(&kind)
    }
}

/// All frameworks plus the run environment summary.
#[derive(Debug, Clone)]
pub struct RunResults {
    /// One entry per input report, in input order.
    pub frameworks: Vec<FrameworkResult>,
    /// Environment summary for the document.
    pub metadata: RunMetadata,
}

impl RunResults {
    /// Metric kinds with at least one record in any framework, in
    /// enumeration order.
    pub fn present_metrics(&self) -> Vec<MetricKind> {
        MetricKind::ALL
            .into_iter()
            .filter(|kind| self.frameworks.iter().any(|f| f.series.contains_key(kind)))
            .collect()
    }

    /// Frameworks that have at least one record for the given kind, in
    /// input order.
    pub fn frameworks_for(&self, kind: MetricKind) -> Vec<&FrameworkResult> {
        self.frameworks
            .iter()
            .filter(|f| f.series.contains_key(&kind))
            .collect()
    }
}

/// Group one parsed report's records into per-metric series.
pub fn build_framework_result(parsed: &ParsedReport, label: &str) -> FrameworkResult {
    let mut series: BTreeMap<MetricKind, MetricSeries> = BTreeMap::new();

    for record in &parsed.records {
        let entry = series.entry(record.metric).or_default();
        if let Some(times) = record.times {
            // BTreeMap insert gives both last-write-wins and ascending
            // iteration order.
            entry.points.insert(record.entities, times.ms);
        }
        entry.details.push(record.clone());
    }

    FrameworkResult {
        framework: parsed.framework.clone(),
        label: label.to_string(),
        version: parsed.version.clone(),
        unit: SERIES_UNIT,
        series,
    }
}

/// Build the full run results: one [`FrameworkResult`] per report (display
/// names resolved through the config, missing entries are fatal) plus the
/// environment metadata.
pub fn build_run_results(
    reports: &[ParsedReport],
    info: &FrameworksInfo,
    host: &HostInfo,
) -> Result<RunResults> {
    let mut frameworks = Vec::with_capacity(reports.len());
    for parsed in reports {
        let label = info.display_name(&parsed.framework)?;
        frameworks.push(build_framework_result(parsed, label));
    }

    Ok(RunResults {
        frameworks,
        metadata: RunMetadata::from_reports(reports, host),
    })
}
