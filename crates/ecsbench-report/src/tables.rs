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

//! Human-readable result tables.
//!
//! Rows are labeled entity-count buckets, columns are framework display
//! names, cells are seconds formatted to four decimals. Only the four fixed
//! buckets get rows; measurements at other entity counts stay in the plot
//! series but produce no table row. Row order is first-seen order across the
//! detail records, de-duplicated.

use crate::metric::MetricKind;
use crate::series::FrameworkResult;

/// The fixed entity-count buckets that get table rows.
pub const ENTITY_BUCKETS: [u64; 4] = [10_000, 100_000, 500_000, 1_000_000];

/// Aligned bucket token used inside row labels. Tokens are four characters
/// wide so the labels line up the way the original tables did.
fn bucket_token(entities: u64) -> Option<&'static str> {
    match entities {
        10_000 => Some(" 10k"),
        100_000 => Some("100k"),
        500_000 => Some("500k"),
        1_000_000 => Some("  1M"),
        _ => None,
    }
}

/// Row label for a (metric kind, entity bucket) pair, or `None` for counts
/// outside the fixed bucket set.
pub fn bucket_label(kind: MetricKind, entities: u64) -> Option<String> {
    let token = bucket_token(entities)?;
    let label = match kind {
        MetricKind::CreateEntities => {
            format!("Create {} entities with two Components", token)
        }
        MetricKind::DestroyEntities => {
            format!("Destroy {} entities with two Components", token)
        }
        MetricKind::UnpackOneComponent => {
            format!("Unpack one Component in {} entities", token)
        }
        MetricKind::UnpackTwoComponents
        | MetricKind::UnpackTwoComponentsFromMixedEntities => {
            format!("Unpack two Components in {} entities", token)
        }
        MetricKind::UnpackThreeComponentsFromMixedEntities => {
            format!("Unpack three Components in {} entities", token)
        }
        MetricKind::SystemsUpdate => format!("Update {} entities with 2 Systems", token),
        MetricKind::ComplexSystemsUpdate => {
            format!("Update {} entities with 3 Systems", token)
        }
    };
    Some(label)
}

/// One rendered row: bucket label plus one cell per framework column.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Bucket label.
    pub label: String,
    /// One formatted cell per column; `None` when the framework has no
    /// measurement for this bucket.
    pub cells: Vec<Option<String>>,
}

/// A two-axis result table for one metric kind.
#[derive(Debug, Clone)]
pub struct MetricTable {
    /// The metric this table describes.
    pub kind: MetricKind,
    /// Framework display names, one per column.
    pub columns: Vec<String>,
    /// Rows in first-seen label order.
    pub rows: Vec<TableRow>,
}

impl MetricTable {
    /// Render the table as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str("|   |");
        for column in &self.columns {
            md.push_str(&format!(" {} |", column));
        }
        md.push('\n');

        md.push_str("|---|");
        for _ in &self.columns {
            md.push_str("---|");
        }
        md.push('\n');

        for row in &self.rows {
            md.push_str(&format!("| {} |", row.label));
            for cell in &row.cells {
                md.push_str(&format!(" {} |", cell.as_deref().unwrap_or("")));
            }
            md.push('\n');
        }

        md
    }
}

/// Format a cell for one measurement: four-decimal seconds, or `n/a` for
/// records whose time unit was unsupported. Never renders an unusable
/// record as `0.0000s`.
fn format_cell(time_s: Option<f64>) -> String {
    match time_s {
        Some(s) => format!("{:.4}s", s),
        None => "n/a".to_string(),
    }
}

/// Build the table for one metric kind from the frameworks that have at
/// least one record for it.
///
/// Row labels appear in first-seen order across the iterated detail records
/// (frameworks in input order, records in report order), de-duplicated
/// preserving the first occurrence. A later measurement for an
/// already-labeled bucket overwrites the framework's cell.
pub fn metric_table(kind: MetricKind, frameworks: &[&FrameworkResult]) -> MetricTable {
    let columns: Vec<String> = frameworks.iter().map(|f| f.label.clone()).collect();

    let mut labels: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<Option<String>>> = Vec::new();

    for (col, framework) in frameworks.iter().enumerate() {
        let Some(series) = framework.metric(kind) else {
            continue;
        };
        for record in &series.details {
            let Some(label) = bucket_label(kind, record.entities) else {
                continue;
            };
            let row = match labels.iter().position(|l| *l == label) {
                Some(idx) => idx,
                None => {
                    labels.push(label);
                    rows.push(vec![None; columns.len()]);
                    rows.len() - 1
                }
            };
            rows[row][col] = Some(format_cell(record.times.map(|t| t.s)));
        }
    }

    MetricTable {
        kind,
        columns,
        rows: labels
            .into_iter()
            .zip(rows)
            .map(|(label, cells)| TableRow { label, cells })
            .collect(),
    }
}

/// The document's lead table: the SystemsUpdate metric over the four fixed
/// buckets.
pub fn summary_table(frameworks: &[&FrameworkResult]) -> MetricTable {
    metric_table(MetricKind::SystemsUpdate, frameworks)
}
