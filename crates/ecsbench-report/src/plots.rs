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

//! PNG line charts, one per metric kind.
//!
//! X axis is the entity count (all counts present in the series, not just
//! the table buckets), y axis is the duration in the series unit on a log
//! scale, one line per framework. Rendering consumes already-built series
//! and never regroups data.

use crate::error::{ReportError, Result};
use crate::metric::MetricKind;
use crate::series::{FrameworkResult, RunResults, SERIES_UNIT};
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Line palette, cycled per framework.
const PALETTE: [RGBColor; 8] = [
    RGBColor(231, 76, 60),   // red
    RGBColor(52, 152, 219),  // blue
    RGBColor(46, 204, 113),  // emerald
    RGBColor(230, 160, 0),   // amber
    RGBColor(155, 89, 182),  // purple
    RGBColor(26, 188, 156),  // teal
    RGBColor(52, 73, 94),    // slate
    RGBColor(243, 104, 224), // pink
];

/// One framework's polyline for a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Legend label (framework display name).
    pub label: String,
    /// (entity count, duration) points, ascending x.
    pub points: Vec<(f64, f64)>,
}

/// Collect the drawable series for a metric kind.
///
/// Non-positive durations cannot sit on a log axis and are skipped, as are
/// records with an unusable time unit (those never reached the series).
/// Frameworks left with no points contribute no line.
pub fn chart_series(kind: MetricKind, frameworks: &[&FrameworkResult]) -> Vec<ChartSeries> {
    frameworks
        .iter()
        .filter_map(|framework| {
            let series = framework.metric(kind)?;
            let points: Vec<(f64, f64)> = series
                .points
                .iter()
                .filter(|(_, &ms)| ms > 0.0)
                .map(|(&entities, &ms)| (entities as f64, ms))
                .collect();
            if points.is_empty() {
                None
            } else {
                Some(ChartSeries {
                    label: framework.label.clone(),
                    points,
                })
            }
        })
        .collect()
}

/// Axis bounds over all series, padded so degenerate ranges still draw.
pub fn axis_bounds(series: &[ChartSeries]) -> Option<((f64, f64), (f64, f64))> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for s in series {
        for &(x, y) in &s.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    if !x_min.is_finite() {
        return None;
    }
    if x_min == x_max {
        x_max = x_min + 1.0;
    }
    if y_min == y_max {
        y_max = y_min * 10.0;
    }
    Some(((x_min, x_max), (y_min, y_max)))
}

/// Render one metric kind's chart to `output`.
///
/// Does nothing (and writes nothing) when no framework has a usable point
/// for the kind.
pub fn render_metric_chart(
    kind: MetricKind,
    frameworks: &[&FrameworkResult],
    output: &Path,
) -> Result<()> {
    let series = chart_series(kind, frameworks);
    let Some(((x_min, x_max), (y_min, y_max))) = axis_bounds(&series) else {
        return Ok(());
    };

    let err = |e: String| ReportError::Render {
        path: output.to_path_buf(),
        message: e,
    };

    let root = BitMapBackend::new(output, (900, 540)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| err(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(kind.as_str(), ("sans-serif", 24))
        .margin(14)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(x_min..x_max, (y_min..y_max).log_scale())
        .map_err(|e| err(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("entities")
        .y_desc(format!("time ({})", SERIES_UNIT))
        .draw()
        .map_err(|e| err(e.to_string()))?;

    for (i, s) in series.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        chart
            .draw_series(LineSeries::new(s.points.clone(), color.stroke_width(2)))
            .map_err(|e| err(e.to_string()))?
            .label(s.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK.mix(0.3))
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(|e| err(e.to_string()))?;

    root.present().map_err(|e| err(e.to_string()))?;
    Ok(())
}

/// Render one chart per present metric kind into `output_dir`, named
/// `<MetricKind>.png`. Returns the written paths.
pub fn render_all_charts(results: &RunResults, output_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir).map_err(|e| ReportError::io(output_dir, e))?;

    let mut written = Vec::new();
    for kind in results.present_metrics() {
        let frameworks = results.frameworks_for(kind);
        if chart_series(kind, &frameworks).is_empty() {
            continue;
        }
        let output = output_dir.join(kind.image_filename());
        render_metric_chart(kind, &frameworks, &output)?;
        written.push(output);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{parse_report, RawBenchmark, RawContext, RawReport};
    use crate::series::build_framework_result;

    fn entry(name: &str, real_time: f64, unit: &str, entities: f64) -> RawBenchmark {
        RawBenchmark {
            name: name.to_string(),
            real_time,
            time_unit: unit.to_string(),
            entities: Some(entities),
            entities_minimal: None,
            entities_mo: None,
            entities_mdo: None,
        }
    }

    fn framework(id: &str, label: &str, benchmarks: Vec<RawBenchmark>) -> FrameworkResult {
        let parsed = parse_report(&RawReport {
            context: RawContext {
                framework_name: id.to_string(),
                framework_version: None,
                num_cpus: 8,
                mhz_per_cpu: 3000.0,
            },
            benchmarks,
        })
        .unwrap();
        build_framework_result(&parsed, label)
    }

    #[test]
    fn test_chart_series_includes_out_of_bucket_counts() {
        let a = framework(
            "entt",
            "EnTT",
            vec![
                entry("BM_entt_CreateEntities/10000", 1.0, "ms", 10000.0),
                entry("BM_entt_CreateEntities/250000", 2.0, "ms", 250000.0),
            ],
        );
        let series = chart_series(MetricKind::CreateEntities, &[&a]);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].points, vec![(10000.0, 1.0), (250000.0, 2.0)]);
    }

    #[test]
    fn test_chart_series_skips_unusable_records() {
        let a = framework(
            "entt",
            "EnTT",
            vec![entry("BM_entt_CreateEntities/10000", 1.0, "us", 10000.0)],
        );
        assert!(chart_series(MetricKind::CreateEntities, &[&a]).is_empty());
    }

    #[test]
    fn test_axis_bounds_padding() {
        let series = vec![ChartSeries {
            label: "EnTT".to_string(),
            points: vec![(10000.0, 1.0)],
        }];
        let ((x_min, x_max), (y_min, y_max)) = axis_bounds(&series).unwrap();
        assert_eq!(x_min, 10000.0);
        assert!(x_max > x_min);
        assert_eq!(y_min, 1.0);
        assert!(y_max > y_min);
    }

    #[test]
    fn test_axis_bounds_empty() {
        assert_eq!(axis_bounds(&[]), None);
    }

    #[test]
    fn test_render_skips_metric_with_no_usable_points() {
        let a = framework(
            "entt",
            "EnTT",
            vec![entry("BM_entt_CreateEntities/10000", 1.0, "us", 10000.0)],
        );
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("CreateEntities.png");
        render_metric_chart(MetricKind::CreateEntities, &[&a], &output).unwrap();
        assert!(!output.exists());
    }
}
