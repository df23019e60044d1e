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

//! RESULTS.md assembly.
//!
//! Substitutes the reshaped run data into a caller-supplied template. The
//! template text itself is a collaborator; this module only fills in the
//! placeholders:
//!
//! - `{{candidates}}` — bullet list of non-skipped framework display names
//! - `{{environment.os}}`, `{{environment.cpu}}`, `{{environment.ram}}`
//! - `{{summary.table}}`, `{{summary.figure}}` — the SystemsUpdate lead table
//!   and its plot image
//! - `{{plots}}` — one table + image section per metric kind present

use crate::config::FrameworksInfo;
use crate::error::{ReportError, Result};
use crate::metric::MetricKind;
use crate::series::RunResults;
use crate::tables::{metric_table, summary_table};
use std::fs;
use std::path::{Path, PathBuf};

/// Join an image directory and filename without doubling separators.
fn image_src(img_dir: &str, filename: &str) -> String {
    let dir = img_dir.trim_end_matches('/');
    if dir.is_empty() {
        filename.to_string()
    } else {
        format!("{}/{}", dir, filename)
    }
}

fn figure(alt: &str, src: &str) -> String {
    format!("![{}]({})", alt, src)
}

/// Fill the template with the run's candidate list, environment summary,
/// lead table and per-metric sections.
///
/// Metric kinds entirely absent from the input produce no section and no
/// placeholder residue.
pub fn render_document(
    template: &str,
    info: &FrameworksInfo,
    results: &RunResults,
    img_dir: &str,
) -> String {
    let candidates = info
        .candidates()
        .map(|c| format!("- {}", c.name))
        .collect::<Vec<_>>()
        .join("\n");

    let summary_frameworks = results.frameworks_for(MetricKind::SystemsUpdate);
    let (summary_md, summary_figure) = if summary_frameworks.is_empty() {
        (String::new(), String::new())
    } else {
        (
            summary_table(&summary_frameworks).to_markdown(),
            figure(
                "Summary SystemsUpdate Plot",
                &image_src(img_dir, &MetricKind::SystemsUpdate.image_filename()),
            ),
        )
    };

    let mut plots = String::new();
    for kind in results.present_metrics() {
        let frameworks = results.frameworks_for(kind);
        let table = metric_table(kind, &frameworks);
        plots.push_str(&format!("### {}\n\n", kind));
        plots.push_str(&table.to_markdown());
        plots.push('\n');
        plots.push_str(&figure(
            &format!("{} Plot", kind),
            &image_src(img_dir, &kind.image_filename()),
        ));
        plots.push_str("\n\n");
    }

    template
        .replace("{{candidates}}", &candidates)
        .replace("{{environment.os}}", &results.metadata.os)
        .replace("{{environment.cpu}}", &results.metadata.cpu_label())
        .replace("{{environment.ram}}", &results.metadata.ram)
        .replace("{{summary.table}}", &summary_md)
        .replace("{{summary.figure}}", &summary_figure)
        .replace("{{plots}}", plots.trim_end())
}

/// Render the document and write it as `RESULTS.md` under `output_dir`.
/// Returns the written path.
pub fn write_document(
    template: &str,
    info: &FrameworksInfo,
    results: &RunResults,
    img_dir: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let document = render_document(template, info, results, img_dir);
    let path = output_dir.join("RESULTS.md");
    fs::write(&path, document).map_err(|e| ReportError::io(&path, e))?;
    Ok(path)
}
