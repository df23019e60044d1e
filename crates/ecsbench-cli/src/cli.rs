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

//! CLI command definitions and execution.

use crate::error::CliError;
use clap::{Args, Subcommand};
use colored::Colorize;
use ecsbench_report::config::FrameworksInfo;
use ecsbench_report::series::RunResults;
use ecsbench_report::{document, environment, plots, report, series};
use std::path::PathBuf;

/// The default RESULTS.md template shipped with the CLI.
const RESULTS_TEMPLATE: &str = include_str!("../templates/RESULTS.md.tmpl");

/// Arguments shared by both subcommands.
#[derive(Args)]
pub struct CommonArgs {
    /// Frameworks info config (JSON or YAML)
    #[arg(
        short = 'i',
        long = "info",
        value_name = "FILE",
        default_value = "./info.yml"
    )]
    pub info: PathBuf,

    /// Reports/output directory
    #[arg(
        long = "reports-dir",
        value_name = "DIR",
        default_value = "./reports/"
    )]
    pub reports_dir: PathBuf,

    /// Benchmark report files produced by the harness, one per framework
    #[arg(value_name = "REPORTS", required = true)]
    pub reports: Vec<PathBuf>,
}

/// Report generation commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Plot graphs from benchmark reports
    ///
    /// Reads the report files, builds per-metric series and writes one
    /// `<MetricKind>.png` line chart per metric into the reports directory.
    GenPlots {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Generate RESULTS.md from benchmark reports
    ///
    /// Reads the report files and writes RESULTS.md into the reports
    /// directory. Plot images are assumed to exist (or to be co-produced by
    /// gen-plots) under the given images directory.
    GenResultsMd {
        #[command(flatten)]
        common: CommonArgs,

        /// Images directory referenced by the document
        #[arg(long = "img-dir", value_name = "DIR", default_value = "img/")]
        img_dir: String,
    },
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::GenPlots { common } => {
                let (_, results) = load_inputs(&common)?;
                let written = plots::render_all_charts(&results, &common.reports_dir)?;
                for path in &written {
                    println!("{} {}", "Wrote".green(), path.display());
                }
                Ok(())
            }
            Commands::GenResultsMd { common, img_dir } => {
                let (info, results) = load_inputs(&common)?;
                std::fs::create_dir_all(&common.reports_dir).map_err(|e| {
                    CliError::OutputDir {
                        path: common.reports_dir.clone(),
                        source: e,
                    }
                })?;
                let path = document::write_document(
                    RESULTS_TEMPLATE,
                    &info,
                    &results,
                    &img_dir,
                    &common.reports_dir,
                )?;
                println!("{} {}", "Wrote".green(), path.display());
                Ok(())
            }
        }
    }
}

/// Load the config and all report files, then build the run results.
///
/// Records with an unsupported time unit are not fatal; they are reported
/// on stderr and render as `n/a` downstream.
fn load_inputs(common: &CommonArgs) -> Result<(FrameworksInfo, RunResults), CliError> {
    let info = FrameworksInfo::load(&common.info)?;

    let mut reports = Vec::with_capacity(common.reports.len());
    for path in &common.reports {
        let parsed = report::load_report(path)?;
        for name in parsed.unusable_records() {
            eprintln!(
                "{} unsupported time unit for '{}'; it will render as n/a",
                "warning:".yellow(),
                name
            );
        }
        reports.push(parsed);
    }

    let host = environment::detect_host();
    let results = series::build_run_results(&reports, &info, &host)?;
    Ok((info, results))
}
