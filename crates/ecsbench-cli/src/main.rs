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

//! ECS benchmark report generator command-line interface.

use clap::Parser;
use ecsbench_cli::cli::Commands;
use std::process::ExitCode;

/// Generate benchmark graphs and RESULTS.md from benchmark reports
///
/// # Examples
///
/// ```bash
/// # Plot one PNG per metric kind
/// ecsbench gen-plots -i info.yml --reports-dir reports/ reports/*.json
///
/// # Generate the Markdown results document
/// ecsbench gen-results-md -i info.yml --reports-dir reports/ --img-dir img/ reports/*.json
/// ```
#[derive(Parser)]
#[command(name = "ecsbench")]
#[command(author, version, about = "Generate benchmark graphs and RESULTS.md from benchmark reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
