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

//! End-to-end tests for the ecsbench CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn ecsbench_cmd() -> Command {
    Command::cargo_bin("ecsbench").expect("Failed to find ecsbench binary")
}

const INFO_JSON: &str = r#"{
  "frameworks": {
    "entt": {"name": "EnTT"},
    "flecs": {"name": "Flecs"},
    "pico": {"name": "PicoECS", "skip_candidate": true}
  }
}"#;

fn report_json(framework: &str, unit: &str) -> String {
    format!(
        r#"{{
          "context": {{
            "framework.name": "{framework}",
            "framework.version": "3.12.0",
            "num_cpus": 8,
            "mhz_per_cpu": 3200
          }},
          "benchmarks": [
            {{
              "name": "BM_{framework}_SystemsUpdate/10000",
              "real_time": 1500,
              "time_unit": "{unit}",
              "entities": 10000
            }},
            {{
              "name": "BM_{framework}_CreateEntities/10000",
              "real_time": 500,
              "time_unit": "ns",
              "entities": 10000
            }},
            {{
              "name": "BM_{framework}_Unrelated/10000",
              "real_time": 1,
              "time_unit": "ns",
              "entities": 10000
            }}
          ]
        }}"#
    )
}

/// Write the config and one report per framework into a temp dir.
fn setup(frameworks: &[(&str, &str)]) -> (TempDir, PathBuf, Vec<PathBuf>) {
    let dir = tempdir().expect("Failed to create temp dir");
    let info = dir.path().join("info.json");
    fs::write(&info, INFO_JSON).expect("Failed to write info.json");

    let mut reports = Vec::new();
    for (framework, unit) in frameworks {
        let path = dir.path().join(format!("{}.json", framework));
        fs::write(&path, report_json(framework, unit)).expect("Failed to write report");
        reports.push(path);
    }
    (dir, info, reports)
}

fn run_results_md(info: &Path, out_dir: &Path, reports: &[PathBuf]) -> assert_cmd::assert::Assert {
    let mut cmd = ecsbench_cmd();
    cmd.arg("gen-results-md")
        .arg("-i")
        .arg(info)
        .arg("--reports-dir")
        .arg(out_dir)
        .arg("--img-dir")
        .arg("img/");
    for report in reports {
        cmd.arg(report);
    }
    cmd.assert()
}

#[test]
fn test_gen_results_md_writes_document() {
    let (dir, info, reports) = setup(&[("entt", "ms"), ("flecs", "ms")]);
    let out_dir = dir.path().join("out");

    run_results_md(&info, &out_dir, &reports).success();

    let content = fs::read_to_string(out_dir.join("RESULTS.md")).unwrap();
    assert!(content.contains("- EnTT"));
    assert!(content.contains("- Flecs"));
    assert!(content.contains("3.20GHz@8Cores"));
    // 1500 ms → 1.5000s in the SystemsUpdate lead table.
    assert!(content.contains("Update  10k entities with 2 Systems"));
    assert!(content.contains("1.5000s"));
    assert!(content.contains("![Summary SystemsUpdate Plot](img/SystemsUpdate.png)"));
    assert!(content.contains("### CreateEntities"));
    // Entries with unclassifiable names leave no trace.
    assert!(!content.contains("Unrelated"));
}

#[test]
fn test_gen_results_md_filters_skipped_candidates() {
    let (dir, info, reports) = setup(&[("entt", "ms"), ("pico", "ms")]);
    let out_dir = dir.path().join("out");

    run_results_md(&info, &out_dir, &reports).success();

    let content = fs::read_to_string(out_dir.join("RESULTS.md")).unwrap();
    assert!(!content.contains("- PicoECS"));
    // Skipped candidates still get table columns.
    assert!(content.contains("PicoECS |"));
}

#[test]
fn test_unsupported_unit_warns_but_succeeds() {
    let (dir, info, reports) = setup(&[("entt", "us")]);
    let out_dir = dir.path().join("out");

    run_results_md(&info, &out_dir, &reports)
        .success()
        .stderr(predicate::str::contains("unsupported time unit"));

    let content = fs::read_to_string(out_dir.join("RESULTS.md")).unwrap();
    assert!(content.contains("n/a"));
}

#[test]
fn test_unknown_framework_is_fatal() {
    let (dir, info, _) = setup(&[]);
    let report = dir.path().join("mystery.json");
    fs::write(&report, report_json("mystery", "ms")).unwrap();
    let out_dir = dir.path().join("out");

    run_results_md(&info, &out_dir, &[report])
        .failure()
        .stderr(predicate::str::contains("mystery"));
    assert!(!out_dir.join("RESULTS.md").exists());
}

#[test]
fn test_missing_info_file_is_fatal() {
    let (dir, _, reports) = setup(&[("entt", "ms")]);
    let out_dir = dir.path().join("out");

    run_results_md(&dir.path().join("nope.yml"), &out_dir, &reports).failure();
}

#[test]
fn test_malformed_report_is_fatal() {
    let (dir, info, _) = setup(&[]);
    let report = dir.path().join("broken.json");
    fs::write(&report, "{ not json").unwrap();
    let out_dir = dir.path().join("out");

    run_results_md(&info, &out_dir, &[report]).failure();
}

#[test]
fn test_gen_plots_with_no_usable_points_writes_nothing() {
    // Every entry declares an unsupported unit, so no chart gets written,
    // but the run itself succeeds.
    let dir = tempdir().unwrap();
    let info = dir.path().join("info.json");
    fs::write(&info, INFO_JSON).unwrap();
    let report = dir.path().join("entt.json");
    fs::write(
        &report,
        r#"{
          "context": {"framework.name": "entt", "num_cpus": 8, "mhz_per_cpu": 3200},
          "benchmarks": [
            {"name": "BM_entt_SystemsUpdate/10000", "real_time": 1, "time_unit": "us", "entities": 10000}
          ]
        }"#,
    )
    .unwrap();
    let out_dir = dir.path().join("out");

    ecsbench_cmd()
        .arg("gen-plots")
        .arg("-i")
        .arg(&info)
        .arg("--reports-dir")
        .arg(&out_dir)
        .arg(&report)
        .assert()
        .success();

    assert!(!out_dir.join("SystemsUpdate.png").exists());
}
