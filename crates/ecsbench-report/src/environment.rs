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

//! Run environment metadata.
//!
//! CPU figures come from the report context blocks (reports are assumed
//! homogeneous, so the last-seen report wins); OS name and total RAM are
//! probed from the host once per run via `sysinfo`.

use crate::report::ParsedReport;
use sysinfo::System;

/// Host facts that do not come from the reports.
#[derive(Debug, Clone)]
pub struct HostInfo {
    /// OS name, e.g. `Linux`.
    pub os: String,
    /// Total physical memory in bytes.
    pub total_ram_bytes: u64,
}

/// Probe the host for OS name and total RAM.
pub fn detect_host() -> HostInfo {
    let mut system = System::new();
    system.refresh_memory();
    HostInfo {
        os: System::name().unwrap_or_else(|| std::env::consts::OS.to_string()),
        total_ram_bytes: system.total_memory(),
    }
}

/// Environment summary for the generated document.
#[derive(Debug, Clone)]
pub struct RunMetadata {
    /// CPU clock speed in GHz.
    pub ghz_per_cpu: f64,
    /// CPU clock speed in MHz, as reported.
    pub mhz_per_cpu: f64,
    /// Logical CPU count.
    pub num_cpus: u32,
    /// OS name.
    pub os: String,
    /// Human-formatted total RAM, e.g. `31.26GB`.
    pub ram: String,
}

impl RunMetadata {
    /// Build run metadata from the parsed reports and host facts. The CPU
    /// figures of the last report win; an empty report list leaves them at
    /// zero.
    pub fn from_reports(reports: &[ParsedReport], host: &HostInfo) -> RunMetadata {
        let (num_cpus, mhz_per_cpu) = reports
            .last()
            .map(|r| (r.num_cpus, r.mhz_per_cpu))
            .unwrap_or((0, 0.0));

        RunMetadata {
            ghz_per_cpu: mhz_per_cpu / 1000.0,
            mhz_per_cpu,
            num_cpus,
            os: host.os.clone(),
            ram: format_bytes(host.total_ram_bytes),
        }
    }

    /// CPU summary in the `<GHz>GHz@<N>Cores` form used by the document.
    pub fn cpu_label(&self) -> String {
        format!("{:.2}GHz@{}Cores", self.ghz_per_cpu, self.num_cpus)
    }
}

/// Format a byte count with the B/KB/MB/GB/TB ladder, two decimals.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    for unit in &UNITS[..UNITS.len() - 1] {
        if value < 1024.0 {
            return format!("{:.2}{}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.2}{}", value, UNITS[UNITS.len() - 1])
}
