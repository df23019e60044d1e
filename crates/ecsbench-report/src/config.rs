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

//! Frameworks-info configuration.
//!
//! Maps framework identifiers to display metadata. Supplied by the caller as
//! JSON or YAML; insertion order is preserved and drives the candidate list
//! order in the generated document.

use crate::error::{ReportError, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Display metadata for one framework.
#[derive(Debug, Clone, Deserialize)]
pub struct FrameworkInfo {
    /// Human-readable display name, used for table columns and plot legends.
    pub name: String,
    /// When set, the framework is left out of the document's candidate list.
    /// It still gets table columns and plot lines.
    #[serde(default)]
    pub skip_candidate: bool,
}

/// The frameworks-info config: framework id → display metadata, in insertion
/// order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrameworksInfo {
    /// All known frameworks.
    pub frameworks: IndexMap<String, FrameworkInfo>,
}

impl FrameworksInfo {
    /// Load the config from a `.json` or YAML file.
    pub fn load(path: &Path) -> Result<FrameworksInfo> {
        let content = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            serde_json::from_str(&content).map_err(|e| ReportError::ConfigFormat {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        } else {
            serde_yaml::from_str(&content).map_err(|e| ReportError::ConfigFormat {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
    }

    /// Display name for a framework id. Missing ids are a fatal
    /// configuration error, never silently defaulted.
    pub fn display_name(&self, id: &str) -> Result<&str> {
        self.frameworks
            .get(id)
            .map(|info| info.name.as_str())
            .ok_or_else(|| ReportError::UnknownFramework { id: id.to_string() })
    }

    /// Candidate entries for the document, in insertion order, minus the
    /// `skip_candidate` ones.
    pub fn candidates(&self) -> impl Iterator<Item = &FrameworkInfo> {
        self.frameworks.values().filter(|info| !info.skip_candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INFO_JSON: &str = r#"{
      "frameworks": {
        "entt": {"name": "EnTT"},
        "flecs": {"name": "Flecs"},
        "pico": {"name": "PicoECS", "skip_candidate": true}
      }
    }"#;

    const INFO_YAML: &str = "
frameworks:
  entt:
    name: EnTT
  flecs:
    name: Flecs
  pico:
    name: PicoECS
    skip_candidate: true
";

    fn write_temp(name: &str, content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_json() {
        let (_dir, path) = write_temp("info.json", INFO_JSON);
        let info = FrameworksInfo::load(&path).unwrap();
        assert_eq!(info.display_name("entt").unwrap(), "EnTT");
        assert_eq!(info.frameworks.len(), 3);
    }

    #[test]
    fn test_load_yaml() {
        let (_dir, path) = write_temp("info.yml", INFO_YAML);
        let info = FrameworksInfo::load(&path).unwrap();
        assert_eq!(info.display_name("flecs").unwrap(), "Flecs");
    }

    #[test]
    fn test_candidates_preserve_order_and_skip() {
        let (_dir, path) = write_temp("info.json", INFO_JSON);
        let info = FrameworksInfo::load(&path).unwrap();
        let names: Vec<_> = info.candidates().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["EnTT", "Flecs"]);
    }

    #[test]
    fn test_unknown_framework_is_fatal() {
        let (_dir, path) = write_temp("info.json", INFO_JSON);
        let info = FrameworksInfo::load(&path).unwrap();
        assert!(matches!(
            info.display_name("ginseng"),
            Err(ReportError::UnknownFramework { .. })
        ));
    }

    #[test]
    fn test_malformed_config_is_fatal() {
        let (_dir, path) = write_temp("info.json", "{ nope");
        assert!(FrameworksInfo::load(&path).is_err());
    }
}
