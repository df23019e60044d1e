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

//! Benchmark metric kinds and name classification.
//!
//! Benchmark entries carry names of the form `BM_<framework>_<Metric>/<n>`.
//! Classification tests the name against a fixed, ordered table of anchored
//! patterns; the first match wins and a name matching no pattern is simply
//! not a metric we report on (the entry is dropped, not an error).

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// The fixed set of benchmark categories reported on.
///
/// The enum order is also the classification order and the order in which
/// metric sections appear in the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricKind {
    /// Create entities with two components.
    CreateEntities,
    /// Destroy entities with two components.
    DestroyEntities,
    /// Unpack one component per entity.
    UnpackOneComponent,
    /// Unpack two components per entity.
    UnpackTwoComponents,
    /// Unpack two components from a mixed entity set.
    UnpackTwoComponentsFromMixedEntities,
    /// Unpack three components from a mixed entity set.
    UnpackThreeComponentsFromMixedEntities,
    /// Run two systems over all entities.
    SystemsUpdate,
    /// Run three systems over all entities.
    ComplexSystemsUpdate,
}

impl MetricKind {
    /// All metric kinds in classification order.
    pub const ALL: [MetricKind; 8] = [
        MetricKind::CreateEntities,
        MetricKind::DestroyEntities,
        MetricKind::UnpackOneComponent,
        MetricKind::UnpackTwoComponents,
        MetricKind::UnpackTwoComponentsFromMixedEntities,
        MetricKind::UnpackThreeComponentsFromMixedEntities,
        MetricKind::SystemsUpdate,
        MetricKind::ComplexSystemsUpdate,
    ];

    /// Canonical name, as it appears in benchmark entry names and image
    /// filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::CreateEntities => "CreateEntities",
            MetricKind::DestroyEntities => "DestroyEntities",
            MetricKind::UnpackOneComponent => "UnpackOneComponent",
            MetricKind::UnpackTwoComponents => "UnpackTwoComponents",
            MetricKind::UnpackTwoComponentsFromMixedEntities => {
                "UnpackTwoComponentsFromMixedEntities"
            }
            MetricKind::UnpackThreeComponentsFromMixedEntities => {
                "UnpackThreeComponentsFromMixedEntities"
            }
            MetricKind::SystemsUpdate => "SystemsUpdate",
            MetricKind::ComplexSystemsUpdate => "ComplexSystemsUpdate",
        }
    }

    /// Image filename for this metric's plot, e.g. `SystemsUpdate.png`.
    pub fn image_filename(&self) -> String {
        format!("{}.png", self.as_str())
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered (pattern, kind) table. The trailing `/` in each pattern is what
/// keeps `UnpackTwoComponents/` from matching a name whose true tail is
/// `UnpackTwoComponentsFromMixedEntities/`.
static PATTERNS: Lazy<Vec<(Regex, MetricKind)>> = Lazy::new(|| {
    MetricKind::ALL
        .iter()
        .map(|&kind| {
            let pattern = format!(r"^BM_(.*)_{}/", kind.as_str());
            let re = Regex::new(&pattern).expect("metric pattern is valid");
            (re, kind)
        })
        .collect()
});

/// Classify a benchmark entry name into a [`MetricKind`].
///
/// Returns `None` for names that match no known metric; such entries are
/// excluded from all downstream grouping. Classification is a pure function
/// of the name string.
pub fn classify(name: &str) -> Option<MetricKind> {
    PATTERNS
        .iter()
        .find(|(re, _)| re.is_match(name))
        .map(|&(_, kind)| kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_all_kinds() {
        for kind in MetricKind::ALL {
            let name = format!("BM_entt_{}/10000", kind.as_str());
            assert_eq!(classify(&name), Some(kind), "name: {}", name);
        }
    }

    #[test]
    fn test_classify_prefix_disambiguation() {
        // "UnpackTwoComponents" is a textual prefix of the mixed-entities
        // variant; the trailing slash must keep them apart.
        assert_eq!(
            classify("BM_X_UnpackTwoComponentsFromMixedEntities/100000"),
            Some(MetricKind::UnpackTwoComponentsFromMixedEntities)
        );
        assert_eq!(
            classify("BM_X_UnpackTwoComponents/100000"),
            Some(MetricKind::UnpackTwoComponents)
        );
    }

    #[test]
    fn test_classify_unknown_names() {
        assert_eq!(classify("BM_entt_Iterate/10000"), None);
        assert_eq!(classify("CreateEntities/10000"), None);
        assert_eq!(classify("BM_entt_CreateEntities"), None); // no slash
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_classify_is_stable() {
        let name = "BM_flecs_SystemsUpdate/500000";
        let first = classify(name);
        for _ in 0..10 {
            assert_eq!(classify(name), first);
        }
    }

    #[test]
    fn test_image_filename() {
        assert_eq!(
            MetricKind::SystemsUpdate.image_filename(),
            "SystemsUpdate.png"
        );
    }
}
