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

//! CLI library for the ECS benchmark report generator.
//!
//! Two subcommands drive the whole pipeline:
//!
//! - **gen-plots**: read report files, write one PNG line chart per metric
//!   kind into the reports directory
//! - **gen-results-md**: read report files, write RESULTS.md (candidate
//!   list, environment summary, lead table, one table + image per metric)
//!
//! Both take the frameworks-info config via `-i/--info` and the output
//! location via `--reports-dir`.

pub mod cli;
pub mod error;
