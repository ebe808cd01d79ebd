// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Sortlab
//!
//! `sortlab` is an instrumented benchmarking harness for in-memory sorting
//! algorithms. It runs a fixed battery of sorts over the same dataset, counts
//! the comparisons and element movements each one performs, times them, and
//! publishes the averages.
//!
//! This crate contains the library behind the `sortlab` CLI. The core
//! modules (`sort`, `benchmark`) do no I/O and can be used independently.
//!
//! ## Core Modules
//!
//! * [`sort`]: The [`sort::Algorithm`] strategies and the [`sort::SortOutcome`]
//!   they return, with a uniform comparison/swap accounting convention.
//! * [`benchmark`]: Repeats a strategy over pristine copies of a dataset and
//!   averages time and counts; `run_suite` drives a whole session.
//! * [`metrics`]: The [`metrics::MetricsSink`] trait and its JSON-lines,
//!   Prometheus textfile and in-memory implementations.
//! * [`dataset`]: Generates, parses, loads and saves integer datasets.
//! * [`search`]: Binary search memoized through a durable cache.
//! * [`config`]: Layered `figment` configuration (defaults, JSON file,
//!   `SORTLAB_*` environment, CLI flags).
//! * [`cli`]: Defines the `clap`-based command-line interface.
//! * [`session`]: The command implementations used by the binary.
//! * [`error`]: Defines the custom error types for the library.
//! * [`logging`]: Provides the `setup_tracing` utility.

pub mod benchmark;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod search;
pub mod session;
pub mod sort;
