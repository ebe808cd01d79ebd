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
use crate::dataset::DataFormat;
use crate::sort::Algorithm;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Instrumented benchmarking of sorting algorithms")]
pub struct Cli {
  /// Path to a JSON configuration file (defaults to ./sortlab.json if present).
  #[arg(long, global = true, env = "SORTLAB_CONFIG")]
  pub config: Option<PathBuf>,

  #[command(flatten)]
  pub overrides: Overrides,

  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  /// Generate a random dataset file.
  Generate {
    /// Output file (defaults to the configured data file).
    #[arg(long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t)]
    format: DataFormat,
  },
  /// Sort the dataset with one algorithm and save the result.
  Sort {
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Output file (defaults to <results-dir>/<algorithm>.csv).
    #[arg(long)]
    output: Option<PathBuf>,
  },
  /// Choose an algorithm from a numbered menu, then sort and save.
  Menu,
  /// Benchmark every configured algorithm once and print JSON lines.
  Bench,
  /// Benchmark, publish the results, then keep running until interrupted.
  Serve,
  /// Look up a value in the sorted dataset through the search cache.
  Search {
    #[arg(allow_hyphen_values = true)]
    target: i64,
  },
}

/// Command-line overrides of configuration keys. Unset flags leave the
/// lower layers untouched.
#[derive(Debug, Default, Clone, Args, Serialize)]
pub struct Overrides {
  /// Dataset file to read (created with random data when missing).
  #[arg(long, global = true)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data_file: Option<PathBuf>,

  /// Number of values to generate.
  #[arg(long, global = true)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub dataset_size: Option<usize>,

  #[arg(long, global = true, allow_hyphen_values = true)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub min_value: Option<i64>,

  #[arg(long, global = true, allow_hyphen_values = true)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_value: Option<i64>,

  /// Seed for the random number generator.
  #[arg(long, global = true)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub seed: Option<u64>,

  /// Runs per algorithm to average over.
  #[arg(long, global = true)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub repetitions: Option<u32>,

  /// Comma-separated algorithms to benchmark.
  /// Example: --algorithms quick,merge,radix
  #[arg(long, global = true, value_enum, value_delimiter = ',')]
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub algorithms: Vec<Algorithm>,

  #[arg(long, global = true)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub results_dir: Option<PathBuf>,

  #[arg(long, global = true)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cache_file: Option<PathBuf>,

  /// Prometheus textfile to write benchmark gauges to.
  #[arg(long, global = true)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub metrics_file: Option<PathBuf>,

  #[arg(long, global = true)]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub heartbeat_secs: Option<u64>,
}
