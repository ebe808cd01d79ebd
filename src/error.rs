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
use crate::sort::Algorithm;
use std::path::PathBuf;
use thiserror::Error;

/// Contract violations detected at the sort strategy boundary (src/sort).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
  #[error("{algorithm} only accepts non-negative values, found {value}")]
  NegativeValue { algorithm: Algorithm, value: i64 },

  #[error("{algorithm} needs {max} + 1 tally slots, more than the limit of {limit}")]
  RangeTooLarge {
    algorithm: Algorithm,
    max: i64,
    limit: usize,
  },
}

/// Errors related to benchmark execution (src/benchmark.rs).
#[derive(Error, Debug)]
pub enum BenchmarkError {
  #[error("Repetitions must be at least 1")]
  ZeroRepetitions,

  #[error("Sort failed during benchmark")]
  Sort(#[from] SortError),

  #[error("Failed to publish result for {algorithm}")]
  Publish {
    algorithm: String,
    #[source]
    source: SinkError,
  },
}

/// Errors related to loading and saving datasets (src/dataset.rs).
#[derive(Error, Debug)]
pub enum DatasetError {
  #[error("Failed to read dataset file: {path}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to write dataset file: {path}")]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Invalid integer '{token}' on line {line}")]
  ParseInt {
    token: String,
    line: usize,
    #[source]
    source: std::num::ParseIntError,
  },

  #[error("Invalid value range: min {min} is greater than max {max}")]
  InvalidRange { min: i64, max: i64 },
}

/// Errors raised by metrics sinks (src/metrics.rs).
#[derive(Error, Debug)]
pub enum SinkError {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON serialization error: {0}")]
  Json(#[from] serde_json::Error),
}

/// Errors related to the search cache (src/search.rs).
#[derive(Error, Debug)]
pub enum CacheError {
  #[error("Failed to read cache file: {path}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to write cache file: {path}")]
  Write {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Malformed cache file: {path}")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("Failed to serialize cache")]
  Serialize(#[source] serde_json::Error),
}

/// Errors related to configuration resolution (src/config.rs).
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Failed to extract configuration")]
  Extract(#[from] Box<figment::Error>),

  #[error("Configured file does not exist: {0}")]
  MissingFile(PathBuf),

  #[error("repetitions must be at least 1")]
  ZeroRepetitions,

  #[error("min_value {min} is greater than max_value {max}")]
  InvalidRange { min: i64, max: i64 },

  #[error("heartbeat_secs must be at least 1")]
  ZeroHeartbeat,

  #[error("No algorithms configured")]
  NoAlgorithms,
}
