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
use crate::error::BenchmarkError;
use crate::error::SortError;
use crate::metrics::MetricsSink;
use crate::sort::Algorithm;
use serde::Deserialize;
use serde::Serialize;
use std::time::Instant;

/// Averaged measurements of one algorithm over repeated runs.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BenchmarkResult {
  pub algorithm: String,
  pub dataset_len: usize,
  pub repetitions: u32,
  pub avg_time_seconds: f64,
  pub avg_comparisons: f64,
  pub avg_swaps: f64,
}

/// Outcome of a whole benchmark session.
#[derive(Debug, Default)]
pub struct SuiteReport {
  /// One result per algorithm that completed, in run order.
  pub results: Vec<BenchmarkResult>,
  /// Algorithms whose sort rejected the dataset.
  pub failures: Vec<(Algorithm, SortError)>,
}

/// Runs `algorithm` over `dataset` `repetitions` times and averages the
/// wall-clock time and operation counts.
///
/// Each repetition sorts the same pristine `dataset`; the strategy works on
/// its own copy, so no run sees another run's output.
pub fn run(
  algorithm: Algorithm,
  dataset: &[i64],
  repetitions: u32,
) -> Result<BenchmarkResult, BenchmarkError> {
  if repetitions == 0 {
    return Err(BenchmarkError::ZeroRepetitions);
  }

  let mut total_seconds = 0.0;
  let mut total_comparisons: u128 = 0;
  let mut total_swaps: u128 = 0;

  for repetition in 1..=repetitions {
    let start = Instant::now();
    let outcome = algorithm.sort(dataset)?;
    let elapsed = start.elapsed();

    tracing::debug!(
      repetition,
      elapsed_ms = elapsed.as_secs_f64() * 1000.0,
      comparisons = outcome.comparisons(),
      swaps = outcome.swaps(),
      "Repetition finished"
    );

    total_seconds += elapsed.as_secs_f64();
    total_comparisons += u128::from(outcome.comparisons());
    total_swaps += u128::from(outcome.swaps());
  }

  let reps = f64::from(repetitions);
  Ok(BenchmarkResult {
    algorithm: algorithm.name().to_string(),
    dataset_len: dataset.len(),
    repetitions,
    avg_time_seconds: total_seconds / reps,
    avg_comparisons: total_comparisons as f64 / reps,
    avg_swaps: total_swaps as f64 / reps,
  })
}

/// Benchmarks every algorithm in `algorithms` in order and publishes each
/// result to `sink`.
///
/// An algorithm that rejects the dataset (e.g. radix sort on negative values)
/// is logged and listed in [`SuiteReport::failures`]; the rest still run. A
/// sink failure aborts the session.
pub fn run_suite(
  algorithms: &[Algorithm],
  dataset: &[i64],
  repetitions: u32,
  sink: &mut dyn MetricsSink,
) -> Result<SuiteReport, BenchmarkError> {
  if repetitions == 0 {
    return Err(BenchmarkError::ZeroRepetitions);
  }

  let span = tracing::info_span!("run_suite", size = dataset.len(), repetitions);
  let _enter = span.enter();

  tracing::info!("--- Starting Benchmark Session ---");
  let mut report = SuiteReport::default();

  for &algorithm in algorithms {
    let algo_span = tracing::info_span!("run_algorithm", algorithm = %algorithm);
    let _algo_enter = algo_span.enter();

    match run(algorithm, dataset, repetitions) {
      Ok(result) => {
        tracing::info!(
          "{}: size={}, avg time={:.2} ms, comparisons={}, swaps={}",
          result.algorithm,
          result.dataset_len,
          result.avg_time_seconds * 1000.0,
          result.avg_comparisons,
          result.avg_swaps
        );
        sink
          .record(&result)
          .map_err(|source| BenchmarkError::Publish {
            algorithm: result.algorithm.clone(),
            source,
          })?;
        report.results.push(result);
      }
      Err(BenchmarkError::Sort(e)) => {
        tracing::error!(error = %e, "Algorithm rejected the dataset. Skipping.");
        report.failures.push((algorithm, e));
      }
      Err(e) => return Err(e),
    }
  }

  tracing::info!("--- Benchmark session complete ---");
  Ok(report)
}
