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

//! Command implementations that wire the dataset provider, the sort
//! strategies, the benchmark runner and the metrics sinks together.

use crate::benchmark::SuiteReport;
use crate::benchmark::run_suite;
use crate::config::Config;
use crate::config::generate_seed;
use crate::dataset;
use crate::dataset::DataFormat;
use crate::metrics::JsonLinesSink;
use crate::metrics::MetricsSink;
use crate::metrics::TextfileSink;
use crate::search::CachedSearch;
use crate::search::JsonFileCache;
use crate::sort::Algorithm;
use crate::sort::SortOutcome;
use anyhow::Context;
use anyhow::Result;
use std::io::BufRead;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// Generates a dataset per `config` and writes it to `output`.
pub fn generate_dataset(config: &Config, output: &Path, format: DataFormat) -> Result<Vec<i64>> {
  let seed = config.seed.unwrap_or_else(generate_seed);
  tracing::info!(
    seed,
    size = config.dataset_size,
    min = config.min_value,
    max = config.max_value,
    "Generating dataset"
  );

  let data = dataset::generate(config.dataset_size, config.min_value, config.max_value, seed)?;
  dataset::save(output, &data, format)?;
  Ok(data)
}

/// Loads the configured data file, generating it first if it does not exist.
pub fn prepare_dataset(config: &Config) -> Result<Vec<i64>> {
  if config.data_file.exists() {
    return dataset::load(&config.data_file)
      .with_context(|| format!("Failed to load {}", config.data_file.display()));
  }

  tracing::info!(
    path = %config.data_file.display(),
    "Data file not found, generating a new one"
  );
  generate_dataset(config, &config.data_file, DataFormat::Lines)
}

/// Default destination of a single sort's output.
pub fn result_path(config: &Config, algorithm: Algorithm) -> PathBuf {
  config
    .results_dir
    .join(format!("{}.csv", algorithm.file_stem()))
}

/// Sorts the configured data file with `algorithm` and saves the sorted
/// values as one CSV row.
pub fn sort_and_save(
  config: &Config,
  algorithm: Algorithm,
  output: Option<PathBuf>,
) -> Result<(SortOutcome, PathBuf)> {
  let data = dataset::load(&config.data_file)
    .with_context(|| format!("Failed to load {}", config.data_file.display()))?;

  let span = tracing::info_span!("sort", algorithm = %algorithm, size = data.len());
  let _enter = span.enter();

  let outcome = algorithm
    .sort(&data)
    .with_context(|| format!("{algorithm} could not sort {}", config.data_file.display()))?;
  tracing::info!(
    comparisons = outcome.comparisons(),
    swaps = outcome.swaps(),
    "Sort complete"
  );

  let output = output.unwrap_or_else(|| result_path(config, algorithm));
  dataset::save(&output, outcome.sorted(), DataFormat::Csv)?;
  Ok((outcome, output))
}

/// Human-readable menu entry, e.g. "Bubble Sort Optimized".
pub fn menu_label(algorithm: Algorithm) -> String {
  algorithm
    .file_stem()
    .split('_')
    .map(|word| {
      let mut chars = word.chars();
      match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
      }
    })
    .collect::<Vec<String>>()
    .join(" ")
}

/// Prints the numbered algorithm menu and reads one choice.
///
/// Returns `None` for anything that is not a listed number.
pub fn choose_from_menu(input: &mut impl BufRead, output: &mut impl Write) -> Result<Option<Algorithm>> {
  writeln!(output, "Choose a sorting method:")?;
  for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
    writeln!(output, "{} - {}", i + 1, menu_label(*algorithm))?;
  }
  write!(output, "Enter the corresponding number: ")?;
  output.flush()?;

  let mut line = String::new();
  input.read_line(&mut line).context("Failed to read menu choice")?;

  Ok(
    line
      .trim()
      .parse::<usize>()
      .ok()
      .and_then(Algorithm::from_menu_index),
  )
}

/// Builds the sinks a benchmark session publishes to.
pub fn build_sinks(config: &Config) -> Vec<Box<dyn MetricsSink + Send>> {
  let mut sinks: Vec<Box<dyn MetricsSink + Send>> = vec![Box::new(JsonLinesSink::stdout())];
  if let Some(path) = &config.metrics_file {
    tracing::info!(path = %path.display(), "Publishing gauges to textfile");
    sinks.push(Box::new(TextfileSink::new(path)));
  }
  sinks
}

/// Runs the full benchmark suite once over the configured dataset.
pub async fn run_benchmarks(config: &Config) -> Result<SuiteReport> {
  let dataset = prepare_dataset(config)?;
  let algorithms = config.algorithms.clone();
  let repetitions = config.repetitions;
  let mut sinks = build_sinks(config);

  let report = tokio::task::spawn_blocking(move || {
    run_suite(&algorithms, &dataset, repetitions, &mut sinks)
  })
  .await
  .context("Benchmark task failed")??;

  for (algorithm, error) in &report.failures {
    tracing::warn!(algorithm = %algorithm, error = %error, "Algorithm produced no result");
  }
  Ok(report)
}

/// Runs the suite, then idles until Ctrl+C so the published metrics stay
/// available to whoever scrapes them.
pub async fn serve(config: &Config) -> Result<()> {
  run_benchmarks(config).await?;

  tracing::info!("Waiting... Press Ctrl+C to stop.");
  idle_until(
    tokio::signal::ctrl_c(),
    Duration::from_secs(config.heartbeat_secs),
  )
  .await?;
  tracing::info!("Interrupted, shutting down.");
  Ok(())
}

/// Logs a heartbeat every `period` until `shutdown` resolves.
///
/// `shutdown` is polled across heartbeats rather than recreated, so a signal
/// that arrives while a heartbeat is being handled is not lost.
pub async fn idle_until<F>(shutdown: F, period: Duration) -> Result<()>
where
  F: Future<Output = std::io::Result<()>>,
{
  tokio::pin!(shutdown);
  let mut heartbeat = tokio::time::interval(period);
  heartbeat.tick().await;

  loop {
    tokio::select! {
      _ = heartbeat.tick() => tracing::debug!("Still serving benchmark results"),
      signal = &mut shutdown => {
        signal.context("Failed to listen for shutdown signal")?;
        return Ok(());
      }
    }
  }
}

/// Looks up `target` in the sorted configured dataset through the file cache.
pub fn search(config: &Config, target: i64) -> Result<i64> {
  let data = dataset::load(&config.data_file)
    .with_context(|| format!("Failed to load {}", config.data_file.display()))?;
  let sorted = Algorithm::Merge.sort(&data)?.into_sorted();

  let mut searcher = CachedSearch::new(JsonFileCache::new(&config.cache_file));
  let index = searcher.find(&sorted, target)?;
  tracing::info!(target, index, searched = searcher.searches() > 0, "Search complete");
  Ok(index)
}
