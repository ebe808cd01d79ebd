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

//! Destinations for benchmark results.
//!
//! The runner only knows the [`MetricsSink`] trait; the CLI decides where
//! results go (JSON lines on stdout, a Prometheus textfile, or both).

use crate::benchmark::BenchmarkResult;
use crate::error::SinkError;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::io::Write;
use std::path::PathBuf;

/// Receives one [`BenchmarkResult`] per algorithm per session.
pub trait MetricsSink {
  fn record(&mut self, result: &BenchmarkResult) -> Result<(), SinkError>;
}

/// Fans a result out to several sinks, stopping at the first failure.
impl MetricsSink for Vec<Box<dyn MetricsSink + Send>> {
  fn record(&mut self, result: &BenchmarkResult) -> Result<(), SinkError> {
    for sink in self.iter_mut() {
      sink.record(result)?;
    }
    Ok(())
  }
}

/// Keeps every result in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
  results: Vec<BenchmarkResult>,
}

impl MemorySink {
  pub fn results(&self) -> &[BenchmarkResult] {
    &self.results
  }
}

impl MetricsSink for MemorySink {
  fn record(&mut self, result: &BenchmarkResult) -> Result<(), SinkError> {
    self.results.push(result.clone());
    Ok(())
  }
}

/// Writes each result as one line of JSON.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
  writer: W,
}

impl<W: Write> JsonLinesSink<W> {
  pub fn new(writer: W) -> Self {
    Self { writer }
  }

  pub fn into_inner(self) -> W {
    self.writer
  }
}

impl JsonLinesSink<io::Stdout> {
  pub fn stdout() -> Self {
    Self::new(io::stdout())
  }
}

impl<W: Write> MetricsSink for JsonLinesSink<W> {
  fn record(&mut self, result: &BenchmarkResult) -> Result<(), SinkError> {
    serde_json::to_writer(&mut self.writer, result)?;
    self.writer.write_all(b"\n")?;
    self.writer.flush()?;
    Ok(())
  }
}

/// Maintains a Prometheus text-exposition file with the latest averages of
/// every algorithm seen so far, for a textfile collector to scrape.
#[derive(Debug)]
pub struct TextfileSink {
  path: PathBuf,
  latest: BTreeMap<String, BenchmarkResult>,
}

impl TextfileSink {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self {
      path: path.into(),
      latest: BTreeMap::new(),
    }
  }

  /// Renders the exposition text for the current set of results.
  pub fn render(&self) -> String {
    let gauges: [(&str, &str, fn(&BenchmarkResult) -> f64); 3] = [
      (
        "sortlab_algorithm_duration_seconds",
        "Average wall-clock seconds per sort.",
        |r| r.avg_time_seconds,
      ),
      (
        "sortlab_algorithm_comparisons",
        "Average element comparisons per sort.",
        |r| r.avg_comparisons,
      ),
      (
        "sortlab_algorithm_swaps",
        "Average element movements per sort.",
        |r| r.avg_swaps,
      ),
    ];

    let mut out = String::new();
    for (name, help, value) in gauges {
      let _ = writeln!(out, "# HELP {name} {help}");
      let _ = writeln!(out, "# TYPE {name} gauge");
      for result in self.latest.values() {
        let _ = writeln!(
          out,
          "{name}{{algorithm=\"{}\"}} {}",
          escape_label(&result.algorithm),
          value(result)
        );
      }
    }
    out
  }
}

impl MetricsSink for TextfileSink {
  fn record(&mut self, result: &BenchmarkResult) -> Result<(), SinkError> {
    self
      .latest
      .insert(result.algorithm.clone(), result.clone());

    // Scrapers must never see a half-written file.
    let mut tmp = self.path.clone().into_os_string();
    tmp.push(".tmp");
    fs::write(&tmp, self.render())?;
    fs::rename(&tmp, &self.path)?;
    Ok(())
  }
}

fn escape_label(value: &str) -> String {
  value
    .replace('\\', "\\\\")
    .replace('"', "\\\"")
    .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  fn result(name: &str, comparisons: f64) -> BenchmarkResult {
    BenchmarkResult {
      algorithm: name.to_string(),
      dataset_len: 4,
      repetitions: 3,
      avg_time_seconds: 0.5,
      avg_comparisons: comparisons,
      avg_swaps: 2.0,
    }
  }

  #[test]
  fn json_lines_writes_one_object_per_line() {
    let mut sink = JsonLinesSink::new(Vec::new());
    sink.record(&result("QuickSort", 5.0)).unwrap();
    sink.record(&result("HeapSort", 6.0)).unwrap();

    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);

    let parsed: BenchmarkResult = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(parsed, result("HeapSort", 6.0));
  }

  #[test]
  fn textfile_keeps_latest_value_per_algorithm() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sortlab.prom");
    let mut sink = TextfileSink::new(&path);

    sink.record(&result("QuickSort", 5.0)).unwrap();
    sink.record(&result("QuickSort", 7.0)).unwrap();
    sink.record(&result("HeapSort", 6.0)).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("# TYPE sortlab_algorithm_swaps gauge"));
    assert!(text.contains(r#"sortlab_algorithm_comparisons{algorithm="QuickSort"} 7"#));
    assert!(text.contains(r#"sortlab_algorithm_comparisons{algorithm="HeapSort"} 6"#));
    assert!(!text.contains(r#"{algorithm="QuickSort"} 5"#));
  }

  #[test]
  fn fan_out_reaches_every_sink() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.prom");
    let mut sinks: Vec<Box<dyn MetricsSink + Send>> = vec![
      Box::new(TextfileSink::new(&path)),
      Box::new(JsonLinesSink::new(io::sink())),
    ];

    sinks.record(&result("TimSort", 1.0)).unwrap();
    assert!(path.exists());
  }

  #[test]
  fn labels_are_escaped() {
    assert_eq!(escape_label(r#"a"b\c"#), r#"a\"b\\c"#);
  }
}
