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

//! Dataset provider: generates, parses, loads and saves integer datasets.

use crate::error::DatasetError;
use clap::ValueEnum;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// On-disk layout of a dataset file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
  /// One integer per line.
  #[default]
  Lines,
  /// A single comma-separated row.
  Csv,
}

/// Generates `size` integers drawn uniformly from `min..=max`.
///
/// The same seed always yields the same dataset.
pub fn generate(size: usize, min: i64, max: i64, seed: u64) -> Result<Vec<i64>, DatasetError> {
  if min > max {
    return Err(DatasetError::InvalidRange { min, max });
  }

  let mut rng = StdRng::seed_from_u64(seed);
  Ok((0..size).map(|_| rng.random_range(min..=max)).collect())
}

/// Parses integers separated by newlines and/or commas.
///
/// Whitespace around tokens and empty tokens are ignored, so both the
/// newline and the CSV layouts (and a trailing newline) are accepted.
pub fn parse(text: &str) -> Result<Vec<i64>, DatasetError> {
  let mut values = Vec::new();
  for (index, line) in text.lines().enumerate() {
    for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
      let value = token.parse::<i64>().map_err(|source| DatasetError::ParseInt {
        token: token.to_string(),
        line: index + 1,
        source,
      })?;
      values.push(value);
    }
  }
  Ok(values)
}

/// Renders `data` in the given layout, with a trailing newline.
pub fn render(data: &[i64], format: DataFormat) -> String {
  let separator = match format {
    DataFormat::Lines => "\n",
    DataFormat::Csv => ",",
  };
  let mut out = data
    .iter()
    .map(i64::to_string)
    .collect::<Vec<_>>()
    .join(separator);
  out.push('\n');
  out
}

pub fn load(path: &Path) -> Result<Vec<i64>, DatasetError> {
  let text = fs::read_to_string(path).map_err(|source| DatasetError::Read {
    path: path.to_path_buf(),
    source,
  })?;
  let data = parse(&text)?;
  tracing::debug!(path = %path.display(), size = data.len(), "Dataset loaded");
  Ok(data)
}

/// Writes `data` to `path`, creating parent directories as needed.
pub fn save(path: &Path, data: &[i64], format: DataFormat) -> Result<(), DatasetError> {
  let write_err = |source| DatasetError::Write {
    path: path.to_path_buf(),
    source,
  };

  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent).map_err(write_err)?;
  }
  fs::write(path, render(data, format)).map_err(write_err)?;

  tracing::info!("Saved {} numbers to {}", data.len(), path.display());
  Ok(())
}
