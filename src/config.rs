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
use crate::cli::Overrides;
use crate::error::ConfigError;
use crate::sort::Algorithm;
use figment::Figment;
use figment::providers::Env;
use figment::providers::Format;
use figment::providers::Json;
use figment::providers::Serialized;
use rand::RngCore;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// Configuration file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "sortlab.json";

/// Prefix of environment variables that override configuration keys.
pub const ENV_PREFIX: &str = "SORTLAB_";

/// Generates a random 64-bit seed.
pub fn generate_seed() -> u64 {
  let mut rng = rand::rng();
  rng.next_u64()
}

/// Fully resolved and validated configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
  pub data_file: PathBuf,
  pub dataset_size: usize,
  pub min_value: i64,
  pub max_value: i64,
  /// Seed for dataset generation; random when absent.
  pub seed: Option<u64>,
  pub repetitions: u32,
  pub algorithms: Vec<Algorithm>,
  pub results_dir: PathBuf,
  pub cache_file: PathBuf,
  /// Prometheus textfile to maintain, if any.
  pub metrics_file: Option<PathBuf>,
  /// Seconds between heartbeats while `serve` idles.
  pub heartbeat_secs: u64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      data_file: PathBuf::from("data.txt"),
      dataset_size: 10_000,
      min_value: 0,
      max_value: 100_000,
      seed: None,
      repetitions: 3,
      algorithms: Algorithm::ALL.to_vec(),
      results_dir: PathBuf::from("results"),
      cache_file: PathBuf::from("search_cache.json"),
      metrics_file: None,
      heartbeat_secs: 5,
    }
  }
}

impl Config {
  /// Resolves the configuration from, in increasing priority: built-in
  /// defaults, the JSON file, `SORTLAB_*` environment variables and CLI
  /// overrides.
  ///
  /// An explicitly given `file` must exist; the default file is optional.
  pub fn load(file: Option<&Path>, overrides: &Overrides) -> Result<Self, ConfigError> {
    let json = match file {
      Some(path) if !path.exists() => return Err(ConfigError::MissingFile(path.to_path_buf())),
      Some(path) => Json::file(path),
      None => Json::file(DEFAULT_CONFIG_FILE),
    };

    let config: Config = Figment::from(Serialized::defaults(Config::default()))
      .merge(json)
      .merge(Env::prefixed(ENV_PREFIX))
      .merge(Serialized::defaults(overrides))
      .extract()
      .map_err(Box::new)?;

    config.validate()?;
    tracing::debug!(?config, "Configuration resolved");
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.repetitions == 0 {
      return Err(ConfigError::ZeroRepetitions);
    }
    if self.min_value > self.max_value {
      return Err(ConfigError::InvalidRange {
        min: self.min_value,
        max: self.max_value,
      });
    }
    if self.heartbeat_secs == 0 {
      return Err(ConfigError::ZeroHeartbeat);
    }
    if self.algorithms.is_empty() {
      return Err(ConfigError::NoAlgorithms);
    }
    Ok(())
  }
}
