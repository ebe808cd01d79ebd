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
use anyhow::Result;
use clap::Parser;
use sortlab::cli::Cli;
use sortlab::cli::Commands;
use sortlab::config::Config;
use sortlab::logging::setup_tracing;
use sortlab::session;
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
  let _log_guard = setup_tracing()?;

  let Cli {
    config,
    overrides,
    command,
  } = Cli::parse();
  let main_span = tracing::info_span!("sortlab");
  let _enter = main_span.enter();

  let config = Config::load(config.as_deref(), &overrides)?;

  match command {
    Commands::Generate { output, format } => {
      let output = output.unwrap_or_else(|| config.data_file.clone());
      let data = session::generate_dataset(&config, &output, format)?;
      println!("Wrote {} numbers to {}", data.len(), output.display());
    }
    Commands::Sort { algorithm, output } => {
      let (outcome, path) = session::sort_and_save(&config, algorithm, output)?;
      println!(
        "{algorithm}: comparisons={}, swaps={}. Wrote {}",
        outcome.comparisons(),
        outcome.swaps(),
        path.display()
      );
    }
    Commands::Menu => {
      let choice = session::choose_from_menu(&mut io::stdin().lock(), &mut io::stdout())?;
      let Some(algorithm) = choice else {
        println!();
        anyhow::bail!("Invalid option!");
      };
      let (_, path) = session::sort_and_save(&config, algorithm, None)?;
      println!("\nFile {} generated successfully!", path.display());
    }
    Commands::Bench => {
      tracing::info!("Initializing Benchmark Run...");
      let report = session::run_benchmarks(&config).await?;
      if !report.failures.is_empty() {
        anyhow::bail!(
          "{} of {} algorithms failed",
          report.failures.len(),
          config.algorithms.len()
        );
      }
    }
    Commands::Serve => {
      tracing::info!("Initializing Benchmark Service...");
      session::serve(&config).await?;
    }
    Commands::Search { target } => {
      let index = session::search(&config, target)?;
      println!("{index}");
    }
  }

  Ok(())
}
