//! ringsize CLI - binary entry point.
//!
//! # Architecture
//!
//! ```text
//! main() -> Cli::parse() -> resolve config -> LengthEstimator
//!                                |
//!               count | validate | replay  (commands.rs)
//! ```
//!
//! Precedence for every setting is flag, then config file, then default.
//! Results go to stdout; logs go to stderr so output stays pipeable.

mod commands;

use std::{
    io::{self, stdout},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use ringsize_config::RingsizeConfig;
use ringsize_engine::{HalfComparison, LengthEstimator};

#[derive(Debug, Parser)]
#[command(name = "ringsize", version, about = "Infer the hidden size of a ring")]
struct Cli {
    /// Config file. Defaults to $RINGSIZE_CONFIG or ~/.ringsize/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Half comparison used by the search: "exact" or "weighted".
    #[arg(long, global = true)]
    comparison: Option<HalfComparison>,

    /// Most probes a single search may read.
    #[arg(long, global = true)]
    probe_limit: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a ring and infer its size.
    Count {
        /// Cells in the ring. 0 picks a random size.
        #[arg(long, default_value_t = 0)]
        size: usize,
        /// Seed for reproducible content.
        #[arg(long)]
        seed: Option<u64>,
        /// Also print the ring's content as a bit-string.
        #[arg(long)]
        dump: bool,
    },
    /// Run a batch of rings with known sizes and report mismatches.
    Validate {
        #[arg(long)]
        trials: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        max_size: Option<usize>,
    },
    /// Infer the size of a ring holding exactly the given bits.
    Replay {
        /// Cell values as 0/1, e.g. 011011.
        bits: String,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<RingsizeConfig> {
    let loaded = match path {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} does not exist", path.display());
            }
            RingsizeConfig::load_from(path)?
        }
        None => RingsizeConfig::load()?,
    };
    Ok(loaded.unwrap_or_default())
}

/// Layer command-line flags over values loaded from the config file.
fn apply_overrides(cli: &Cli, mut config: RingsizeConfig) -> RingsizeConfig {
    if let Some(comparison) = cli.comparison {
        config.engine.comparison = comparison;
    }
    if let Some(limit) = cli.probe_limit {
        config.engine.probe_limit = limit;
    }
    if let Command::Validate {
        trials,
        seed,
        max_size,
    } = cli.command
    {
        if let Some(trials) = trials {
            config.harness.trials = trials;
        }
        if seed.is_some() {
            config.harness.seed = seed;
        }
        if let Some(max_size) = max_size {
            config.harness.max_size = max_size;
        }
    }
    config
}

fn main() -> Result<ExitCode> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).context("loading config")?;
    let config = apply_overrides(&cli, config);

    let estimator = LengthEstimator::new(config.engine).context("invalid engine settings")?;
    tracing::debug!(config = ?estimator.config(), "estimator ready");

    let mut out = stdout().lock();
    let ok = match cli.command {
        Command::Count { size, seed, dump } => {
            commands::count(&mut out, &estimator, size, seed, dump)
        }
        Command::Validate { .. } => commands::validate(&mut out, &estimator, &config.harness),
        Command::Replay { bits } => commands::replay(&mut out, &estimator, &bits),
    }?;

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
