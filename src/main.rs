// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `partitions` command: print exact partition numbers.
//!
//! ```text
//! partitions 10 100 200      # one p(n) per line
//! partitions --table 20      # "n p(n)" rows for n = 0..=20
//! ```
//!
//! Log output is controlled by `RUST_LOG` (default `warn`, raised by `-v`;
//! `--stats` reports its counters at `info`).

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use partition_numbers::{Counters, PartitionNumbers};

/// Print partition numbers computed with Euler's pentagonal number recurrence.
#[derive(Parser, Debug)]
#[command(name = "partitions", version, arg_required_else_help = true)]
struct Cli {
    /// Indices n whose partition numbers p(n) are printed, one per line
    #[arg(allow_negative_numbers = true)]
    indices: Vec<i64>,

    /// Print a table of "n p(n)" for every n from 0 to MAX
    #[arg(long, value_name = "MAX", allow_negative_numbers = true)]
    table: Option<i64>,

    /// Log engine and cache counters at info level when done
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Upper bound on values reserved up front; larger requests grow the cache as they go.
const MAX_PREALLOCATED: usize = 1 << 16;

impl Cli {
    fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.stats => "info",
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Largest index requested, used to size the cache up front.
    fn capacity_hint(&self) -> usize {
        self.indices
            .iter()
            .chain(self.table.iter())
            .filter_map(|&n| usize::try_from(n).ok())
            .max()
            .map_or(1, |n| n.saturating_add(1))
            .min(MAX_PREALLOCATED)
    }
}

fn write_table<W: Write>(out: &mut W, partitions: &mut PartitionNumbers, max: i64) -> Result<()> {
    partitions
        .nth_partition_number(max)
        .with_context(|| format!("cannot tabulate partition numbers up to {}", max))?;
    for (n, value) in partitions.computed().iter().enumerate().take(max as usize + 1) {
        writeln!(out, "{} {}", n, value)?;
    }
    Ok(())
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let mut partitions = PartitionNumbers::with_capacity(cli.capacity_hint());

    if let Some(max) = cli.table {
        write_table(out, &mut partitions, max)?;
    }

    for &n in &cli.indices {
        let value = partitions
            .nth_partition_number(n)
            .with_context(|| format!("cannot compute p({})", n))?;
        writeln!(out, "{}", value)?;
    }
    out.flush()?;

    debug!("cached {} partition numbers", partitions.len());
    if cli.stats {
        let stats = partitions.statistics();
        info!("engine steps:  {}", stats.get(Counters::EngineSteps));
        info!("offsets added: {}", stats.get(Counters::OffsetsAdded));
        info!("cache hits:    {}", stats.get(Counters::CacheHits));
        info!("cache misses:  {}", stats.get(Counters::CacheMisses));
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.default_log_filter()),
    )
    .init();

    let mut out = BufWriter::new(io::stdout().lock());
    if let Err(e) = run(&cli, &mut out) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
