// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example par_index -- --tasks 4
// ```
use anyhow::{Result, ensure};
use clap::{Parser, value_parser};
use std::time::Instant;

use fivecard_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The number of parallel tasks.
    #[clap(long, short, default_value_t = 4, value_parser = value_parser!(u16).range(1..=64))]
    tasks: u16,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let now = Instant::now();
    let keys = patterns::enumerate();
    println!("Enumerated:      {} keys in {:?}", keys.len(), now.elapsed());

    let now = Instant::now();
    let seq = RankIndex::new(NUM_KEYS, &keys)?;
    println!("Sequential:      {:?}", now.elapsed());

    let now = Instant::now();
    let par = RankIndex::par_new(cli.tasks as usize, NUM_KEYS, &keys)?;
    println!("Parallel ({:>2}):   {:?}", cli.tasks, now.elapsed());

    ensure!(seq == par, "Parallel index differs from sequential index");
    Ok(())
}
