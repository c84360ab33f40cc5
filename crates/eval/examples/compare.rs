// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --example compare -- "Ah Kh Qh Jh Th" "Ac Ad As Ah Kc" "5c 4d 3s 2h Ac"
// ```
use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;

use fivecard_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The hands to compare, five cards each (e.g. "Ah Kd 7c 7s 2h").
    #[clap(required = true)]
    hands: Vec<String>,
    /// Print the hands sorted by rank.
    #[clap(long, short)]
    sorted: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let mut hands = cli
        .hands
        .iter()
        .map(|s| hand_from_string(s).with_context(|| format!("Invalid hand {s:?}")))
        .collect::<Result<Vec<_>>>()?;

    if cli.sorted {
        hands = hands.iter().map(Hand::sorted_by_rank).collect();
    }

    let index = RankIndex::shared();
    info!("Loaded rank index with {} keys", index.len());

    let mut values = hands
        .iter()
        .map(|hand| (eval5(index, hand), hand))
        .collect::<Vec<_>>();
    values.sort_by(|a, b| b.0.cmp(&a.0));

    let Some(&(best, _)) = values.first() else {
        bail!("No hands to compare");
    };

    for (value, hand) in &values {
        let mark = if *value == best { "*" } else { " " };
        println!("{mark} {hand}   {:>4}   {}", value.value(), value.rank());
    }

    Ok(())
}
