// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand values tables.
//!
//! A hand values table has one row for each hand value with the value, a
//! hand in short notation, and the two letters [HandRank] code, columns are
//! separated by at least three spaces:
//!
//! ```text
//!    1   Ah Kh Qh Jh Th   SF
//!   11   Ac Ad As Ah Kc   4K
//! 7462   7c 5d 4s 3h 2c   HC
//! ```
use anyhow::{Context, Result, bail};

use crate::{Hand, HandRank};

/// The hand values table for all 7462 hand values.
pub const HAND_VALUES: &str = include_str!("../data/hand_values.txt");

/// A hand values table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureRow {
    /// The expected hand value.
    pub value: u16,
    /// A hand with this value.
    pub hand: Hand,
    /// The hand category.
    pub rank: HandRank,
}

impl FixtureRow {
    /// Parses a table row.
    pub fn parse(line: &str) -> Result<Self> {
        let columns = line
            .split("   ")
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>();

        let &[value, hand, rank] = columns.as_slice() else {
            bail!("Expected 3 columns, found {}", columns.len());
        };

        Ok(Self {
            value: value
                .parse()
                .with_context(|| format!("Invalid value {value:?}"))?,
            hand: hand.parse()?,
            rank: rank.parse()?,
        })
    }
}

/// Parses a hand values table, blank lines are skipped.
pub fn parse(table: &str) -> Result<Vec<FixtureRow>> {
    table
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| FixtureRow::parse(line).with_context(|| format!("Line {}", idx + 1)))
        .collect()
}
