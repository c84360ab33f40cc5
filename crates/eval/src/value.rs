// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand values and categories.
//!
//! Every 5 cards hand belongs to one of 7462 equivalence classes numbered from
//! 1 (royal flush) to 7462 (7-5-4-3-2 unsuited), a lower number is a stronger
//! hand. The classes are split in contiguous bands, one for each [HandRank]:
//!
//! ```text
//!   Straight Flush     1 ..=   10
//!   Four of a Kind    11 ..=  166
//!   Full House       167 ..=  322
//!   Flush            323 ..= 1599
//!   Straight        1600 ..= 1609
//!   Three of a Kind 1610 ..= 2467
//!   Two Pair        2468 ..= 3325
//!   One Pair        3326 ..= 6185
//!   High Card       6186 ..= 7462
//! ```
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

/// First value of the straight flush band.
pub const STRAIGHT_FLUSH_BASE: u16 = 1;
/// First value of the four of a kind band.
pub const FOUR_OF_A_KIND_BASE: u16 = 11;
/// First value of the full house band.
pub const FULL_HOUSE_BASE: u16 = 167;
/// First value of the flush band.
pub const FLUSH_BASE: u16 = 323;
/// First value of the straight band.
pub const STRAIGHT_BASE: u16 = 1600;
/// First value of the three of a kind band.
pub const THREE_OF_A_KIND_BASE: u16 = 1610;
/// First value of the two pair band.
pub const TWO_PAIR_BASE: u16 = 2468;
/// First value of the one pair band.
pub const ONE_PAIR_BASE: u16 = 3326;
/// First value of the high card band.
pub const HIGH_CARD_BASE: u16 = 6186;
/// The number of hand values.
pub const NUM_VALUES: u16 = 7462;

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// Returns all ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// Returns the rank for a hand value, `None` if the value is not in
    /// `1..=7462`.
    pub fn from_value(value: u16) -> Option<HandRank> {
        let rank = match value {
            0 => return None,
            v if v < FOUR_OF_A_KIND_BASE => HandRank::StraightFlush,
            v if v < FULL_HOUSE_BASE => HandRank::FourOfAKind,
            v if v < FLUSH_BASE => HandRank::FullHouse,
            v if v < STRAIGHT_BASE => HandRank::Flush,
            v if v < THREE_OF_A_KIND_BASE => HandRank::Straight,
            v if v < TWO_PAIR_BASE => HandRank::ThreeOfAKind,
            v if v < ONE_PAIR_BASE => HandRank::TwoPair,
            v if v < HIGH_CARD_BASE => HandRank::OnePair,
            v if v <= NUM_VALUES => HandRank::HighCard,
            _ => return None,
        };

        Some(rank)
    }

    /// The values band for this rank.
    pub fn values(&self) -> std::ops::RangeInclusive<u16> {
        match self {
            HandRank::StraightFlush => STRAIGHT_FLUSH_BASE..=FOUR_OF_A_KIND_BASE - 1,
            HandRank::FourOfAKind => FOUR_OF_A_KIND_BASE..=FULL_HOUSE_BASE - 1,
            HandRank::FullHouse => FULL_HOUSE_BASE..=FLUSH_BASE - 1,
            HandRank::Flush => FLUSH_BASE..=STRAIGHT_BASE - 1,
            HandRank::Straight => STRAIGHT_BASE..=THREE_OF_A_KIND_BASE - 1,
            HandRank::ThreeOfAKind => THREE_OF_A_KIND_BASE..=TWO_PAIR_BASE - 1,
            HandRank::TwoPair => TWO_PAIR_BASE..=ONE_PAIR_BASE - 1,
            HandRank::OnePair => ONE_PAIR_BASE..=HIGH_CARD_BASE - 1,
            HandRank::HighCard => HIGH_CARD_BASE..=NUM_VALUES,
        }
    }

    /// The two letters code used in hand values tables.
    pub fn code(&self) -> &'static str {
        match self {
            HandRank::HighCard => "HC",
            HandRank::OnePair => "1P",
            HandRank::TwoPair => "2P",
            HandRank::ThreeOfAKind => "3K",
            HandRank::Straight => "S",
            HandRank::Flush => "F",
            HandRank::FullHouse => "FH",
            HandRank::FourOfAKind => "4K",
            HandRank::StraightFlush => "SF",
        }
    }
}

impl FromStr for HandRank {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match HandRank::ranks().find(|r| r.code() == s) {
            Some(rank) => Ok(rank),
            None => bail!("Unknown hand rank code {s:?}"),
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of a 5 cards hand.
///
/// The inner number is the hand equivalence class where lower is stronger,
/// the [Ord] implementation compares strength so that a stronger hand is
/// greater than a weaker one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandValue(u16);

impl HandValue {
    /// The strongest hand value, a royal flush.
    pub const BEST: HandValue = HandValue(STRAIGHT_FLUSH_BASE);
    /// The weakest hand value, 7-5-4-3-2 unsuited.
    pub const WORST: HandValue = HandValue(NUM_VALUES);

    /// Creates a hand value, `None` if the value is not in `1..=7462`.
    pub fn new(value: u16) -> Option<HandValue> {
        HandRank::from_value(value).map(|_| HandValue(value))
    }

    #[inline]
    pub(crate) const fn from_raw(value: u16) -> HandValue {
        HandValue(value)
    }

    /// The hand equivalence class, 1 is the strongest and 7462 the weakest.
    #[inline]
    pub fn value(&self) -> u16 {
        self.0
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        HandRank::from_value(self.0)
            .unwrap_or_else(|| panic!("Hand value {} out of range", self.0))
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl From<HandValue> for u16 {
    fn from(value: HandValue) -> Self {
        value.0
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.rank(), self.0)
    }
}
