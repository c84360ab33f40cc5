// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Short notation parsing errors.
use thiserror::Error;

use crate::Card;

/// Error returned when building cards or hands from invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The rank character is not one of `23456789TJQKA`.
    #[error("invalid rank character '{0}'")]
    InvalidRank(char),
    /// The suit character is not one of `cdhs`.
    #[error("invalid suit character '{0}'")]
    InvalidSuit(char),
    /// The numeric rank is outside `2..=14`.
    #[error("rank {0} is not in 2..=14")]
    RankOutOfRange(u8),
    /// A card id that is not a valid card encoding.
    #[error("invalid card id 0x{0:08x}")]
    InvalidCard(u32),
    /// A card token that is not two characters long.
    #[error("invalid card token \"{0}\"")]
    InvalidToken(String),
    /// A hand string without exactly five cards.
    #[error("a hand must have 5 cards, found {0}")]
    CardCount(usize),
    /// The same card appears more than once in a hand.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}
