// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hands.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Card, ParseError, Rank, Suit};

/// A five cards Poker hand.
///
/// The cards in a hand are always distinct, the card order carries no meaning
/// for evaluation but is preserved for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Card; 5]")]
pub struct Hand([Card; Hand::SIZE]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand, fails if a card appears more than once.
    pub fn new(cards: [Card; Hand::SIZE]) -> Result<Self, ParseError> {
        for (idx, card) in cards.iter().enumerate() {
            if cards[idx + 1..].contains(card) {
                return Err(ParseError::DuplicateCard(*card));
            }
        }

        Ok(Self(cards))
    }

    /// Creates a hand from cards known to be distinct.
    pub(crate) fn from_distinct(cards: [Card; Hand::SIZE]) -> Self {
        debug_assert!(Hand::new(cards).is_ok(), "Duplicate cards {cards:?}");
        Self(cards)
    }

    /// The hand cards.
    #[inline]
    pub fn cards(&self) -> &[Card; Hand::SIZE] {
        &self.0
    }

    /// Returns a copy of this hand with cards sorted by descending rank.
    pub fn sorted_by_rank(&self) -> Self {
        let mut cards = self.0;
        cards.sort_by(|a, b| b.rank().cmp(&a.rank()));
        Self(cards)
    }
}

impl TryFrom<[Card; Hand::SIZE]> for Hand {
    type Error = ParseError;

    fn try_from(cards: [Card; Hand::SIZE]) -> Result<Self, Self::Error> {
        Hand::new(cards)
    }
}

impl FromStr for Hand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cards = [Card::new(Rank::Deuce, Suit::Clubs); Hand::SIZE];
        let mut count = 0;

        for token in s.split_whitespace() {
            if count < Hand::SIZE {
                cards[count] = token.parse()?;
            }

            count += 1;
        }

        if count != Hand::SIZE {
            return Err(ParseError::CardCount(count));
        }

        Hand::new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parses a hand from five space separated short notation tokens, e.g.
/// `"Ah Kd 7c 7s 2h"`.
pub fn hand_from_string(s: &str) -> Result<Hand, ParseError> {
    s.parse()
}
