// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use fivecard_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::from_rank_suit(13, Suit::Diamonds).unwrap();
//! assert_eq!(ah.to_string(), "Ah");
//! assert_eq!("Kd".parse::<Card>(), Ok(kd));
//! ```
//!
//! five cards [Hand]s parsed from the short notation:
//!
//! ```
//! # use fivecard_cards::{Hand, ParseError};
//! let hand = "Ah Kh Qh Jh Th".parse::<Hand>().unwrap();
//! assert_eq!(hand.to_string(), "Ah Kh Qh Jh Th");
//! assert_eq!("Ah Kh".parse::<Hand>(), Err(ParseError::CardCount(2)));
//! ```
//!
//! and a [Deck] type for shuffling, sampling, and iterating hands in the deck:
//!
//! ```no_run
//! # use fivecard_cards::Deck;
//! // Iterate through all 5 cards hands (2.6M hands).
//! let mut counter = 0;
//! Deck::default().for_each_hand(|hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod error;
pub use error::ParseError;

mod hand;
pub use hand::{Hand, hand_from_string};
