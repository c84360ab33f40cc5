// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard Poker hand evaluator.
//!
//! Poker hand evaluator for 5 cards hands. This evaluator is based on the
//! [Cactus Kev's][kevlink] poker evaluator: flushes and straights are
//! evaluated from the cards rank bits and all other hands with a perfect hash
//! of the cards primes product built once from the enumeration of all rank
//! patterns.
//!
//! To evaluate a hand use [HandValue::eval], or [eval5] with a given
//! [RankIndex], a stronger hand compares greater:
//!
//! ```
//! # use fivecard_eval::*;
//! let flush = "2h 3h 4h 6h 8h".parse::<Hand>().unwrap();
//! let straight = "Ac Kd Qs Jh Tc".parse::<Hand>().unwrap();
//!
//! let v1 = HandValue::eval(&flush);
//! let v2 = eval5(RankIndex::shared(), &straight);
//! assert!(v1 > v2);
//! assert_eq!(v1.rank(), HandRank::Flush);
//! assert_eq!(v2.value(), 1600);
//! ```
//!
//! The **`parallel`** feature enables [RankIndex::par_new] to build the index
//! with parallel tasks.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::eval5;

pub mod fixture;

pub mod index;
pub use index::{IndexError, RankIndex};

pub mod patterns;
pub use patterns::{KEYS, NUM_KEYS, RankPattern};

pub mod value;
pub use value::{HandRank, HandValue};

// Reexport cards types.
pub use fivecard_cards::{Card, Deck, Hand, ParseError, Rank, Suit, hand_from_string};
