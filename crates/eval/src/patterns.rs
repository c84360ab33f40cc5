// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank patterns enumeration.
//!
//! A non flush hand value depends only on the multiset of its 5 ranks, each
//! multiset is identified by the product of the ranks primes (see
//! [Card](crate::Card)) and this module enumerates all of them, assigning
//! each pattern its hand value.
//!
//! Patterns are enumerated from the strongest to the weakest within each
//! category, ranks descending, so that values increase by one for each key:
//!
//! - four of a kind: quads rank, kicker
//! - full house: trips rank, pair rank
//! - three of a kind: trips rank, two kickers
//! - two pair: high pair, low pair, kicker
//! - one pair: pair rank, three kickers
//! - high card: five distinct ranks, straights excluded
//!
//! Straights and flushes are evaluated from the rank mask without a lookup.
use log::debug;
use std::sync::LazyLock;

use crate::value::*;

/// Primes for each rank index, deuce=0 to ace=12.
const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// The number of rank patterns in [KEYS].
///
/// 156 four of a kind, 156 full house, 858 three of a kind, 858 two pair,
/// 2860 one pair, and 1277 high card patterns.
pub const NUM_KEYS: usize = 6165;

/// All non straight rank patterns with their values.
pub static KEYS: LazyLock<Vec<RankPattern>> = LazyLock::new(enumerate);

/// The rank masks for the straights, strongest first.
pub const STRAIGHTS: [u32; 10] = [
    0x1f00, 0x0f80, 0x07c0, 0x03e0, 0x01f0, 0x00f8, 0x007c, 0x003e, 0x001f, WHEEL,
];

/// The A-5-4-3-2 rank mask.
const WHEEL: u32 = 0x100f;

/// Creates table for nck(n, k) for n <= 13 and k <= 5.
const fn make_nck() -> [[u16; 6]; 14] {
    let mut t = [[0u16; 6]; 14];
    let mut n = 0;

    while n < 14 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= 5 && k <= n {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCK: [[u16; 6]; 14] = make_nck();

/// The highest colex rank of a 5 ranks set.
const MAX_COLEX: u16 = NCK[13][5] - 1;

/// A rank pattern key with its hand value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankPattern {
    /// The product of the ranks primes.
    pub key: u32,
    /// The hand value for this pattern.
    pub value: u16,
}

/// Returns the straight position for a rank mask, 0 for the ace high straight
/// to 9 for the wheel, or `None` if the mask is not a straight.
#[inline]
pub fn straight_position(mask: u32) -> Option<u16> {
    if mask == WHEEL {
        return Some(9);
    }

    let low = mask.trailing_zeros();
    match mask.checked_shr(low) {
        Some(0x1f) if low <= 8 => Some(8 - low as u16),
        _ => None,
    }
}

/// Returns the value of a non straight 5 distinct ranks mask in the band
/// starting at `base`.
///
/// The colex order of rank sets is the order of the hands, a set with a
/// higher colex rank beats a set with a lower one, so the position in the band
/// is the number of sets above this one less the straights above it.
#[inline]
pub fn distinct_value(mask: u32, base: u16) -> u16 {
    debug_assert_eq!(mask.count_ones(), 5, "mask 0x{mask:x}");

    let above = STRAIGHTS.iter().filter(|&&s| s > mask).count() as u16;
    base + (MAX_COLEX - colex(mask)) - above
}

/// The colex rank of a rank set: sum of nck(c_i, i) for the set bits
/// c_1 < c_2 < ... < c_5.
#[inline]
fn colex(mask: u32) -> u16 {
    let mut bits = mask;
    let mut rank = 0;
    let mut k = 1;

    while bits != 0 && k <= 5 {
        rank += NCK[bits.trailing_zeros() as usize][k];
        bits &= bits - 1;
        k += 1;
    }

    rank
}

/// Assigns increasing values to patterns within a band.
struct Bands {
    patterns: Vec<RankPattern>,
    value: u16,
}

impl Bands {
    fn band(&mut self, base: u16) {
        self.value = base;
    }

    fn push(&mut self, ranks: [usize; 5]) {
        let key = ranks.iter().map(|&r| PRIMES[r]).product();
        self.patterns.push(RankPattern {
            key,
            value: self.value,
        });
        self.value += 1;
    }
}

/// Enumerates all non straight rank patterns with their values.
pub fn enumerate() -> Vec<RankPattern> {
    let mut bands = Bands {
        patterns: Vec::with_capacity(NUM_KEYS),
        value: 0,
    };

    bands.band(FOUR_OF_A_KIND_BASE);
    for q in (0..13).rev() {
        for k in (0..13).rev().filter(|&k| k != q) {
            bands.push([q, q, q, q, k]);
        }
    }

    bands.band(FULL_HOUSE_BASE);
    for t in (0..13).rev() {
        for p in (0..13).rev().filter(|&p| p != t) {
            bands.push([t, t, t, p, p]);
        }
    }

    bands.band(THREE_OF_A_KIND_BASE);
    for t in (0..13).rev() {
        for k1 in (0..13).rev().filter(|&k| k != t) {
            for k2 in (0..k1).rev().filter(|&k| k != t) {
                bands.push([t, t, t, k1, k2]);
            }
        }
    }

    bands.band(TWO_PAIR_BASE);
    for hi in (0..13).rev() {
        for lo in (0..hi).rev() {
            for k in (0..13).rev().filter(|&k| k != hi && k != lo) {
                bands.push([hi, hi, lo, lo, k]);
            }
        }
    }

    bands.band(ONE_PAIR_BASE);
    for p in (0..13).rev() {
        for k1 in (0..13).rev().filter(|&k| k != p) {
            for k2 in (0..k1).rev().filter(|&k| k != p) {
                for k3 in (0..k2).rev().filter(|&k| k != p) {
                    bands.push([p, p, k1, k2, k3]);
                }
            }
        }
    }

    bands.band(HIGH_CARD_BASE);
    for a in (4..13).rev() {
        for b in (3..a).rev() {
            for c in (2..b).rev() {
                for d in (1..c).rev() {
                    for e in (0..d).rev() {
                        let mask = [a, b, c, d, e].iter().fold(0, |m, &r| m | 1 << r);
                        if straight_position(mask).is_none() {
                            bands.push([a, b, c, d, e]);
                        }
                    }
                }
            }
        }
    }

    debug!("Enumerated {} rank patterns", bands.patterns.len());
    bands.patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::{HashMap, HashSet};

    #[test]
    fn test_nck() {
        assert_eq!(NCK[13][5], 1287);
        assert_eq!(NCK[12][5], 792);
        assert_eq!(NCK[5][5], 1);
        assert_eq!(NCK[4][5], 0);
        assert_eq!(NCK[9][2], 36);
        assert_eq!(MAX_COLEX, 1286);
    }

    #[test]
    fn keys_are_unique() {
        let keys = enumerate();
        assert_eq!(keys.len(), NUM_KEYS);

        let unique_keys = keys.iter().map(|p| p.key).collect::<HashSet<_>>();
        assert_eq!(unique_keys.len(), NUM_KEYS);

        let unique_values = keys.iter().map(|p| p.value).collect::<HashSet<_>>();
        assert_eq!(unique_values.len(), NUM_KEYS);

        // Same result on every enumeration.
        assert_eq!(keys, *KEYS);
    }

    #[test]
    fn keys_fill_bands() {
        let mut counts = HashMap::<HandRank, usize>::default();
        let mut last = 0;

        for p in KEYS.iter() {
            // Values increase within and across bands.
            assert!(p.value > last, "{p:?}");
            last = p.value;

            let rank = HandRank::from_value(p.value).unwrap();
            *counts.entry(rank).or_default() += 1;
        }

        for rank in HandRank::ranks() {
            let expected = match rank {
                HandRank::StraightFlush | HandRank::Flush | HandRank::Straight => 0,
                _ => rank.values().count(),
            };
            assert_eq!(counts.get(&rank).copied().unwrap_or(0), expected, "{rank}");
        }
    }

    #[test]
    fn known_patterns() {
        let find = |key: u32| KEYS.iter().find(|p| p.key == key).map(|p| p.value);

        // A-A-A-A-K is the best four of a kind.
        assert_eq!(find(41 * 41 * 41 * 41 * 37), Some(11));
        // 2-2-2-3-3 is the worst full house.
        assert_eq!(find(2 * 2 * 2 * 3 * 3), Some(322));
        // A-A-A-K-Q is the best three of a kind.
        assert_eq!(find(41 * 41 * 41 * 37 * 31), Some(1610));
        // 2-2-3-3-4 is the worst two pair.
        assert_eq!(find(2 * 2 * 3 * 3 * 5), Some(3325));
        // A-A-K-Q-J is the best pair.
        assert_eq!(find(41 * 41 * 37 * 31 * 29), Some(3326));
        // A-K-Q-J-9 is the best high card.
        assert_eq!(find(41 * 37 * 31 * 29 * 19), Some(6186));
        // 7-5-4-3-2 is the worst high card.
        assert_eq!(find(13 * 7 * 5 * 3 * 2), Some(7462));
        // 8-5-4-3-2 follows the four 7 high hands, 7-6-5-4-3 is a straight.
        assert_eq!(find(17 * 7 * 5 * 3 * 2), Some(7458));

        // Straights are not in the table.
        assert_eq!(find(41 * 37 * 31 * 29 * 23), None);
        assert_eq!(find(41 * 7 * 5 * 3 * 2), None);
    }

    #[test]
    fn straights() {
        for (pos, mask) in STRAIGHTS.iter().enumerate() {
            assert_eq!(straight_position(*mask), Some(pos as u16));
        }

        // Straights are sorted by mask with the wheel special case.
        assert!(STRAIGHTS[..9].windows(2).all(|w| w[0] > w[1]));

        // A-K-Q-J-9, 6-5-4-3-A, no cards, pairs.
        assert_eq!(straight_position(0x1e80), None);
        assert_eq!(straight_position(0x100e | 0x10), None);
        assert_eq!(straight_position(0), None);
        assert_eq!(straight_position(0x0f), None);
    }

    #[test]
    fn distinct_values_match_enumeration() {
        let mut checked = 0;
        for p in KEYS.iter().filter(|p| p.value >= HIGH_CARD_BASE) {
            let mask = PRIMES
                .iter()
                .enumerate()
                .filter(|&(_, prime)| p.key % prime == 0)
                .fold(0, |m, (r, _)| m | 1 << r);

            assert_eq!(distinct_value(mask, HIGH_CARD_BASE), p.value);
            assert_eq!(
                distinct_value(mask, FLUSH_BASE),
                p.value - HIGH_CARD_BASE + FLUSH_BASE
            );
            checked += 1;
        }

        assert_eq!(checked, 1277);
    }
}
