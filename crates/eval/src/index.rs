// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Perfect hash from rank pattern keys to hand values.
//!
//! The index keeps a bitset with one bit for each possible key and the
//! running count of set bits before each 64 bits word, the position of a key
//! among all keys is the prefix count of its word plus the set bits below it in
//! the word. That position addresses a dense table of values so that a lookup
//! is a word read, a popcount, and two table reads.
use log::debug;
use std::{sync::LazyLock, time::Instant};
use thiserror::Error;

use crate::patterns::{KEYS, NUM_KEYS, RankPattern};

/// Error returned when building an index from an invalid keys table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The table does not have the expected number of keys.
    #[error("expected {expected} keys, found {found}")]
    KeyCount {
        /// The expected number of keys.
        expected: usize,
        /// The number of keys in the table.
        found: usize,
    },
    /// A key appears more than once.
    #[error("duplicate key {0}")]
    DuplicateKey(u32),
}

/// The index shared by all evaluations.
static SHARED: LazyLock<RankIndex> = LazyLock::new(|| match RankIndex::new(NUM_KEYS, &KEYS) {
    Ok(index) => index,
    Err(e) => panic!("Rank index integrity check failed: {e}"),
});

/// A perfect hash from rank pattern keys to hand values.
///
/// The bitset spans all keys up to the largest one, for the 6165 patterns of
/// [KEYS] the largest key is A-A-A-A-K (`41^4 * 37`) so the index holds
/// 1,633,644 words, about 13 MB of bits and 6.5 MB of prefix counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankIndex {
    /// One bit for each key.
    bits: Vec<u64>,
    /// The number of bits set before each word.
    prefix: Vec<u32>,
    /// The values in keys order.
    values: Vec<u16>,
}

impl RankIndex {
    /// Builds an index from a table of keys, fails if the table does not have
    /// `expected` keys or if a key appears more than once.
    pub fn new(expected: usize, keys: &[RankPattern]) -> Result<Self, IndexError> {
        check_count(expected, keys)?;

        let now = Instant::now();
        let mut bits = vec![0u64; num_words(keys)];
        set_bits(&mut bits, keys)?;

        let index = Self::from_bits(bits, keys);
        debug!(
            "Built rank index with {} keys and {} words in {:?}",
            index.len(),
            index.bits.len(),
            now.elapsed()
        );

        Ok(index)
    }

    /// Returns the index built from [KEYS] shared by all evaluations.
    ///
    /// The index is built on first use, panics if the keys table fails the
    /// integrity checks.
    pub fn shared() -> &'static RankIndex {
        &SHARED
    }

    /// The number of keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Checks if the index has no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Checks if a key is in the index.
    #[inline]
    pub fn contains(&self, key: u32) -> bool {
        let (word, bit) = split(key);
        self.bits
            .get(word)
            .is_some_and(|w| (w >> bit) & 1 == 1)
    }

    /// Returns the value for a key or `None` if the key is not in the index.
    #[inline]
    pub fn get(&self, key: u32) -> Option<u16> {
        let (word, bit) = split(key);
        let w = *self.bits.get(word)?;
        if (w >> bit) & 1 == 0 {
            return None;
        }

        let below = (w & ((1u64 << bit) - 1)).count_ones();
        let pos = self.prefix[word] + below;
        Some(self.values[pos as usize])
    }

    /// Computes prefix counts and places values given the keys bitset.
    fn from_bits(bits: Vec<u64>, keys: &[RankPattern]) -> Self {
        let mut prefix = Vec::with_capacity(bits.len());
        let mut running = 0;
        for w in &bits {
            prefix.push(running);
            running += w.count_ones();
        }

        let mut index = Self {
            bits,
            prefix,
            values: vec![0; keys.len()],
        };

        for p in keys {
            let (word, bit) = split(p.key);
            let below = (index.bits[word] & ((1u64 << bit) - 1)).count_ones();
            let pos = index.prefix[word] + below;
            index.values[pos as usize] = p.value;
        }

        index
    }
}

#[cfg(feature = "parallel")]
impl RankIndex {
    /// Builds an index using `num_tasks` parallel tasks.
    ///
    /// Each task sets the bits for a slice of the keys, the partial bitsets are
    /// merged in task order so that the index is the same as the one built by
    /// [RankIndex::new].
    ///
    /// Panics if `num_tasks` is zero.
    pub fn par_new(
        num_tasks: usize,
        expected: usize,
        keys: &[RankPattern],
    ) -> Result<Self, IndexError> {
        assert!(num_tasks > 0);
        check_count(expected, keys)?;

        let now = Instant::now();
        let words = num_words(keys);
        let keys_per_task = keys.len().div_ceil(num_tasks).max(1);

        let parts = std::thread::scope(|s| {
            let handles = keys
                .chunks(keys_per_task)
                .map(|chunk| {
                    s.spawn(move || {
                        let mut bits = vec![0u64; words];
                        set_bits(&mut bits, chunk).map(|_| bits)
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect::<Vec<_>>()
        });

        let mut bits = vec![0u64; words];
        for part in parts {
            for (idx, (w, p)) in bits.iter_mut().zip(part?).enumerate() {
                let overlap = *w & p;
                if overlap != 0 {
                    let key = (idx * 64) as u32 + overlap.trailing_zeros();
                    return Err(IndexError::DuplicateKey(key));
                }

                *w |= p;
            }
        }

        let index = Self::from_bits(bits, keys);
        debug!(
            "Built rank index with {} keys and {} tasks in {:?}",
            index.len(),
            num_tasks,
            now.elapsed()
        );

        Ok(index)
    }
}

/// Splits a key into its word and bit positions.
#[inline]
fn split(key: u32) -> (usize, u32) {
    ((key >> 6) as usize, key & 63)
}

/// The number of words needed to hold the largest key.
fn num_words(keys: &[RankPattern]) -> usize {
    keys.iter().map(|p| split(p.key).0 + 1).max().unwrap_or(0)
}

fn check_count(expected: usize, keys: &[RankPattern]) -> Result<(), IndexError> {
    if keys.len() != expected {
        return Err(IndexError::KeyCount {
            expected,
            found: keys.len(),
        });
    }

    Ok(())
}

/// Sets the bits for the keys, fails on the first duplicate.
fn set_bits(bits: &mut [u64], keys: &[RankPattern]) -> Result<(), IndexError> {
    for p in keys {
        let (word, bit) = split(p.key);
        let mask = 1u64 << bit;
        if bits[word] & mask != 0 {
            return Err(IndexError::DuplicateKey(p.key));
        }

        bits[word] |= mask;
    }

    Ok(())
}
