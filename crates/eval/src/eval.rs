// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! This evaluator follows [Cactus Kev's][kevlink] approach: flushes and
//! straights are evaluated from the rank bits of the cards, all other hands
//! from the product of the cards primes using a [RankIndex].
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
use crate::{
    Hand,
    index::RankIndex,
    patterns::{distinct_value, straight_position},
    value::*,
};

/// Evaluates a 5 cards hand.
///
/// Panics if the hand rank pattern is missing from the index, this can only
/// happen with an index built from an incomplete keys table.
#[inline]
pub fn eval5(index: &RankIndex, hand: &Hand) -> HandValue {
    let [c1, c2, c3, c4, c5] = hand.cards().map(|c| c.id());

    let is_flush = c1 & c2 & c3 & c4 & c5 & 0xf000 != 0;
    let mask = (c1 | c2 | c3 | c4 | c5) >> 16;

    let value = match (is_flush, straight_position(mask)) {
        (true, Some(pos)) => STRAIGHT_FLUSH_BASE + pos,
        (true, None) => distinct_value(mask, FLUSH_BASE),
        (false, Some(pos)) => STRAIGHT_BASE + pos,
        (false, None) => {
            let key = (c1 & 0xff) * (c2 & 0xff) * (c3 & 0xff) * (c4 & 0xff) * (c5 & 0xff);
            match index.get(key) {
                Some(value) => value,
                None => panic!("Rank pattern {key} for {hand} is missing from the index"),
            }
        }
    };

    HandValue::from_raw(value)
}

impl HandValue {
    /// Evaluates a 5 cards hand using the shared [RankIndex].
    pub fn eval(hand: &Hand) -> HandValue {
        eval5(RankIndex::shared(), hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, Deck, Rank, Suit, patterns::RankPattern};
    use ahash::HashSet;
    use rand::prelude::*;

    fn eval(s: &str) -> HandValue {
        HandValue::eval(&s.parse::<Hand>().unwrap())
    }

    #[test]
    fn known_hands() {
        assert_eq!(eval("Ah Kh Qh Jh Th").value(), 1);
        assert_eq!(eval("5d 4d 3d 2d Ad").value(), 10);
        assert_eq!(eval("Ac Ad Ah As Kc").value(), 11);
        assert_eq!(eval("2c 2d 2h 3s 3c").value(), 322);
        assert_eq!(eval("Ah Kh Qh Jh 9h").value(), 323);
        assert_eq!(eval("7s 5s 4s 3s 2s").value(), 1599);
        assert_eq!(eval("Ac Kd Qs Jh Tc").value(), 1600);
        assert_eq!(eval("5c 4d 3s 2h Ac").value(), 1609);
        assert_eq!(eval("Ac Ad As Kh Qc").value(), 1610);
        assert_eq!(eval("2c 2d 3s 3h 4c").value(), 3325);
        assert_eq!(eval("Ac Ad Ks Qh Jc").value(), 3326);
        assert_eq!(eval("Ac Kd Qs Jh 9c").value(), 6186);
        assert_eq!(eval("7c 5d 4s 3h 2c").value(), 7462);
    }

    #[test]
    fn hand_ranks() {
        let hands = [
            ("7c 5d 4s 3h 2c", HandRank::HighCard),
            ("Kc Kd 9s 5h 2c", HandRank::OnePair),
            ("Kc Kd 9s 9h 2c", HandRank::TwoPair),
            ("Kc Kd Ks 9h 2c", HandRank::ThreeOfAKind),
            ("9c Td Js Qh Kc", HandRank::Straight),
            ("Kc 9c 7c 5c 2c", HandRank::Flush),
            ("Kc Kd Ks 9h 9c", HandRank::FullHouse),
            ("Kc Kd Ks Kh 9c", HandRank::FourOfAKind),
            ("9d Td Jd Qd Kd", HandRank::StraightFlush),
        ];

        for (s, rank) in hands {
            assert_eq!(eval(s).rank(), rank, "{s}");
        }

        // Each category beats the one below regardless of kickers.
        for w in hands.windows(2) {
            assert!(eval(w[1].0) > eval(w[0].0), "{} > {}", w[1].0, w[0].0);
        }
    }

    #[test]
    fn wheel() {
        let wheel = eval("Ah 2d 3s 4h 5c");
        let six_high = eval("2h 3d 4s 5h 6c");
        assert_eq!(wheel.rank(), HandRank::Straight);
        assert!(six_high > wheel);

        // The wheel beats three of a kind.
        assert!(wheel > eval("Ac Ad As Kh Qc"));

        // Same for straight flushes.
        let wheel = eval("Ah 2h 3h 4h 5h");
        let six_high = eval("2s 3s 4s 5s 6s");
        assert_eq!(wheel.rank(), HandRank::StraightFlush);
        assert!(six_high > wheel);
        assert!(wheel > eval("Ac Ad Ah As Kc"));
    }

    #[test]
    fn flush_vs_others() {
        let flush = eval("2h 3h 4h 6h 8h");
        assert_eq!(flush.rank(), HandRank::Flush);
        assert!(flush > eval("2c 3d 4s 6h 8c"));
        assert!(flush > eval("Ac Kd Qs Jh 9c"));
        assert!(flush > eval("Ac Kd Qs Jh Tc"));
        assert!(flush < eval("2c 3c 4c 5c 6c"));
        assert!(flush < eval("2c 2d 2h 3s 3c"));
    }

    #[test]
    fn same_ranks_different_suits() {
        let suits = Suit::suits().collect::<Vec<_>>();
        let ranks = [Rank::King, Rank::Nine, Rank::Seven, Rank::Four, Rank::Deuce];

        let values = suits
            .iter()
            .map(|&s| {
                let cards = ranks.map(|r| Card::new(r, s));
                HandValue::eval(&Hand::new(cards).unwrap())
            })
            .collect::<HashSet<_>>();
        assert_eq!(values.len(), 1);

        // Mixed suits with same ranks.
        let a = eval("Kc 9d 7h 4s 2c");
        let b = eval("Kh 9s 7d 4c 2d");
        assert_eq!(a, b);
        assert!(values.into_iter().all(|v| v > a));
    }

    #[test]
    fn permutation_invariance() {
        let mut rng = rand::rng();

        for _ in 0..1_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let mut cards = (0..Hand::SIZE)
                .map(|_| deck.deal().unwrap().to_string())
                .collect::<Vec<_>>();
            assert_eq!(deck.count(), Deck::SIZE - Hand::SIZE);

            let value = eval(&cards.join(" "));
            for _ in 0..10 {
                cards.shuffle(&mut rng);
                assert_eq!(eval(&cards.join(" ")), value);
            }
        }
    }

    #[test]
    fn all_hands() {
        let index = RankIndex::shared();
        let mut counts = [0usize; 9];
        let mut values = HashSet::default();

        Deck::default().for_each_hand(|hand| {
            let value = eval5(index, hand);
            counts[value.rank() as usize] += 1;
            values.insert(value);
        });

        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
        assert_eq!(counts[HandRank::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandRank::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandRank::TwoPair as usize], 123_552);
        assert_eq!(counts[HandRank::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandRank::Straight as usize], 10_200);
        assert_eq!(counts[HandRank::Flush as usize], 5_108);
        assert_eq!(counts[HandRank::FullHouse as usize], 3_744);
        assert_eq!(counts[HandRank::FourOfAKind as usize], 624);
        assert_eq!(counts[HandRank::StraightFlush as usize], 40);

        assert_eq!(values.len(), NUM_VALUES as usize);
    }

    #[test]
    fn concurrent_eval() {
        let mut hands = Vec::new();
        Deck::default().sample(4_000, |hand| hands.push(*hand));
        let expected = hands.iter().map(HandValue::eval).collect::<Vec<_>>();

        let values = std::thread::scope(|s| {
            let tasks = hands
                .chunks(500)
                .map(|chunk| {
                    s.spawn(move || chunk.iter().map(HandValue::eval).collect::<Vec<_>>())
                })
                .collect::<Vec<_>>();

            tasks
                .into_iter()
                .flat_map(|t| t.join().unwrap())
                .collect::<Vec<_>>()
        });

        assert_eq!(values, expected);
    }

    #[test]
    #[should_panic(expected = "missing from the index")]
    fn missing_pattern() {
        let keys = [RankPattern { key: 2, value: 1 }];
        let index = RankIndex::new(1, &keys).unwrap();
        eval5(&index, &"Ac Ad Ks Qh Jc".parse().unwrap());
    }
}
