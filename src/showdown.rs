//! Heads-up showdown resolution.
//!
//! Categories are compared first; hands of the same category go to the
//! matching tie-break. All comparisons are from player 1's point of view:
//! `Ordering::Greater` means player 1 holds the better hand.

use std::cmp::Ordering;

use serde::Serialize;

use crate::hand_evaluator::{Category, ClassifiedHand};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    Player1,
    Player2,
    Tie,
}

impl From<Ordering> for Outcome {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Greater => Outcome::Player1,
            Ordering::Less => Outcome::Player2,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

impl Outcome {
    /// The same result seen from the other seat.
    pub fn swapped(self) -> Outcome {
        match self {
            Outcome::Player1 => Outcome::Player2,
            Outcome::Player2 => Outcome::Player1,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

/// Decide a showdown between two classified hands.
pub fn resolve(h1: &ClassifiedHand, h2: &ClassifiedHand) -> Outcome {
    compare_hands(h1, h2).into()
}

pub fn compare_hands(h1: &ClassifiedHand, h2: &ClassifiedHand) -> Ordering {
    let (c1, c2) = (h1.category(), h2.category());
    match c1.cmp(&c2) {
        Ordering::Equal => compare_same_category(c1, h1, h2),
        o => o,
    }
}

/// Tie-break for two hands already known to share `category`.
pub fn compare_same_category(
    category: Category,
    h1: &ClassifiedHand,
    h2: &ClassifiedHand,
) -> Ordering {
    match category {
        Category::StraightFlush => h1.straight_flush.cmp(&h2.straight_flush),
        Category::Quads => h1
            .quads
            .cmp(&h2.quads)
            .then_with(|| compare_kickers(h1, h2, 1)),
        Category::FullHouse => h1
            .trips
            .cmp(&h2.trips)
            .then_with(|| h1.pairs[0].cmp(&h2.pairs[0])),
        Category::Flush => compare_flushes(h1, h2),
        Category::Straight => h1.straight.cmp(&h2.straight),
        Category::Trips => h1
            .trips
            .cmp(&h2.trips)
            .then_with(|| compare_kickers(h1, h2, 2)),
        Category::TwoPair => h1
            .pairs
            .cmp(&h2.pairs)
            .then_with(|| compare_kickers(h1, h2, 1)),
        Category::Pair => h1.pairs[0]
            .cmp(&h2.pairs[0])
            .then_with(|| compare_kickers(h1, h2, 3)),
        Category::HighCard => compare_kickers(h1, h2, 5),
    }
}

/// Lexicographic over the first `n` kickers.
pub fn compare_kickers(h1: &ClassifiedHand, h2: &ClassifiedHand, n: usize) -> Ordering {
    h1.kickers[..n].cmp(&h2.kickers[..n])
}

/// Compare two flushes by their five highest cards. The Ace is checked first
/// since it sits at the bottom of the rank order in the bitmask.
pub fn compare_flushes(h1: &ClassifiedHand, h2: &ClassifiedHand) -> Ordering {
    let a1 = h1.flush.rank_count(1) > 0;
    let a2 = h2.flush.rank_count(1) > 0;
    if a1 != a2 {
        return a1.cmp(&a2);
    }

    let mut matched = usize::from(a1);
    for rank in (2..=13u8).rev() {
        if matched == 5 {
            break;
        }
        match (h1.flush.rank_count(rank) > 0, h2.flush.rank_count(rank) > 0) {
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (true, true) => matched += 1,
            (false, false) => {}
        }
    }
    Ordering::Equal
}
