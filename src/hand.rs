//! Bit-packed hand representation.
//!
//! Bit `i` is set iff the card with dense index `i` (see `card_encoding`) is
//! present. Ranks occupy 4-bit blocks, suits are every 4th bit.

use std::fmt;
use std::ops::BitOr;

use itertools::Itertools;

use crate::card_encoding::{card_to_index, encode, DECK_SIZE};
use crate::cards::{Card, Suit};

/// Every spade position; shift left by the suit offset for the other suits.
const SPADES_MASK: u64 = 0x1_1111_1111_1111;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hand(pub u64);

impl Hand {
    pub const EMPTY: Hand = Hand(0);

    #[inline]
    pub fn from_index(index: u8) -> Hand {
        debug_assert!((index as usize) < DECK_SIZE);
        Hand(1 << index)
    }

    pub fn from_indices(indices: &[u8]) -> Hand {
        indices
            .iter()
            .fold(Hand::EMPTY, |h, &i| h | Hand::from_index(i))
    }

    pub fn from_cards(cards: &[Card]) -> Hand {
        cards
            .iter()
            .fold(Hand::EMPTY, |h, c| h | Hand::from_index(card_to_index(c)))
    }

    #[inline]
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, index: u8) -> bool {
        self.0 & (1 << index) != 0
    }

    /// Number of suits present for `rank` (1..=13, Ace is 1).
    #[inline]
    pub fn rank_count(self, rank: u8) -> u32 {
        debug_assert!((1..=13).contains(&rank), "rank {} out of range", rank);
        ((self.0 >> (4 * (rank - 1))) & 0xf).count_ones()
    }

    /// The sub-hand restricted to one suit.
    #[inline]
    pub fn suit_mask(self, suit: Suit) -> Hand {
        Hand(self.0 & (SPADES_MASK << suit as u8))
    }

    /// Pocket ∪ board. The two must be disjoint.
    #[inline]
    pub fn union(self, other: Hand) -> Hand {
        assert_eq!(self.0 & other.0, 0, "overlapping hands {} and {}", self, other);
        Hand(self.0 | other.0)
    }

    /// Dense indices of the cards present, ascending.
    pub fn indices(self) -> impl Iterator<Item = u8> {
        (0..DECK_SIZE as u8).filter(move |&i| self.contains(i))
    }
}

impl BitOr for Hand {
    type Output = Hand;

    #[inline]
    fn bitor(self, rhs: Hand) -> Hand {
        Hand(self.0 | rhs.0)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.indices().map(encode).join(" "))
    }
}
