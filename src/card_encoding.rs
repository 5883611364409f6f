//! Maps between `Card` structs and dense u8 indices (0-51).
//!
//! Encoding: index = (rank - 1) * 4 + suit
//!   rank: 1=Ace, 2=Two, ..., 13=King
//!   suit: 0=Spades, 1=Clubs, 2=Hearts, 3=Diamonds
//!
//! The four suits of a rank sit in one 4-bit block, so bit `4 * (rank - 1)`
//! starts the block for `rank` and every 4th bit belongs to one suit.

use itertools::Itertools;

use crate::cards::{parse_card, Card, ALL_RANKS, ALL_SUITS};
use crate::error::{HuError, HuResult};

pub const DECK_SIZE: usize = 52;

pub fn card_to_index(card: &Card) -> u8 {
    (card.rank as u8 - 1) * 4 + card.suit as u8
}

pub fn index_to_card(index: u8) -> Card {
    debug_assert!((index as usize) < DECK_SIZE);
    Card::new(ALL_RANKS[(index / 4) as usize], ALL_SUITS[(index % 4) as usize])
}

/// Token -> index.
pub fn decode(token: &str) -> HuResult<u8> {
    parse_card(token).map(|c| card_to_index(&c))
}

/// Index -> canonical token.
pub fn encode(index: u8) -> String {
    index_to_card(index).to_string()
}

/// Parse exactly two tokens into a pocket.
pub fn parse_pocket<S: AsRef<str>>(tokens: &[S]) -> HuResult<[Card; 2]> {
    if tokens.len() != 2 {
        return Err(HuError::WrongCardCount {
            expected: 2,
            got: tokens.len(),
        });
    }
    Ok([parse_card(tokens[0].as_ref())?, parse_card(tokens[1].as_ref())?])
}

/// Fails with `DuplicateCard` naming the first repeated card.
pub fn ensure_distinct(cards: &[Card]) -> HuResult<()> {
    match cards.iter().duplicates().next() {
        Some(dup) => Err(HuError::DuplicateCard(dup.to_string())),
        None => Ok(()),
    }
}

/// Build a full deck (0-51) excluding the given dead cards, ascending.
pub fn remaining_deck(dead: &[u8]) -> Vec<u8> {
    let mut dead_set = [false; DECK_SIZE];
    for &d in dead {
        dead_set[d as usize] = true;
    }
    (0..DECK_SIZE as u8).filter(|&c| !dead_set[c as usize]).collect()
}
