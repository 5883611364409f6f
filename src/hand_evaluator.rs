//! Seven-card hand classifier.
//!
//! `ClassifiedHand` holds the discriminators of a 7-card hand: flush mask,
//! straight and straight-flush high card, quad/trip rank, the two best pair
//! ranks and up to five kickers (highest first). The record is meant to be
//! reused: `classify` overwrites every field, so one instance per worker is
//! enough for an entire enumeration.
//!
//! Rank values inside the record run 2..=14 with the Ace high, except
//! `straight`/`straight_flush` where a wheel (A-2-3-4-5) reports 5.

use serde::Serialize;

use crate::cards::ALL_SUITS;
use crate::hand::Hand;

pub const ACE_HIGH: u8 = 14;

/// Hand categories, weakest first so the derived `Ord` is hand strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    HighCard,
    Pair,
    TwoPair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
}

impl Category {
    pub const COUNT: usize = 9;

    /// Strongest first.
    pub const ALL: [Category; Category::COUNT] = [
        Category::StraightFlush,
        Category::Quads,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::Trips,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::StraightFlush => "Straight Flush",
            Category::Quads => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::Trips => "Three of a Kind",
            Category::TwoPair => "Two Pair",
            Category::Pair => "One Pair",
            Category::HighCard => "High Card",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifiedHand {
    pub hand: Hand,
    /// Cards of the flush suit, empty when there is no flush.
    pub flush: Hand,
    pub straight: u8,
    pub straight_flush: u8,
    pub quads: u8,
    pub trips: u8,
    /// Higher pair first.
    pub pairs: [u8; 2],
    /// Highest first, zero-padded.
    pub kickers: [u8; 5],
}

impl ClassifiedHand {
    pub fn new(hand: Hand) -> Self {
        let mut c = ClassifiedHand::default();
        c.classify(hand);
        c
    }

    /// Recompute every field for `hand`.
    pub fn classify(&mut self, hand: Hand) {
        assert_eq!(hand.len(), 7, "hand {} must hold 7 cards", hand);

        self.hand = hand;
        self.count_multiples();
        self.flush = find_flush(hand);
        self.straight = straight_high(hand);
        self.straight_flush = if self.flush.is_empty() {
            0
        } else {
            straight_high(self.flush)
        };
    }

    /// Best category, first matching condition wins.
    pub fn category(&self) -> Category {
        if self.straight_flush > 0 {
            Category::StraightFlush
        } else if self.quads > 0 {
            Category::Quads
        } else if self.trips > 0 && self.pairs[0] > 0 {
            Category::FullHouse
        } else if !self.flush.is_empty() {
            Category::Flush
        } else if self.straight > 0 {
            Category::Straight
        } else if self.trips > 0 {
            Category::Trips
        } else if self.pairs[1] > 0 {
            Category::TwoPair
        } else if self.pairs[0] > 0 {
            Category::Pair
        } else {
            Category::HighCard
        }
    }

    /// Rank-multiplicity scan, Two through Ace-high.
    fn count_multiples(&mut self) {
        self.quads = 0;
        self.trips = 0;
        self.pairs = [0; 2];
        self.kickers = [0; 5];

        let total = self.hand.len();
        let mut seen = 0;
        for rank in 2..=ACE_HIGH {
            let n = self.hand.rank_count(low_ace(rank));
            seen += n;
            match n {
                4 => self.quads = rank,
                3 => {
                    // Two trips: the lower one plays as the pair of a full house.
                    if self.trips > 0 {
                        self.pairs[0] = self.trips;
                    }
                    self.trips = rank;
                }
                2 => {
                    // Keep the two highest pairs; a displaced pair may still kick.
                    if self.pairs[1] > self.kickers[0] {
                        self.push_kicker(self.pairs[1]);
                    }
                    self.pairs[1] = self.pairs[0];
                    self.pairs[0] = rank;
                }
                1 => self.push_kicker(rank),
                _ => {}
            }
            if seen == total {
                break;
            }
        }

        if self.quads > 0 {
            if self.trips > 0 {
                self.kickers[0] = self.trips;
            }
            if self.pairs[0] > self.kickers[0] {
                self.kickers[0] = self.pairs[0];
            }
        }
    }

    /// Ranks arrive ascending, so prepending keeps the list highest-first.
    #[inline]
    fn push_kicker(&mut self, rank: u8) {
        self.kickers.copy_within(0..4, 1);
        self.kickers[0] = rank;
    }
}

#[inline]
fn low_ace(rank: u8) -> u8 {
    if rank == ACE_HIGH {
        1
    } else {
        rank
    }
}

/// Cards of the suit holding five or more, if any. Seven cards can hold at
/// most one such suit.
pub fn find_flush(hand: Hand) -> Hand {
    ALL_SUITS
        .iter()
        .map(|&s| hand.suit_mask(s))
        .find(|m| m.len() >= 5)
        .unwrap_or(Hand::EMPTY)
}

/// High card of the best straight in `hand`, 0 if none. Broadway reports 14,
/// the wheel reports 5.
pub fn straight_high(hand: Hand) -> u8 {
    let total = hand.len();
    let mut run = 0;
    let mut high = 0;
    let mut seen = 0;

    for rank in 1..=13u8 {
        let n = hand.rank_count(rank);
        if n > 0 {
            run += 1;
            if run >= 5 {
                high = rank;
            }
            seen += n;
        } else {
            run = 0;
        }
        if rank == 13 && run >= 4 && hand.rank_count(1) > 0 {
            return ACE_HIGH;
        }
        if seen == total {
            break;
        }
    }
    high
}
