//! Cross-validation of the bitmask classifier against a brute-force
//! best-of-21 five-card scorer on random deals.

use std::cmp::Ordering;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use hu_equity::card_encoding::decode;
use hu_equity::hand::Hand;
use hu_equity::hand_evaluator::{Category, ClassifiedHand};
use hu_equity::showdown::{compare_hands, compare_same_category};

// -------------------------------------------------------------------------
// Reference scorer
// -------------------------------------------------------------------------

/// (rank 2..=14, suit)
fn rank_suit(index: u8) -> (u8, u8) {
    let rank = index / 4 + 1;
    (if rank == 1 { 14 } else { rank }, index % 4)
}

fn score5(cards: &[u8]) -> (Category, Vec<u8>) {
    let rs: Vec<(u8, u8)> = cards.iter().map(|&c| rank_suit(c)).collect();
    let mut ranks: Vec<u8> = rs.iter().map(|&(r, _)| r).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let flush = rs.iter().all(|&(_, s)| s == rs[0].1);
    let distinct: Vec<u8> = ranks.iter().copied().dedup().collect();
    let straight = if distinct.len() == 5 && distinct[0] - distinct[4] == 4 {
        Some(distinct[0])
    } else if distinct == [14, 5, 4, 3, 2] {
        Some(5)
    } else {
        None
    };

    // (count, rank) sorted by count then rank, both descending.
    let groups: Vec<(usize, u8)> = ranks
        .iter()
        .dedup_with_count()
        .map(|(n, &r)| (n, r))
        .sorted_by(|a, b| b.cmp(a))
        .collect();
    let counts: Vec<usize> = groups.iter().map(|g| g.0).collect();
    let by_group: Vec<u8> = groups.iter().map(|g| g.1).collect();

    match (straight, flush, counts.as_slice()) {
        (Some(h), true, _) => (Category::StraightFlush, vec![h]),
        (_, _, [4, ..]) => (Category::Quads, by_group),
        (_, _, [3, 2]) => (Category::FullHouse, by_group),
        (_, true, _) => (Category::Flush, ranks),
        (Some(h), _, _) => (Category::Straight, vec![h]),
        (_, _, [3, ..]) => (Category::Trips, by_group),
        (_, _, [2, 2, ..]) => (Category::TwoPair, by_group),
        (_, _, [2, ..]) => (Category::Pair, by_group),
        _ => (Category::HighCard, ranks),
    }
}

fn best_of_seven(cards: &[u8]) -> (Category, Vec<u8>) {
    cards
        .iter()
        .copied()
        .combinations(5)
        .map(|five| score5(&five))
        .max()
        .unwrap()
}

fn classify(cards: &[u8]) -> ClassifiedHand {
    ClassifiedHand::new(Hand::from_indices(cards))
}

fn ids(tokens: &[&str]) -> Vec<u8> {
    tokens.iter().map(|t| decode(t).unwrap()).collect()
}

// -------------------------------------------------------------------------
// Cross-validation
// -------------------------------------------------------------------------

#[test]
fn random_hands_match_reference_category() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut deck: Vec<u8> = (0..52).collect();

    for _ in 0..20_000 {
        deck.shuffle(&mut rng);
        let seven = &deck[..7];
        let expected = best_of_seven(seven).0;
        let got = classify(seven).category();
        assert_eq!(got, expected, "hand {}", Hand::from_indices(seven));
    }
}

#[test]
fn random_showdowns_match_reference_ordering() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut deck: Vec<u8> = (0..52).collect();

    for _ in 0..20_000 {
        deck.shuffle(&mut rng);
        let board = &deck[4..9];
        let h1: Vec<u8> = deck[0..2].iter().chain(board).copied().collect();
        let h2: Vec<u8> = deck[2..4].iter().chain(board).copied().collect();

        let expected = best_of_seven(&h1).cmp(&best_of_seven(&h2));
        let got = compare_hands(&classify(&h1), &classify(&h2));
        assert_eq!(
            got,
            expected,
            "{} vs {}",
            Hand::from_indices(&h1),
            Hand::from_indices(&h2)
        );
    }
}

#[test]
fn comparison_is_antisymmetric() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut deck: Vec<u8> = (0..52).collect();

    for _ in 0..5_000 {
        deck.shuffle(&mut rng);
        let a = classify(&deck[..7]);
        let b = classify(&deck[7..14]);
        assert_eq!(compare_hands(&a, &b), compare_hands(&b, &a).reverse());
    }
}

// -------------------------------------------------------------------------
// Named scenarios
// -------------------------------------------------------------------------

#[test]
fn ace_flush_wins_regardless_of_other_ranks() {
    // Ace of hearts plus four hearts vs a king-high spade flush.
    let a = classify(&ids(&["AH", "2H", "3H", "4H", "6H", "2C", "3D"]));
    let b = classify(&ids(&["KS", "QS", "JS", "9S", "8S", "KD", "QC"]));
    assert_eq!(a.category(), Category::Flush);
    assert_eq!(b.category(), Category::Flush);
    assert_eq!(compare_same_category(Category::Flush, &a, &b), Ordering::Greater);
}

#[test]
fn wheel_is_the_lowest_straight() {
    let wheel = classify(&ids(&["AS", "2H", "3D", "4C", "5S", "9H", "JD"]));
    let six = classify(&ids(&["2S", "3H", "4D", "5C", "6S", "9H", "JD"]));
    let broadway = classify(&ids(&["AS", "KH", "QD", "JC", "TS", "2H", "4D"]));
    assert_eq!(wheel.category(), Category::Straight);
    assert_eq!(compare_hands(&six, &wheel), Ordering::Greater);
    assert_eq!(compare_hands(&broadway, &six), Ordering::Greater);
}

#[test]
fn steel_wheel_loses_to_six_high_straight_flush() {
    let steel = classify(&ids(&["AC", "2C", "3C", "4C", "5C", "KD", "KH"]));
    let six = classify(&ids(&["2D", "3D", "4D", "5D", "6D", "KC", "KH"]));
    assert_eq!(steel.category(), Category::StraightFlush);
    assert_eq!(six.category(), Category::StraightFlush);
    assert_eq!(compare_hands(&six, &steel), Ordering::Greater);
}
