//! Full-enumeration equity tests.

use approx::assert_relative_eq;

use hu_equity::combinations::Combinations;
use hu_equity::equity::{Completeness, EnumerationConfig, Matchup};
use hu_equity::hand_evaluator::Category;

fn matchup(p1: [&str; 2], p2: [&str; 2]) -> Matchup {
    Matchup::parse(&p1, &p2).unwrap()
}

// ---------------------------------------------------------------------------
// Exhaustiveness
// ---------------------------------------------------------------------------

#[test]
fn visits_every_board_once() {
    let m = matchup(["AS", "AH"], ["KS", "KH"]);
    let r = m.evaluate(&EnumerationConfig::default()).unwrap();

    assert_eq!(r.completeness, Completeness::Exact);
    assert!(r.is_exact());
    assert_eq!(r.iterations, 1_712_304);
    assert_eq!(Combinations::total(48), 1_712_304);

    let t = &r.tally;
    assert_eq!(t.p1_wins + t.p2_wins + t.ties, 1_712_304);
    for player in 0..2 {
        let made: u64 = Category::ALL
            .iter()
            .map(|&c| t.category_count(player, c))
            .sum();
        assert_eq!(made, 1_712_304);
    }
    // Pocket aces never end below one pair.
    assert_eq!(t.category_count(0, Category::HighCard), 0);

    assert_relative_eq!(r.p1_win + r.p2_win + r.tie, 100.0, epsilon = 1e-9);
}

// ---------------------------------------------------------------------------
// Known baseline
// ---------------------------------------------------------------------------

#[test]
fn aces_versus_kings_baseline() {
    let m = matchup(["AS", "AH"], ["KS", "KH"]);
    let r = m.evaluate(&EnumerationConfig::default()).unwrap();

    assert!(
        r.p1_win > 80.0 && r.p1_win < 90.0,
        "AA vs KK should be 80-90%, got {:.2}%",
        r.p1_win
    );
    assert!(r.tie < 1.0, "ties should be rare, got {:.2}%", r.tie);
    assert!(r.equity(0) > r.equity(1));
    assert_relative_eq!(r.equity(0) + r.equity(1), 100.0, epsilon = 1e-9);
}

// ---------------------------------------------------------------------------
// Symmetry and partitioning
// ---------------------------------------------------------------------------

#[test]
fn swapping_seats_swaps_wins() {
    let m = matchup(["AC", "KD"], ["QH", "QS"]);
    let r = m.evaluate(&EnumerationConfig::default()).unwrap();
    let s = m.swapped().evaluate(&EnumerationConfig::default()).unwrap();

    assert_eq!(r.tally.p1_wins, s.tally.p2_wins);
    assert_eq!(r.tally.p2_wins, s.tally.p1_wins);
    assert_eq!(r.tally.ties, s.tally.ties);
    assert_eq!(r.tally.categories[0], s.tally.categories[1]);
    assert_relative_eq!(r.tie, s.tie);
}

#[test]
fn chunking_does_not_change_the_result() {
    let m = matchup(["7S", "6S"], ["AD", "KC"]);
    let coarse = EnumerationConfig {
        chunks: 7,
        threads: Some(2),
        ..Default::default()
    };
    let fine = EnumerationConfig {
        chunks: 1_000,
        ..Default::default()
    };

    let a = m.evaluate(&coarse).unwrap();
    let b = m.evaluate(&fine).unwrap();
    assert_eq!(a.tally, b.tally);
    assert!(a.is_exact() && b.is_exact());
}

// ---------------------------------------------------------------------------
// Partial results
// ---------------------------------------------------------------------------

#[test]
fn expired_deadline_never_claims_exact() {
    let m = matchup(["AS", "AH"], ["KS", "KH"]);
    let config = EnumerationConfig {
        deadline: Some(std::time::Duration::ZERO),
        ..Default::default()
    };
    let r = m.evaluate(&config).unwrap();

    match r.completeness {
        Completeness::Partial { visited, total } => {
            assert_eq!(visited, r.iterations);
            assert_eq!(total, 1_712_304);
            assert!(visited < total);
        }
        Completeness::Exact => panic!("a zero deadline cannot produce an exact result"),
    }

    let json = serde_json::to_string(&r).unwrap();
    assert!(json.contains("\"status\":\"partial\""));
}
