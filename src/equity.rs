use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::card_encoding::{card_to_index, ensure_distinct, parse_pocket, remaining_deck};
use crate::cards::{parse_card, Card};
use crate::combinations::{Combinations, BOARD_SIZE};
use crate::error::{HuError, HuResult};
use crate::hand::Hand;
use crate::hand_evaluator::{Category, ClassifiedHand};
use crate::showdown::{resolve, Outcome};

/// How often a worker looks at the clock when a deadline is set.
const DEADLINE_CHECK_INTERVAL: u64 = 4096;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct EnumerationConfig {
    /// Dedicated pool size; `None` uses rayon's global pool.
    pub threads: Option<usize>,
    /// Number of contiguous board ranges handed to the workers.
    pub chunks: usize,
    /// Stop early and report a partial result once this much time has passed.
    pub deadline: Option<Duration>,
    pub parallel: bool,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        EnumerationConfig {
            threads: None,
            chunks: 256,
            deadline: None,
            parallel: true,
        }
    }
}

impl EnumerationConfig {
    pub fn sequential() -> Self {
        EnumerationConfig {
            parallel: false,
            ..Default::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Tally
// ---------------------------------------------------------------------------

/// Outcome counters, plus how often each player ended in each category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub p1_wins: u64,
    pub p2_wins: u64,
    pub ties: u64,
    /// `categories[player][category.index()]`.
    pub categories: [[u64; Category::COUNT]; 2],
}

impl Tally {
    #[inline]
    pub fn record(&mut self, outcome: Outcome, categories: [Category; 2]) {
        match outcome {
            Outcome::Player1 => self.p1_wins += 1,
            Outcome::Player2 => self.p2_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
        self.categories[0][categories[0].index()] += 1;
        self.categories[1][categories[1].index()] += 1;
    }

    pub fn iterations(&self) -> u64 {
        self.p1_wins + self.p2_wins + self.ties
    }

    pub fn merge(mut self, other: Tally) -> Tally {
        self.p1_wins += other.p1_wins;
        self.p2_wins += other.p2_wins;
        self.ties += other.ties;
        for (mine, theirs) in self.categories.iter_mut().zip(other.categories.iter()) {
            for (a, b) in mine.iter_mut().zip(theirs.iter()) {
                *a += b;
            }
        }
        self
    }

    pub fn category_count(&self, player: usize, category: Category) -> u64 {
        self.categories[player][category.index()]
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Completeness {
    /// Every board was visited.
    Exact,
    /// The run stopped at a deadline; percentages cover `visited` boards only.
    Partial { visited: u64, total: u64 },
}

#[derive(Debug, Clone, Serialize)]
pub struct EquityResult {
    pub pockets: [[Card; 2]; 2],
    /// Percentages in [0, 100].
    pub p1_win: f64,
    pub p2_win: f64,
    pub tie: f64,
    pub iterations: u64,
    pub elapsed_secs: f64,
    pub completeness: Completeness,
    pub tally: Tally,
}

impl EquityResult {
    fn new(pockets: [[Card; 2]; 2], tally: Tally, total: u64, elapsed: Duration) -> Self {
        let iterations = tally.iterations();
        let pct = |n: u64| {
            if iterations == 0 {
                0.0
            } else {
                n as f64 * 100.0 / iterations as f64
            }
        };
        let completeness = if iterations == total {
            Completeness::Exact
        } else {
            Completeness::Partial {
                visited: iterations,
                total,
            }
        };
        EquityResult {
            pockets,
            p1_win: pct(tally.p1_wins),
            p2_win: pct(tally.p2_wins),
            tie: pct(tally.ties),
            iterations,
            elapsed_secs: elapsed.as_secs_f64(),
            completeness,
            tally,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.completeness == Completeness::Exact
    }

    /// Win percentage plus half the ties, for player 0 or 1.
    pub fn equity(&self, player: usize) -> f64 {
        let win = if player == 0 { self.p1_win } else { self.p2_win };
        win + self.tie / 2.0
    }

    pub fn iterations_per_sec(&self) -> f64 {
        if self.elapsed_secs > 0.0 {
            self.iterations as f64 / self.elapsed_secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for EquityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P1 {:.2}% | P2 {:.2}% | Tie {:.2}% ({} boards",
            self.p1_win, self.p2_win, self.tie, self.iterations,
        )?;
        match self.completeness {
            Completeness::Exact => write!(f, ", exact)"),
            Completeness::Partial { visited, total } => {
                write!(f, ", PARTIAL {} of {})", visited, total)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Matchup
// ---------------------------------------------------------------------------

/// Per-worker classification records, overwritten on every board.
pub type Scratch = [ClassifiedHand; 2];

/// Two fixed pockets and the pool of unseen cards the boards are drawn from.
#[derive(Debug, Clone)]
pub struct Matchup {
    pockets: [[Card; 2]; 2],
    hands: [Hand; 2],
    pool: Vec<u8>,
}

impl Matchup {
    /// Fails with `DuplicateCard` unless the four cards are distinct.
    pub fn new(p1: [Card; 2], p2: [Card; 2]) -> HuResult<Self> {
        ensure_distinct(&[p1[0], p1[1], p2[0], p2[1]])?;

        let dead = [p1, p2].map(|p| p.map(|c| card_to_index(&c)));
        let pool = remaining_deck(dead.as_flattened());
        debug_assert_eq!(pool.len(), 48);

        Ok(Matchup {
            pockets: [p1, p2],
            hands: [Hand::from_cards(&p1), Hand::from_cards(&p2)],
            pool,
        })
    }

    /// Parse two pockets given as card tokens, e.g. `["AS", "AH"]`.
    pub fn parse<S: AsRef<str>>(p1: &[S], p2: &[S]) -> HuResult<Self> {
        Matchup::new(parse_pocket(p1)?, parse_pocket(p2)?)
    }

    /// Same cards, seats exchanged.
    pub fn swapped(&self) -> Matchup {
        Matchup {
            pockets: [self.pockets[1], self.pockets[0]],
            hands: [self.hands[1], self.hands[0]],
            pool: self.pool.clone(),
        }
    }

    pub fn pockets(&self) -> [[Card; 2]; 2] {
        self.pockets
    }

    /// Unseen card indices, ascending.
    pub fn pool(&self) -> &[u8] {
        &self.pool
    }

    pub fn total_boards(&self) -> u64 {
        Combinations::total(self.pool.len())
    }

    #[inline]
    fn board_hand(&self, board: &[usize; BOARD_SIZE]) -> Hand {
        board
            .iter()
            .fold(Hand::EMPTY, |h, &i| h | Hand::from_index(self.pool[i]))
    }

    /// Classify both players on `board` and decide the winner.
    ///
    /// Panics unless `board` holds exactly five cards, none of them in a pocket.
    #[inline]
    pub fn showdown(&self, board: Hand, scratch: &mut Scratch) -> (Outcome, [Category; 2]) {
        assert!(
            board.len() == BOARD_SIZE as u32 && board.0 & (self.hands[0] | self.hands[1]).0 == 0,
            "board {} must be five cards outside both pockets",
            board
        );
        scratch[0].classify(self.hands[0].union(board));
        scratch[1].classify(self.hands[1].union(board));
        (
            resolve(&scratch[0], &scratch[1]),
            [scratch[0].category(), scratch[1].category()],
        )
    }

    /// Showdown on an explicit board given as tokens.
    pub fn showdown_tokens<S: AsRef<str>>(&self, board: &[S]) -> HuResult<Outcome> {
        if board.len() != BOARD_SIZE {
            return Err(HuError::WrongCardCount {
                expected: BOARD_SIZE,
                got: board.len(),
            });
        }
        let cards = board
            .iter()
            .map(|t| parse_card(t.as_ref()))
            .collect::<HuResult<Vec<_>>>()?;

        let mut all = self.pockets.as_flattened().to_vec();
        all.extend_from_slice(&cards);
        ensure_distinct(&all)?;

        let mut scratch: Scratch = Default::default();
        Ok(self.showdown(Hand::from_cards(&cards), &mut scratch).0)
    }

    /// Visit `len` boards starting at position `start` of the enumeration.
    /// Returns the tally and whether the deadline cut the range short.
    fn run_range(&self, start: u64, len: u64, deadline: Option<Instant>) -> (Tally, bool) {
        let mut scratch: Scratch = Default::default();
        let mut tally = Tally::default();

        let boards = Combinations::starting_at(self.pool.len(), start).take(len as usize);
        for (i, board) in boards.enumerate() {
            if i as u64 % DEADLINE_CHECK_INTERVAL == 0
                && deadline.is_some_and(|d| Instant::now() >= d)
            {
                debug!("range at {} stopped after {} boards", start, i);
                return (tally, true);
            }
            let (outcome, categories) = self.showdown(self.board_hand(&board), &mut scratch);
            tally.record(outcome, categories);
        }

        debug!("range at {} done, {} boards", start, tally.iterations());
        (tally, false)
    }

    /// Run the enumeration as configured.
    pub fn evaluate(&self, config: &EnumerationConfig) -> HuResult<EquityResult> {
        let start = Instant::now();
        let deadline = config.deadline.map(|d| start + d);
        let total = self.total_boards();

        info!(
            "{} {} vs {} {}: {} boards, {}",
            self.pockets[0][0],
            self.pockets[0][1],
            self.pockets[1][0],
            self.pockets[1][1],
            total,
            if config.parallel { "parallel" } else { "sequential" },
        );

        let (tally, stopped) = if config.parallel {
            self.run_parallel(config, deadline)?
        } else {
            self.run_range(0, total, deadline)
        };

        let result = EquityResult::new(self.pockets, tally, total, start.elapsed());
        if stopped {
            warn!(
                "deadline reached, result covers {} of {} boards",
                result.iterations, total
            );
        }
        info!("{} in {:.3}s", result, result.elapsed_secs);
        Ok(result)
    }

    fn run_parallel(
        &self,
        config: &EnumerationConfig,
        deadline: Option<Instant>,
    ) -> HuResult<(Tally, bool)> {
        let total = self.total_boards();
        let chunks = config.chunks.max(1) as u64;
        let step = total.div_ceil(chunks).max(1);

        let ranges: Vec<(u64, u64)> = (0..chunks)
            .map(|i| (i * step, step.min(total.saturating_sub(i * step))))
            .filter(|&(_, len)| len > 0)
            .collect();

        let run = || {
            ranges
                .par_iter()
                .map(|&(s, len)| self.run_range(s, len, deadline))
                .reduce(
                    || (Tally::default(), false),
                    |a, b| (a.0.merge(b.0), a.1 || b.1),
                )
        };

        match config.threads {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| HuError::ThreadPool(e.to_string()))?;
                Ok(pool.install(run))
            }
            None => Ok(run()),
        }
    }
}
