//! Five-card board enumeration over the unseen-card pool.
//!
//! Boards are strictly increasing index tuples into the pool. The successor
//! step advances the lowest position that can move without colliding with
//! its right neighbour (the last one is bounded by the pool size) and resets
//! every position to its left to 0, 1, 2, ... Starting from (0, 1, 2, 3, 4)
//! this visits every 5-subset exactly once.
//!
//! That order is the one of the combinatorial number system, where
//! `(c0, .., c4)` has rank `C(c0, 1) + C(c1, 2) + .. + C(c4, 5)`, so any
//! position in the sequence can be reached directly by unranking (see
//! Theorem L pg. 260 Knuth 4a). Parallel drivers use this to split the
//! space into contiguous ranges.

pub const BOARD_SIZE: usize = 5;

const MAX_POOL: usize = 52;

/// nck(n, k) for n <= 52 and k <= 5.
const fn make_nck() -> [[u64; BOARD_SIZE + 1]; MAX_POOL + 1] {
    let mut t = [[0u64; BOARD_SIZE + 1]; MAX_POOL + 1];
    t[0][0] = 1;

    let mut n = 1;
    while n <= MAX_POOL {
        t[n][0] = 1;
        let mut k = 1;
        while k <= BOARD_SIZE {
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }
        n += 1;
    }

    t
}

const NCKS: [[u64; BOARD_SIZE + 1]; MAX_POOL + 1] = make_nck();

/// Binomial coefficient, zero when k > n.
#[inline]
pub fn nck(n: usize, k: usize) -> u64 {
    assert!(n <= MAX_POOL, "n={n} must be 0 <= n <= {MAX_POOL}");
    assert!(k <= BOARD_SIZE, "k={k} must be 0 <= k <= {BOARD_SIZE}");
    NCKS[n][k]
}

/// Position of `board` in the enumeration order.
pub fn rank_of(board: &[usize; BOARD_SIZE]) -> u64 {
    board
        .iter()
        .enumerate()
        .map(|(i, &c)| nck(c, i + 1))
        .sum()
}

/// The `nth` board in enumeration order.
pub fn nth_board(mut nth: u64) -> [usize; BOARD_SIZE] {
    let mut out = [0; BOARD_SIZE];
    for k in (0..BOARD_SIZE).rev() {
        // Largest c with nck(c, k + 1) <= nth.
        let mut c = k;
        while c < MAX_POOL && nck(c + 1, k + 1) <= nth {
            c += 1;
        }
        out[k] = c;
        nth -= nck(c, k + 1);
    }
    out
}

/// Iterator over every 5-subset of `0..pool`.
#[derive(Debug, Clone)]
pub struct Combinations {
    pool: usize,
    indices: [usize; BOARD_SIZE],
    done: bool,
}

impl Combinations {
    pub fn new(pool: usize) -> Self {
        Self::starting_at(pool, 0)
    }

    /// Resume the enumeration at position `nth`.
    pub fn starting_at(pool: usize, nth: u64) -> Self {
        assert!(pool <= MAX_POOL, "pool of {pool} cards exceeds the deck");
        Combinations {
            pool,
            indices: nth_board(nth),
            done: nth >= Self::total(pool),
        }
    }

    /// Number of boards over a pool of `pool` cards.
    pub fn total(pool: usize) -> u64 {
        nck(pool, BOARD_SIZE)
    }

    /// Move to the successor, returns false when there is none.
    fn advance(&mut self) -> bool {
        let idx = &mut self.indices;
        for i in 0..BOARD_SIZE {
            let limit = if i == BOARD_SIZE - 1 {
                self.pool - 1
            } else {
                idx[i + 1] - 1
            };
            if idx[i] < limit {
                idx[i] += 1;
                for (j, slot) in idx.iter_mut().enumerate().take(i) {
                    *slot = j;
                }
                return true;
            }
        }
        false
    }
}

impl Iterator for Combinations {
    type Item = [usize; BOARD_SIZE];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices;
        self.done = !self.advance();
        Some(current)
    }
}
