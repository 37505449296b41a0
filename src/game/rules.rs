//! Outcome Rules
//!
//! Derives the full win/lose/draw relation of an odd move set from one
//! cyclic-distance rule instead of a per-pair table.
//!
//! ## The Rule
//!
//! Moves are indexed `0..N` in the order supplied. For distinct `i`, `j`
//! let `d = (j - i) mod N`:
//!
//! ```text
//! 1 <= d <= (N-1)/2   =>  j beats i
//! otherwise           =>  i beats j
//! ```
//!
//! Every move therefore beats the `(N-1)/2` moves just before it in cyclic
//! order and loses to the `(N-1)/2` just after it. With
//! `[Rock, Paper, Scissors]` this gives Paper > Rock, Scissors > Paper,
//! Rock > Scissors; with `[Rock, Spock, Paper, Lizard, Scissors]` it gives
//! the usual Rock-Paper-Scissors-Lizard-Spock relation.

use std::fmt;

use crate::game::moves::MoveSet;

/// Result of a pairing, from the first move's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// First move beats the second.
    Win,
    /// First move loses to the second.
    Lose,
    /// Same move.
    Draw,
}

impl Outcome {
    /// Same pairing seen from the other side.
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Draw => Self::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Win => "Win",
            Self::Lose => "Lose",
            Self::Draw => "Draw",
        };
        f.pad(s)
    }
}

/// Outcome of move `i` against move `j` in a set of `n` moves.
///
/// `n` must be odd; `i` and `j` must be below `n`.
#[inline]
pub fn cyclic_outcome(n: usize, i: usize, j: usize) -> Outcome {
    if i == j {
        return Outcome::Draw;
    }
    let half = (n - 1) / 2;
    let d = (j + n - i) % n;
    if (1..=half).contains(&d) {
        Outcome::Lose
    } else {
        Outcome::Win
    }
}

/// Complete N×N outcome relation for one move set.
///
/// Row = first move, column = second move. Built once per round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeTable {
    moves: MoveSet,
    cells: Vec<Outcome>,
}

impl OutcomeTable {
    /// The move set this table was built for.
    #[inline]
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Number of moves (rows and columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.moves.len()
    }

    /// Outcome by index. Identical indices are always `Draw`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn outcome_at(&self, i: usize, j: usize) -> Outcome {
        if i == j {
            return Outcome::Draw;
        }
        self.cells[i * self.size() + j]
    }

    /// Outcome by name. Identical names are `Draw` before any lookup;
    /// `None` if a name is not in the set.
    pub fn outcome(&self, a: &str, b: &str) -> Option<Outcome> {
        if a == b {
            return self.moves.contains(a).then_some(Outcome::Draw);
        }
        let i = self.moves.index_of(a)?;
        let j = self.moves.index_of(b)?;
        Some(self.outcome_at(i, j))
    }

    /// One row of the table: move `i` against every move in order.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    pub fn row(&self, i: usize) -> &[Outcome] {
        let n = self.size();
        &self.cells[i * n..(i + 1) * n]
    }
}

/// Build the outcome table for a validated move set.
///
/// `MoveSet` can only hold an odd number ≥ 3 of unique names, so this
/// cannot fail; invalid input is rejected by `MoveSet::new`.
pub fn build_outcome_table(moves: &MoveSet) -> OutcomeTable {
    let n = moves.len();
    let mut cells = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            cells.push(cyclic_outcome(n, i, j));
        }
    }
    OutcomeTable {
        moves: moves.clone(),
        cells,
    }
}

/// Free-function lookup: outcome of `a` against `b`.
#[inline]
pub fn get_outcome(table: &OutcomeTable, a: &str, b: &str) -> Option<Outcome> {
    table.outcome(a, b)
}

// =============================================================================
// TESTS
// =============================================================================
