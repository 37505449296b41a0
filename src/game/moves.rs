//! Move Set Definition
//!
//! An ordered, duplicate-free list of move names with odd length ≥ 3.
//! Only a validated `MoveSet` can exist, so everything downstream
//! (outcome table, commitment, round) can rely on the invariants.

use std::collections::BTreeSet;
use thiserror::Error;

use crate::MIN_MOVES;

/// Reasons a list of move names is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveSetError {
    /// Fewer than three moves supplied.
    #[error("at least {min} moves are required, got {got}")]
    TooFew {
        /// Minimum accepted count.
        min: usize,
        /// Count supplied.
        got: usize,
    },

    /// An even number of moves supplied.
    #[error("the number of moves must be odd, got {got}")]
    EvenCount {
        /// Count supplied.
        got: usize,
    },

    /// A name is empty or has leading or trailing whitespace.
    #[error("move names must be non-empty without surrounding spaces, got '{name}'")]
    InvalidName {
        /// Offending name.
        name: String,
    },

    /// The same name appears more than once.
    #[error("all moves must be unique, '{name}' is repeated")]
    Duplicate {
        /// First repeated name.
        name: String,
    },
}

/// Validated, immutable move list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    moves: Vec<String>,
}

impl MoveSet {
    /// Validate and build a move set.
    ///
    /// Count checks run before the name checks, so `["a", "a"]`
    /// reports `TooFew` rather than `Duplicate`. Names must survive the
    /// whitespace trim applied to console input, or they could only be
    /// picked by number.
    pub fn new<I, S>(moves: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();

        if moves.len() < MIN_MOVES {
            return Err(MoveSetError::TooFew { min: MIN_MOVES, got: moves.len() });
        }
        if moves.len() % 2 == 0 {
            return Err(MoveSetError::EvenCount { got: moves.len() });
        }

        let mut seen = BTreeSet::new();
        for name in &moves {
            if name.is_empty() || name.trim() != name {
                return Err(MoveSetError::InvalidName { name: name.clone() });
            }
            if !seen.insert(name.as_str()) {
                return Err(MoveSetError::Duplicate { name: name.clone() });
            }
        }

        Ok(Self { moves })
    }

    /// Number of moves (always odd, ≥ 3).
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false; kept for the `len` / `is_empty` pairing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Move name at a 0-based index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.moves.get(index).map(String::as_str)
    }

    /// 0-based index of a move name (case-sensitive).
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.moves.iter().position(|m| m == name)
    }

    /// Whether the set contains this exact name.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Iterate names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(String::as_str)
    }

    /// Length of the longest name in characters.
    pub fn max_name_width(&self) -> usize {
        self.moves.iter().map(|m| m.chars().count()).max().unwrap_or(0)
    }
}

// =============================================================================
// TESTS
// =============================================================================
