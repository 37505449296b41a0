//! Game Logic Module
//!
//! Everything about moves and who wins. Pure apart from the round's
//! use of the commitment protocol.
//!
//! ## Module Structure
//!
//! - `moves`: Validated move set
//! - `rules`: Cyclic outcome rule and outcome table
//! - `input`: Console line parsing
//! - `round`: Single round state machine

pub mod moves;
pub mod rules;
pub mod input;
pub mod round;

// Re-export key types
pub use moves::{MoveSet, MoveSetError};
pub use rules::{build_outcome_table, get_outcome, Outcome, OutcomeTable};
pub use input::{HumanInput, InputError};
pub use round::{AbortReason, Resolution, Round, RoundError, RoundPhase, RoundReveal, Step, Verdict};
