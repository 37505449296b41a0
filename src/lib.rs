//! # Fair RPS
//!
//! Rock-paper-scissors generalized to any odd number of moves, against a
//! computer opponent that commits to its move with an HMAC before the
//! player chooses.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         FAIR RPS                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Primitives                               │
//! │  ├── rng.rs      - Secure randomness (OS CSPRNG)            │
//! │  └── hash.rs     - HMAC-SHA256 and hex                      │
//! │                                                             │
//! │  game/           - Rules and round flow                     │
//! │  ├── moves.rs    - Validated odd move set                   │
//! │  ├── rules.rs    - Cyclic outcome rule and table            │
//! │  ├── input.rs    - Console line parsing                     │
//! │  └── round.rs    - Round state machine                      │
//! │                                                             │
//! │  proof/          - Commit and reveal                        │
//! │  ├── commitment.rs - Key, move choice, commit, reveal       │
//! │  └── verify.rs   - Independent verification                 │
//! │                                                             │
//! │  cli/            - Console front end                        │
//! │  config.rs       - Environment configuration                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness Guarantee
//!
//! - The opponent move and key come from a CSPRNG before any input is read
//! - `HMAC(key, move)` is printed before the prompt
//! - The key is printed only after the result, so anyone can recompute
//!   the HMAC and confirm the opponent did not switch moves

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod proof;
pub mod cli;
pub mod config;

// Re-export commonly used types
pub use config::GameConfig;
pub use game::moves::{MoveSet, MoveSetError};
pub use game::rules::{build_outcome_table, get_outcome, Outcome, OutcomeTable};
pub use game::round::{Round, RoundPhase, Verdict};
pub use proof::commitment::{Commitment, RevealedKey, SecretKey};
pub use proof::verify::{verify_reveal, RevealRecord};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest playable move set
pub const MIN_MOVES: usize = 3;

/// Minimum MAC key length in bytes (256 bits)
pub const MIN_KEY_LEN: usize = 32;

/// Default MAC key length in bytes
pub const DEFAULT_KEY_LEN: usize = 32;

/// Largest configurable MAC key length in bytes
pub const MAX_KEY_LEN: usize = 1024;
