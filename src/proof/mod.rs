//! Commitment Proof System
//!
//! Lets the human check that the opponent did not switch moves:
//! - HMAC commitment published before the human moves
//! - Key reveal after resolution
//! - Verification by recomputation
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PROOF SYSTEM                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  commitment.rs   - Key, move choice, commit, reveal         │
//! │  verify.rs       - Reveal records and recomputation         │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod commitment;
pub mod verify;

// Re-export key types
pub use commitment::{
    choose_move, commit, new_key, reveal,
    Commitment, CommitmentError, RevealedKey, SecretKey,
};
pub use verify::{verify_reveal, RevealRecord, VerificationError};
