//! Core primitives.
//!
//! Secure randomness and keyed hashing. Both are leaves: nothing in here
//! knows about moves or rounds.

pub mod rng;
pub mod hash;

// Re-export core types
pub use rng::{os_rng, SecureRng};
pub use hash::{hmac_sha256, MacDigest, MacHasher};
