//! Move Commitment Protocol
//!
//! Commit to the opponent's move before the human plays.
//! Reveal the key after resolution so the human can verify.
//!
//! ```text
//! commit:  HMAC-SHA256(key, move)  -> published as hex before input
//! reveal:  key                     -> published as hex after resolution
//! verify:  HMAC-SHA256(key, move) == commitment
//! ```
//!
//! A MAC under a uniformly random key is used instead of a bare hash:
//! the move space is tiny, so `SHA256(move)` could be inverted by trying
//! every move.

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::core::hash::{from_hex, to_hex, MacDigest, MacHasher};
use crate::core::rng::{random_bytes, random_index, SecureRng};
use crate::game::moves::MoveSet;
use crate::MIN_KEY_LEN;

/// Commitment protocol errors.
#[derive(Debug, Error)]
pub enum CommitmentError {
    /// The entropy source failed. The round cannot proceed.
    #[error("secure random source failed: {0}")]
    Randomness(#[from] rand::Error),

    /// Requested key is shorter than the minimum.
    #[error("key length {got} is below the minimum of {min} bytes")]
    KeyTooShort {
        /// Minimum accepted length.
        min: usize,
        /// Requested length.
        got: usize,
    },

    /// The MAC implementation refused the key.
    #[error("key rejected by MAC")]
    InvalidKey,
}

// =============================================================================
// SECRET KEY
// =============================================================================

/// Per-round MAC key.
///
/// Not `Clone`: a key is created once, used for one commitment and then
/// consumed by [`reveal`]. `Debug` never prints the bytes.
pub struct SecretKey {
    bytes: Vec<u8>,
}

impl SecretKey {
    /// Key length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false for keys built by [`new_key`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({} bytes, redacted)", self.bytes.len())
    }
}

/// A disclosed key, hex encoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevealedKey(String);

impl RevealedKey {
    /// Canonical lowercase form of raw key bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(to_hex(bytes))
    }

    /// Hex text of the key.
    #[inline]
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Decode back to raw key bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, hex::FromHexError> {
        from_hex(&self.0)
    }
}

impl fmt::Display for RevealedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// COMMITMENT
// =============================================================================

/// Published commitment: hex HMAC of the chosen move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Commitment(String);

impl Commitment {
    /// Wrap a digest.
    pub fn from_digest(digest: &MacDigest) -> Self {
        Self(to_hex(digest))
    }

    /// Parse a published hex commitment (either case).
    pub fn from_hex(text: &str) -> Result<Self, hex::FromHexError> {
        let bytes = from_hex(text)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        Ok(Self(to_hex(&bytes)))
    }

    /// Hex text.
    #[inline]
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Check that `key_bytes` and `mv` reproduce this commitment.
    ///
    /// Comparison is constant time.
    pub fn verify(&self, key_bytes: &[u8], mv: &str) -> bool {
        let Ok(expected) = from_hex(&self.0) else {
            return false;
        };
        let Some(mut hasher) = MacHasher::new(key_bytes) else {
            return false;
        };
        hasher.update_str(mv);
        hasher.verify(&expected)
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// PROTOCOL OPERATIONS
// =============================================================================

/// Generate a fresh key of `len` bytes.
pub fn new_key<R: SecureRng>(rng: &mut R, len: usize) -> Result<SecretKey, CommitmentError> {
    if len < MIN_KEY_LEN {
        return Err(CommitmentError::KeyTooShort { min: MIN_KEY_LEN, got: len });
    }
    let bytes = random_bytes(rng, len)?;
    Ok(SecretKey { bytes })
}

/// Pick the opponent's move uniformly at random.
pub fn choose_move<'a, R: SecureRng>(moves: &'a MoveSet, rng: &mut R) -> &'a str {
    // MoveSet is never empty
    let idx = random_index(rng, moves.len()).unwrap_or(0);
    moves.get(idx).unwrap_or_default()
}

/// Compute the commitment to `mv` under `key`.
pub fn commit(key: &SecretKey, mv: &str) -> Result<Commitment, CommitmentError> {
    let mut hasher = MacHasher::new(&key.bytes).ok_or(CommitmentError::InvalidKey)?;
    hasher.update_str(mv);
    Ok(Commitment::from_digest(&hasher.finalize()))
}

/// Disclose the key. Consumes it so it cannot sign anything else.
pub fn reveal(key: SecretKey) -> RevealedKey {
    RevealedKey::from_bytes(&key.bytes)
}

// =============================================================================
// TESTS
// =============================================================================
