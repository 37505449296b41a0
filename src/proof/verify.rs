//! Verification API
//!
//! Independent check of a finished round: given the disclosed move, the
//! revealed key and the commitment published before play, recompute the
//! MAC. Needs nothing from the round itself, so it can run in a separate
//! process (see the `fair-rps-verify` binary).

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::core::hash::{from_hex, to_hex, hmac_sha256};
use crate::proof::commitment::{Commitment, RevealedKey};

/// Everything a third party needs to check one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealRecord {
    /// Opponent move as disclosed after resolution.
    #[serde(rename = "move")]
    pub mv: String,

    /// Revealed MAC key (hex).
    pub key: RevealedKey,

    /// Commitment published before the human moved (hex).
    pub hmac: Commitment,
}

impl RevealRecord {
    /// Bundle a reveal.
    pub fn new(mv: impl Into<String>, key: RevealedKey, hmac: Commitment) -> Self {
        Self { mv: mv.into(), key, hmac }
    }

    /// Build from the three hex/text fields a user would copy from the console.
    pub fn from_parts(mv: &str, key_hex: &str, hmac_hex: &str) -> Result<Self, VerificationError> {
        let key_bytes = from_hex(key_hex).map_err(|_| VerificationError::InvalidKeyHex)?;
        let hmac = Commitment::from_hex(hmac_hex).map_err(|_| VerificationError::InvalidCommitmentHex)?;
        Ok(Self {
            mv: mv.to_string(),
            key: RevealedKey::from_bytes(&key_bytes),
            hmac,
        })
    }

    /// Serialize as one JSON line.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a JSON record.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Errors that can occur during verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// Key is not valid hex.
    #[error("revealed key is not valid hex")]
    InvalidKeyHex,

    /// Commitment is not 32 bytes of hex.
    #[error("commitment is not a 64-character hex digest")]
    InvalidCommitmentHex,

    /// MAC recomputed from key and move differs from the commitment.
    #[error("commitment mismatch: expected {expected}, computed {computed}")]
    Mismatch {
        /// Published commitment.
        expected: String,
        /// Recomputed MAC.
        computed: String,
    },
}

/// Recompute the MAC and compare it against the published commitment.
pub fn verify_reveal(record: &RevealRecord) -> Result<(), VerificationError> {
    let key_bytes = record.key.to_bytes().map_err(|_| VerificationError::InvalidKeyHex)?;

    if record.hmac.verify(&key_bytes, &record.mv) {
        return Ok(());
    }

    let computed = hmac_sha256(&key_bytes, record.mv.as_bytes())
        .map(|d| to_hex(&d))
        .unwrap_or_default();
    Err(VerificationError::Mismatch {
        expected: record.hmac.as_hex().to_string(),
        computed,
    })
}

// =============================================================================
// TESTS
// =============================================================================
