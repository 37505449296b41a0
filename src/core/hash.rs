//! Keyed Hashing for Commitments
//!
//! HMAC-SHA256 helpers and hex encoding used by the commitment protocol.
//! Everything published to the player goes through [`to_hex`] so that
//! any external tool can recompute it.

use hmac::{Hmac, Mac};
use sha2::Sha256;

/// HMAC-SHA256 instance type.
pub type HmacSha256 = Hmac<Sha256>;

/// MAC output type (256 bits / 32 bytes)
pub type MacDigest = [u8; 32];

/// Incremental keyed hasher.
///
/// Wraps HMAC-SHA256 the same way a plain hasher is used:
/// create with a key, feed bytes, finalize once.
pub struct MacHasher {
    mac: HmacSha256,
}

impl MacHasher {
    /// Create a new keyed hasher.
    ///
    /// HMAC accepts keys of any length, so this only returns `None`
    /// if the underlying implementation refuses the key.
    pub fn new(key: &[u8]) -> Option<Self> {
        HmacSha256::new_from_slice(key)
            .ok()
            .map(|mac| Self { mac })
    }

    /// Update with raw bytes.
    #[inline]
    pub fn update_bytes(&mut self, bytes: &[u8]) {
        self.mac.update(bytes);
    }

    /// Update with a UTF-8 string (no length prefix, no terminator).
    #[inline]
    pub fn update_str(&mut self, value: &str) {
        self.mac.update(value.as_bytes());
    }

    /// Finalize and return the digest.
    pub fn finalize(self) -> MacDigest {
        self.mac.finalize().into_bytes().into()
    }

    /// Finalize and compare against an expected digest in constant time.
    pub fn verify(self, expected: &[u8]) -> bool {
        self.mac.verify_slice(expected).is_ok()
    }
}

/// Compute HMAC-SHA256 of `data` under `key`.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Option<MacDigest> {
    let mut hasher = MacHasher::new(key)?;
    hasher.update_bytes(data);
    Some(hasher.finalize())
}

/// Lowercase hex encoding.
#[inline]
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode hex (either case) into bytes.
#[inline]
pub fn from_hex(text: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(text.trim())
}

// =============================================================================
// TESTS
// =============================================================================
