//! Secure Randomness
//!
//! Every random decision in a round (the secret key and the opponent's
//! move) is drawn from a cryptographically secure source. Production code
//! uses the operating system RNG; tests pass a seeded `StdRng`, which is
//! also a `CryptoRng`.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

/// Marker bound for generators allowed to make round decisions.
pub trait SecureRng: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng> SecureRng for T {}

/// The default source: operating system entropy.
#[inline]
pub fn os_rng() -> OsRng {
    OsRng
}

/// Fill a fresh buffer of `len` bytes.
///
/// Uses the fallible fill so an entropy failure surfaces as an error
/// instead of a panic.
pub fn random_bytes<R: SecureRng>(rng: &mut R, len: usize) -> Result<Vec<u8>, rand::Error> {
    let mut bytes = vec![0u8; len];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

/// Uniform index in `[0, len)`.
///
/// Returns `None` for an empty range. `gen_range` rejects biased
/// samples, so every index is equally likely.
#[inline]
pub fn random_index<R: SecureRng>(rng: &mut R, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rng.gen_range(0..len))
}

// =============================================================================
// TESTS
// =============================================================================
