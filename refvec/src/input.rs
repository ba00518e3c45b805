//! Input builders for vector payloads.
//!
//! Produce the message, plaintext, nonce, and compression-source buffers the
//! generators feed to their oracles. Randomness is an injected capability so
//! tests can substitute a seeded rng for the OS entropy pool.

use rand::{CryptoRng, RngCore};

use crate::types::{Result, VectorError};

/// Buffer of `len` bytes, each equal to `byte`.
///
/// # Errors
/// `InvalidArgument` if `len` is zero.
pub fn fixed_pattern(byte: u8, len: usize) -> Result<Vec<u8>> {
    if len == 0 {
        return Err(VectorError::InvalidArgument(
            "fixed_pattern: length must be non-zero".to_owned(),
        ));
    }
    Ok(vec![byte; len])
}

/// Buffer of `len` cryptographically random bytes drawn from `rng`.
///
/// Each invocation yields fresh content. No determinism guarantee.
///
/// # Errors
/// `InvalidArgument` if `len` is zero; `Oracle` if the randomness source
/// fails to produce bytes.
pub fn random_bytes<R: RngCore + CryptoRng>(rng: &mut R, len: usize) -> Result<Vec<u8>> {
    if len == 0 {
        return Err(VectorError::InvalidArgument(
            "random_bytes: length must be non-zero".to_owned(),
        ));
    }
    let mut buf = vec![0u8; len];
    rng.try_fill_bytes(&mut buf)
        .map_err(|err| VectorError::Oracle {
            primitive: "randomness",
            reason: err.to_string(),
        })?;
    Ok(buf)
}
