//! AES-256-GCM vector generator.
//!
//! The encrypt oracle returns a single sealed buffer: ciphertext with the
//! 16-byte authentication tag appended. The split below relies on that
//! output convention and checks it before slicing.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::{CryptoRng, RngCore};

use super::{FILL_BYTE, PAYLOAD_LEN};
use crate::input;
use crate::types::{NamedVector, Result, VectorError};

/// Associated data authenticated alongside the plaintext.
pub const ASSOCIATED_DATA: &str = "fidoonmicros";

/// GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Generate the authenticated-encryption vector set.
///
/// Emits, in order: `key`, `associated_data` (string literal), `nonce`,
/// `ciphertext`, `tag`.
///
/// # Errors
/// `Oracle` if the cipher rejects its inputs, `Contract` if the sealed
/// output is shorter than the tag it must end with.
pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Vec<NamedVector>> {
    let key = Aes256Gcm::generate_key(&mut *rng);
    let nonce = input::random_bytes(rng, NONCE_LEN)?;
    let plaintext = input::fixed_pattern(FILL_BYTE, PAYLOAD_LEN)?;

    let cipher = Aes256Gcm::new(&key);
    let sealed = cipher
        .encrypt(
            Nonce::from_slice(&nonce),
            Payload {
                msg: &plaintext,
                aad: ASSOCIATED_DATA.as_bytes(),
            },
        )
        .map_err(|err| VectorError::Oracle {
            primitive: "aes-256-gcm",
            reason: err.to_string(),
        })?;

    if sealed.len() < TAG_LEN {
        return Err(VectorError::Contract {
            primitive: "aes-256-gcm",
            reason: format!(
                "sealed output is {} bytes, shorter than the {TAG_LEN}-byte tag",
                sealed.len()
            ),
        });
    }
    let (ciphertext, tag) = sealed.split_at(sealed.len() - TAG_LEN);

    Ok(vec![
        NamedVector::bytes("key", key.to_vec()),
        NamedVector::ascii("associated_data", ASSOCIATED_DATA),
        NamedVector::bytes("nonce", nonce),
        NamedVector::bytes("ciphertext", ciphertext.to_vec()),
        NamedVector::bytes("tag", tag.to_vec()),
    ])
}
