//! Ed25519 vector generator.

use ed25519_dalek::{Signer, SigningKey};
use rand::{CryptoRng, RngCore};

use super::{FILL_BYTE, PAYLOAD_LEN};
use crate::input;
use crate::types::{NamedVector, Result, VectorError};

/// Generate the signature vector set.
///
/// Keys are emitted in their raw, unencrypted, scheme-native byte layout (no
/// container format). Emits, in order: `private_key`, `public_key`,
/// `message`, `signature`.
///
/// # Errors
/// `Oracle` if signing fails.
pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Vec<NamedVector>> {
    let signing_key = SigningKey::generate(rng);
    let verifying_key = signing_key.verifying_key();

    let message = input::fixed_pattern(FILL_BYTE, PAYLOAD_LEN)?;
    let signature = signing_key
        .try_sign(&message)
        .map_err(|err| VectorError::Oracle {
            primitive: "ed25519",
            reason: err.to_string(),
        })?;

    Ok(vec![
        NamedVector::bytes("private_key", signing_key.to_bytes().to_vec()),
        NamedVector::bytes("public_key", verifying_key.to_bytes().to_vec()),
        NamedVector::bytes("message", message),
        NamedVector::bytes("signature", signature.to_bytes().to_vec()),
    ])
}
