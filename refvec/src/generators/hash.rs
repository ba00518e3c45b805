//! SHA-256 vector generator.

use sha2::{Digest, Sha256};

use super::{FILL_BYTE, PAYLOAD_LEN};
use crate::input;
use crate::types::{NamedVector, Result};

/// Generate the hash vector set.
///
/// Fully deterministic: the same message and digest on every run. Emits, in
/// order: `data`, `hash`.
///
/// # Errors
/// `InvalidArgument` only if the payload constants are misconfigured.
pub fn generate() -> Result<Vec<NamedVector>> {
    let data = input::fixed_pattern(FILL_BYTE, PAYLOAD_LEN)?;
    let digest = Sha256::digest(&data);

    Ok(vec![
        NamedVector::bytes("data", data),
        NamedVector::bytes("hash", digest.to_vec()),
    ])
}
