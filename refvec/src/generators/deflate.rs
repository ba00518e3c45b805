//! Raw-deflate vector generator.
//!
//! The compressor runs with no zlib/gzip framing: the emitted stream is a bare
//! deflate stream the embedded inflate implementation consumes as-is.

use std::io::Write;

use flate2::write::DeflateEncoder;
use flate2::Compression;
use rand::{CryptoRng, RngCore};

use super::PAYLOAD_LEN;
use crate::input;
use crate::types::{NamedVector, Result, VectorError};

/// Generate the compression vector set.
///
/// The uncompressed buffer is emitted first so the ground truth precedes the
/// stream the decompressor under test is pointed at. Random input can expand
/// under deflate; the stream is emitted at whatever length the oracle
/// produces. Emits, in order: `uncompressed`, `source`.
///
/// # Errors
/// `Oracle` if the compressor rejects its input or fails to finalize.
pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Vec<NamedVector>> {
    let uncompressed = input::random_bytes(rng, PAYLOAD_LEN)?;

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&uncompressed).map_err(oracle)?;
    let compressed = encoder.finish().map_err(oracle)?;

    Ok(vec![
        NamedVector::bytes("uncompressed", uncompressed),
        NamedVector::bytes("source", compressed),
    ])
}

fn oracle(err: std::io::Error) -> VectorError {
    VectorError::Oracle {
        primitive: "deflate",
        reason: err.to_string(),
    }
}
