//! Generator Tests
//!
//! Runs each generator against its real oracle and checks the emitted vector
//! shape (names, order, lengths) plus the oracle-composition properties:
//! AEAD split reassembly and decryption, signature verification, hash
//! reproducibility, and the deflate round trip.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use flate2::write::{DeflateDecoder, DeflateEncoder};
use flate2::Compression;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use refvec::generators::{aead, deflate, hash, signature, FILL_BYTE, PAYLOAD_LEN};
use refvec::NamedVector;

fn names(vectors: &[NamedVector]) -> Vec<&'static str> {
    vectors.iter().map(|v| v.name).collect()
}

fn content<'a>(vectors: &'a [NamedVector], name: &str) -> &'a [u8] {
    vectors
        .iter()
        .find(|v| v.name == name)
        .unwrap_or_else(|| panic!("vector `{name}` missing from set"))
        .content()
}

// =============================================================================
// AEAD
// =============================================================================

#[test]
fn test_aead_vector_shape() {
    let vectors = aead::generate(&mut OsRng).unwrap();

    assert_eq!(
        names(&vectors),
        ["key", "associated_data", "nonce", "ciphertext", "tag"],
        "emission order is part of the contract"
    );
    assert_eq!(content(&vectors, "key").len(), 32, "AES-256 key");
    assert_eq!(content(&vectors, "associated_data"), b"fidoonmicros");
    assert_eq!(content(&vectors, "nonce").len(), aead::NONCE_LEN);
    assert_eq!(content(&vectors, "ciphertext").len(), PAYLOAD_LEN);
    assert_eq!(content(&vectors, "tag").len(), aead::TAG_LEN);
}

#[test]
fn test_aead_split_reassembles_and_decrypts() {
    let vectors = aead::generate(&mut OsRng).unwrap();

    // ciphertext ‖ tag must equal the oracle's sealed output, so decrypting
    // the reassembly recovers the fixed plaintext.
    let mut sealed = content(&vectors, "ciphertext").to_vec();
    sealed.extend_from_slice(content(&vectors, "tag"));

    let cipher = Aes256Gcm::new_from_slice(content(&vectors, "key")).unwrap();
    let plaintext = cipher
        .decrypt(
            Nonce::from_slice(content(&vectors, "nonce")),
            Payload {
                msg: &sealed,
                aad: content(&vectors, "associated_data"),
            },
        )
        .expect("reassembled ciphertext+tag must authenticate");

    assert_eq!(plaintext, vec![FILL_BYTE; PAYLOAD_LEN]);
}

#[test]
fn test_aead_encrypt_is_deterministic_for_fixed_inputs() {
    let cipher = Aes256Gcm::new_from_slice(&[0x42; 32]).unwrap();
    let nonce = [0x00; 12];
    let plaintext = vec![FILL_BYTE; PAYLOAD_LEN];

    let seal = || {
        cipher
            .encrypt(
                Nonce::from_slice(&nonce),
                Payload {
                    msg: &plaintext,
                    aad: aead::ASSOCIATED_DATA.as_bytes(),
                },
            )
            .unwrap()
    };

    assert_eq!(seal(), seal(), "same key/nonce/aad/plaintext, same output");
}

#[test]
fn test_aead_runs_are_not_repeatable() {
    let first = aead::generate(&mut OsRng).unwrap();
    let second = aead::generate(&mut OsRng).unwrap();

    assert_ne!(
        content(&first, "ciphertext"),
        content(&second, "ciphertext"),
        "fresh key and nonce must change the ciphertext"
    );
    assert_ne!(content(&first, "tag"), content(&second, "tag"));
}

// =============================================================================
// SIGNATURE
// =============================================================================

#[test]
fn test_signature_vector_shape() {
    let vectors = signature::generate(&mut OsRng).unwrap();

    assert_eq!(
        names(&vectors),
        ["private_key", "public_key", "message", "signature"]
    );
    assert_eq!(content(&vectors, "private_key").len(), 32);
    assert_eq!(content(&vectors, "public_key").len(), 32);
    assert_eq!(content(&vectors, "message"), vec![FILL_BYTE; PAYLOAD_LEN]);
    assert_eq!(content(&vectors, "signature").len(), 64);
}

#[test]
fn test_signature_verifies() {
    let vectors = signature::generate(&mut OsRng).unwrap();

    let public_key: &[u8; 32] = content(&vectors, "public_key").try_into().unwrap();
    let sig_bytes: &[u8; 64] = content(&vectors, "signature").try_into().unwrap();
    let verifying_key = VerifyingKey::from_bytes(public_key).unwrap();
    let sig = Signature::from_bytes(sig_bytes);

    verifying_key
        .verify(content(&vectors, "message"), &sig)
        .expect("every generated (keypair, message, signature) set must verify");

    assert!(
        verifying_key.verify(b"tampered message", &sig).is_err(),
        "the signature must not verify a different message"
    );
}

// =============================================================================
// HASH
// =============================================================================

#[test]
fn test_hash_vector_shape_and_reproducibility() {
    let vectors = hash::generate().unwrap();

    assert_eq!(names(&vectors), ["data", "hash"]);
    assert_eq!(content(&vectors, "data"), vec![FILL_BYTE; PAYLOAD_LEN]);
    assert_eq!(content(&vectors, "hash").len(), 32);

    let again = hash::generate().unwrap();
    assert_eq!(
        content(&vectors, "hash"),
        content(&again, "hash"),
        "the hash generator is fully deterministic"
    );
}

#[test]
fn test_hash_known_answer() {
    let vectors = hash::generate().unwrap();

    // SHA-256 of 576 bytes of 'f'.
    assert_eq!(
        hex::encode(content(&vectors, "hash")),
        "e4e198537afb1f3bb93faeba3c077f8afa1aacc956acb6581ca49a03cb233baf"
    );
}

#[test]
fn test_hash_digest_length_is_input_independent() {
    for input in [&b""[..], b"abc", &[FILL_BYTE; 2048]] {
        assert_eq!(Sha256::digest(input).len(), 32);
    }
}

// =============================================================================
// DEFLATE
// =============================================================================

#[test]
fn test_deflate_vector_shape() {
    let vectors = deflate::generate(&mut OsRng).unwrap();

    assert_eq!(
        names(&vectors),
        ["uncompressed", "source"],
        "ground truth is emitted before the compressed stream"
    );
    assert_eq!(content(&vectors, "uncompressed").len(), PAYLOAD_LEN);
    assert!(!content(&vectors, "source").is_empty());
}

#[test]
fn test_deflate_fixed_pattern_round_trips() {
    // Same oracle configuration as the generator, on compressible input.
    let data = vec![FILL_BYTE; PAYLOAD_LEN];
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&data).unwrap();
    let compressed = encoder.finish().unwrap();

    let mut decoder = DeflateDecoder::new(Vec::new());
    decoder.write_all(&compressed).unwrap();
    assert_eq!(decoder.finish().unwrap(), data);
}

#[test]
fn test_deflate_round_trip() {
    let vectors = deflate::generate(&mut OsRng).unwrap();

    let mut decoder = DeflateDecoder::new(Vec::new());
    decoder.write_all(content(&vectors, "source")).unwrap();
    let restored = decoder
        .finish()
        .expect("the emitted stream must be a complete raw deflate stream");

    assert_eq!(
        restored,
        content(&vectors, "uncompressed"),
        "raw-inflate of the emitted stream must reproduce the uncompressed buffer"
    );
}
