//! Vector generators, one per primitive family.
//!
//! Each generator is a pure function from its inputs (and, where sampling is
//! involved, an injected rng) to an ordered sequence of named vectors.
//! Rendering and emission happen elsewhere; nothing here prints.

pub mod aead;
pub mod deflate;
pub mod hash;
pub mod signature;

/// Fill byte for deterministic payloads (ASCII `'f'`).
pub const FILL_BYTE: u8 = b'f';

/// Length of every deterministic payload and of the compression source.
pub const PAYLOAD_LEN: usize = 576;
