//! # Refvec
//!
//! Reference test-vector generator for an embedded cryptography/compression
//! test suite. Drives trusted oracle crates (AES-256-GCM, Ed25519, SHA-256,
//! raw deflate) and renders every input/output pair as
//! `const uint8_t NAME[] = ...;` declarations a C compiler accepts directly.

//! # Usage
//! ```rust
//! use rand::rngs::OsRng;
//!
//! // 1. Run a generator against the OS rng
//! let vectors = refvec::generators::aead::generate(&mut OsRng)?;
//!
//! // 2. Render each vector as a C declaration
//! for vector in &vectors {
//!     println!("{}", refvec::format::declaration(vector)?);
//! }
//! # Ok::<(), refvec::VectorError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod format;
pub mod generators;
pub mod input;
mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use types::{NamedVector, Result, VectorError, VectorPayload};
