//! Emit Command
//!
//! Runs one generator against the OS rng and prints each declaration.

use anyhow::{Context, Result};
use clap::ValueEnum;
use rand::rngs::OsRng;
use refvec::{format, generators, NamedVector};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Primitive {
    /// AES-256-GCM authenticated encryption
    Aead,
    /// Ed25519 digital signature
    Signature,
    /// SHA-256 hashing
    Hash,
    /// Raw deflate compression
    Deflate,
}

impl Primitive {
    const fn label(self) -> &'static str {
        match self {
            Self::Aead => "aead",
            Self::Signature => "signature",
            Self::Hash => "hash",
            Self::Deflate => "deflate",
        }
    }
}

// =============================================================================
// EMIT
// =============================================================================

/// Generate the selected vector set and print it, one declaration per line.
pub fn emit(primitive: Primitive) -> Result<()> {
    let vectors =
        generate(primitive).with_context(|| format!("generating {} vectors", primitive.label()))?;

    // Render the whole set before printing; no partial vector file on error.
    let lines = vectors
        .iter()
        .map(format::declaration)
        .collect::<refvec::Result<Vec<_>>>()
        .with_context(|| format!("rendering {} vectors", primitive.label()))?;

    for line in &lines {
        println!("{line}");
    }

    Ok(())
}

fn generate(primitive: Primitive) -> refvec::Result<Vec<NamedVector>> {
    let mut rng = OsRng;
    match primitive {
        Primitive::Aead => generators::aead::generate(&mut rng),
        Primitive::Signature => generators::signature::generate(&mut rng),
        Primitive::Hash => generators::hash::generate(),
        Primitive::Deflate => generators::deflate::generate(&mut rng),
    }
}
