//! Shared types used across the refvec library.

use core::fmt;
use std::error;

// =============================================================================
// NAMED VECTORS
// =============================================================================

/// Payload of an emitted vector and the declaration form it renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorPayload {
    /// Raw bytes, rendered as a `{ 0x.. }` hex byte array.
    Bytes(Vec<u8>),
    /// Printable ASCII, rendered as a quoted string literal.
    Ascii(String),
}

/// One emitted artifact: a declaration name plus the bytes it declares.
///
/// Generators return these in emission order. Downstream consumers match
/// vectors by declaration order and name, so the order is part of each
/// generator's contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedVector {
    /// Declaration name (a valid C identifier).
    pub name: &'static str,
    /// Payload and its rendered form.
    pub payload: VectorPayload,
}

impl NamedVector {
    /// Vector rendered as a hex byte array.
    #[must_use]
    pub const fn bytes(name: &'static str, bytes: Vec<u8>) -> Self {
        Self {
            name,
            payload: VectorPayload::Bytes(bytes),
        }
    }

    /// Vector rendered as a quoted string literal.
    #[must_use]
    pub fn ascii(name: &'static str, text: &str) -> Self {
        Self {
            name,
            payload: VectorPayload::Ascii(text.to_owned()),
        }
    }

    /// The declared byte content, independent of the rendered form.
    ///
    /// For ASCII payloads this is the text without the trailing NUL a C
    /// compiler appends to the quoted form.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        match &self.payload {
            VectorPayload::Bytes(bytes) => bytes,
            VectorPayload::Ascii(text) => text.as_bytes(),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Convenience alias for fallible refvec operations.
pub type Result<T> = core::result::Result<T, VectorError>;

/// Fatal error raised while building a vector set.
///
/// Every variant aborts generation. No partial vector set is ever emitted.
#[derive(Debug)]
pub enum VectorError {
    /// A request to a builder or formatter was malformed before any oracle ran.
    InvalidArgument(String),
    /// A trusted primitive rejected its input or failed internally.
    Oracle {
        /// The oracle that failed.
        primitive: &'static str,
        /// The oracle's own account of the failure.
        reason: String,
    },
    /// An oracle result broke an invariant its contract guarantees.
    Contract {
        /// The oracle that misbehaved.
        primitive: &'static str,
        /// The violated invariant.
        reason: String,
    },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::Oracle { primitive, reason } => {
                write!(f, "{primitive} oracle failed: {reason}")
            }
            Self::Contract { primitive, reason } => {
                write!(f, "{primitive} oracle violated its contract: {reason}")
            }
        }
    }
}

impl error::Error for VectorError {}
