//! C literal-array rendering.
//!
//! Turns a named byte buffer into the one-line declaration the downstream
//! embedded test suite compiles directly. Two forms exist: a hex byte array
//! for arbitrary content, and a quoted string literal for payloads known to
//! be printable ASCII. Both declare the same byte content to a C compiler
//! (the quoted form additionally carries the implicit trailing NUL).

use crate::types::{NamedVector, Result, VectorError, VectorPayload};

// =============================================================================
// DECLARATIONS
// =============================================================================

/// Render `bytes` as `const uint8_t <name>[] = { 0xHH, 0xHH, ... };`.
///
/// Each byte is exactly two lowercase hex digits prefixed `0x`, separated by
/// comma-and-space. An empty buffer renders as `{ }`.
///
/// # Errors
/// `InvalidArgument` if `name` is not a valid C identifier.
pub fn array_declaration(name: &str, bytes: &[u8]) -> Result<String> {
    check_identifier(name)?;
    let body = bytes
        .iter()
        .map(|byte| format!("0x{byte:02x}"))
        .collect::<Vec<_>>()
        .join(", ");
    if body.is_empty() {
        Ok(format!("const uint8_t {name}[] = {{ }};"))
    } else {
        Ok(format!("const uint8_t {name}[] = {{ {body} }};"))
    }
}

/// Render `text` as `const uint8_t <name>[] = "<text>";`.
///
/// Only for payloads that survive a C string literal unescaped, so the quoted
/// form and the hex-array form declare identical content.
///
/// # Errors
/// `InvalidArgument` if `name` is not a valid C identifier, or if `text`
/// contains anything outside printable ASCII (or a quote or backslash, which
/// would need escaping).
pub fn string_declaration(name: &str, text: &str) -> Result<String> {
    check_identifier(name)?;
    let printable = text
        .bytes()
        .all(|byte| (0x20..=0x7e).contains(&byte) && byte != b'"' && byte != b'\\');
    if !printable {
        return Err(VectorError::InvalidArgument(format!(
            "string payload for `{name}` is not plain printable ASCII"
        )));
    }
    Ok(format!("const uint8_t {name}[] = \"{text}\";"))
}

/// Render a vector in the declaration form its payload calls for.
///
/// # Errors
/// Propagates the underlying form's `InvalidArgument` conditions.
pub fn declaration(vector: &NamedVector) -> Result<String> {
    match &vector.payload {
        VectorPayload::Bytes(bytes) => array_declaration(vector.name, bytes),
        VectorPayload::Ascii(text) => string_declaration(vector.name, text),
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

fn check_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(VectorError::InvalidArgument(format!(
            "`{name}` is not a valid C identifier"
        )))
    }
}
