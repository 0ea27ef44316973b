//! RFC 2045 base64 encoding and decoding.
//!
//! This crate provides:
//! - Standard padded base64 encoding
//! - A strict decoder that rejects malformed input with a [`Base64Error`]
//! - A lenient decoder that silently skips every non-alphabet byte
//! - Alphabet validation helpers
//!
//! # Example
//!
//! ```
//! use cdmi_base64::{decode, encode, lenient_decode_bytes};
//!
//! let data = b"hello world";
//! let encoded = encode(data);
//! assert_eq!(encoded, b"aGVsbG8gd29ybGQ=");
//! assert_eq!(decode(&encoded).unwrap(), data);
//! assert_eq!(lenient_decode_bytes(b"aGVs bG8g\nd29y bGQ="), data);
//! ```

mod basic_auth;
mod constants;
mod from_base64;
mod lenient;
mod tables;
mod to_base64;
mod validate;

use thiserror::Error;

pub use basic_auth::basic_credentials;
pub use constants::{ALPHABET, ALPHABET_BYTES, LENIENT_SKIP, PAD, STRICT_INVALID};
pub use from_base64::{decode, decoded_len, from_base64};
pub use lenient::{lenient_decode, lenient_decode_bytes, LenientDecoder};
pub use to_base64::{encode, encoded_len, to_base64};
pub use validate::{is_base64_byte, is_base64_sequence};

/// Error type for strict base64 decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The input length is not a multiple of 4.
    #[error("base64 length {length} is not a multiple of 4")]
    InvalidLength { length: usize },
    /// A byte outside the alphabet, or a pad byte where none is allowed.
    #[error("invalid base64 byte 0x{byte:02x} at position {position}")]
    InvalidCharacter { position: usize, byte: u8 },
}
