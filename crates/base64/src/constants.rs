/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding byte.
pub const PAD: u8 = b'=';

/// Strict decode table entry for bytes outside the alphabet.
pub const STRICT_INVALID: i8 = -1;

/// Lenient decode table entry for bytes the lenient decoder skips.
pub const LENIENT_SKIP: u8 = 64;
