//! Alphabet membership checks.

use crate::constants::PAD;
use crate::tables::strict_sextet;

/// Returns `true` if `byte` is a base64 alphabet character or the pad `=`.
///
/// # Example
///
/// ```
/// use cdmi_base64::is_base64_byte;
///
/// assert!(is_base64_byte(b'Q'));
/// assert!(is_base64_byte(b'='));
/// assert!(!is_base64_byte(b'-'));
/// ```
pub fn is_base64_byte(byte: u8) -> bool {
    byte == PAD || strict_sextet(byte).is_some()
}

/// Returns `true` if `bytes` is non-empty and every byte passes [`is_base64_byte`].
///
/// An empty sequence is not base64. Only the character set is checked, not
/// length or pad placement; use [`decode`](crate::decode) for that.
///
/// # Example
///
/// ```
/// use cdmi_base64::is_base64_sequence;
///
/// assert!(is_base64_sequence(b"TWFu"));
/// assert!(!is_base64_sequence(b""));
/// assert!(!is_base64_sequence(b"TW Fu"));
/// ```
pub fn is_base64_sequence(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(|&b| is_base64_byte(b))
}
