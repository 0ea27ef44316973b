//! Strict, block-structured base64 decoding.

use crate::constants::PAD;
use crate::tables::strict_sextet;
use crate::Base64Error;

/// Returns the number of bytes `encoded` decodes to.
///
/// Only the length and the pad bytes of the final quantum are inspected;
/// the characters themselves are validated by [`decode`].
///
/// # Errors
///
/// Returns [`Base64Error::InvalidLength`] if the length is not a multiple of 4.
///
/// # Example
///
/// ```
/// use cdmi_base64::decoded_len;
///
/// assert_eq!(decoded_len(b"TWFu").unwrap(), 3);
/// assert_eq!(decoded_len(b"TWE=").unwrap(), 2);
/// assert_eq!(decoded_len(b"TQ==").unwrap(), 1);
/// assert!(decoded_len(b"TQ=").is_err());
/// ```
pub fn decoded_len(encoded: &[u8]) -> Result<usize, Base64Error> {
    let length = encoded.len();
    if !length.is_multiple_of(4) {
        return Err(Base64Error::InvalidLength { length });
    }
    let padding = match encoded.get(length.saturating_sub(2)..) {
        Some([PAD, _]) => 2,
        Some([_, PAD]) => 1,
        _ => 0,
    };
    Ok((length / 4) * 3 - padding)
}

/// Decodes padded base64 text.
///
/// The input is processed in 4-character quanta. Only the final quantum may
/// carry padding: `xx==` yields 1 byte, `xxx=` yields 2 bytes. The returned
/// vector holds exactly the decoded bytes, with nothing trailing. An empty
/// input decodes to an empty output.
///
/// # Errors
///
/// - [`Base64Error::InvalidLength`] if the length is not a multiple of 4.
/// - [`Base64Error::InvalidCharacter`] for a byte outside the alphabet, a pad
///   anywhere but the last two slots of the final quantum, or a third-slot
///   pad followed by a non-pad.
///
/// # Example
///
/// ```
/// use cdmi_base64::decode;
///
/// assert_eq!(decode(b"TWFu").unwrap(), b"Man");
/// assert_eq!(decode(b"TQ==").unwrap(), b"M");
/// assert!(decode(b"TQ=A").is_err());
/// ```
pub fn decode(encoded: &[u8]) -> Result<Vec<u8>, Base64Error> {
    let length = encoded.len();
    let mut out = Vec::with_capacity(decoded_len(encoded)?);

    for (index, quantum) in encoded.chunks_exact(4).enumerate() {
        let offset = index * 4;
        let is_last = offset + 4 == length;

        let s0 = sextet_at(encoded, offset)?;
        let s1 = sextet_at(encoded, offset + 1)?;
        out.push((s0 << 2) | (s1 >> 4));

        if is_last && quantum[2] == PAD {
            if quantum[3] != PAD {
                return Err(Base64Error::InvalidCharacter {
                    position: offset + 3,
                    byte: quantum[3],
                });
            }
            break;
        }
        let s2 = sextet_at(encoded, offset + 2)?;
        out.push(((s1 & 0x0f) << 4) | (s2 >> 2));

        if is_last && quantum[3] == PAD {
            break;
        }
        let s3 = sextet_at(encoded, offset + 3)?;
        out.push(((s2 & 0x03) << 6) | s3);
    }

    Ok(out)
}

/// Decodes padded base64 from a string slice. See [`decode`].
///
/// # Example
///
/// ```
/// use cdmi_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    decode(encoded.as_bytes())
}

fn sextet_at(encoded: &[u8], position: usize) -> Result<u8, Base64Error> {
    let byte = encoded[position];
    strict_sextet(byte).ok_or(Base64Error::InvalidCharacter { position, byte })
}
