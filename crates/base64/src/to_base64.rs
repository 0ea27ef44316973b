//! RFC 2045 base64 encoding.

use crate::constants::PAD;
use crate::tables::{ENCODE_PAIR_TABLE, ENCODE_TABLE};

/// Returns the length of the padded base64 encoding of `length` input bytes.
///
/// # Example
///
/// ```
/// use cdmi_base64::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(3), 4);
/// assert_eq!(encoded_len(4), 8);
/// ```
pub fn encoded_len(length: usize) -> usize {
    length.div_ceil(3) * 4
}

/// Encodes `data` as padded base64 text.
///
/// Every 3 input bytes become 4 alphabet characters. A trailing group of 1
/// byte is written as 2 characters plus `==`, a trailing group of 2 bytes as
/// 3 characters plus `=`. The output length is always a multiple of 4 and
/// any input, including an empty one, is accepted.
///
/// # Example
///
/// ```
/// use cdmi_base64::encode;
///
/// assert_eq!(encode(b"Man"), b"TWFu");
/// assert_eq!(encode(b"Ma"), b"TWE=");
/// assert_eq!(encode(b"M"), b"TQ==");
/// assert!(encode(b"").is_empty());
/// ```
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(data.len()));

    let mut groups = data.chunks_exact(3);
    for group in &mut groups {
        let (o1, o2, o3) = (group[0] as usize, group[1] as usize, group[2] as usize);
        // Two 12-bit halves of the 24-bit group.
        let v1 = (o1 << 4) | (o2 >> 4);
        let v2 = ((o2 & 0x0f) << 8) | o3;
        out.extend_from_slice(&ENCODE_PAIR_TABLE[v1]);
        out.extend_from_slice(&ENCODE_PAIR_TABLE[v2]);
    }

    match *groups.remainder() {
        [o1] => {
            let v1 = (o1 as usize) << 4;
            out.extend_from_slice(&ENCODE_PAIR_TABLE[v1]);
            out.extend_from_slice(&[PAD, PAD]);
        }
        [o1, o2] => {
            let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
            let v2 = ((o2 & 0x0f) as usize) << 2;
            out.extend_from_slice(&ENCODE_PAIR_TABLE[v1]);
            out.push(ENCODE_TABLE[v2]);
            out.push(PAD);
        }
        _ => {}
    }

    out
}

/// Encodes `data` as padded base64 and returns it as a `String`.
///
/// # Example
///
/// ```
/// use cdmi_base64::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(data: &[u8]) -> String {
    encode(data).into_iter().map(char::from).collect()
}
