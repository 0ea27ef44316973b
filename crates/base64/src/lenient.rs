//! Lenient, streaming base64 decoding.
//!
//! The lenient decoder performs **no validation**. Any byte outside the
//! alphabet, including `=`, whitespace and arbitrary noise, is dropped
//! without an error, and length or padding is never checked. Trailing bits
//! that do not fill a whole byte are discarded. Callers that need to know
//! whether the input was well-formed must use [`decode`](crate::decode).

use crate::constants::LENIENT_SKIP;
use crate::tables::LENIENT_DECODE_TABLE;

/// Bit accumulator for lenient decoding.
///
/// Sextets are shifted into `acc` and a byte is released whenever at least
/// 8 bits are buffered.
///
/// # Example
///
/// ```
/// use cdmi_base64::LenientDecoder;
///
/// let mut decoder = LenientDecoder::new();
/// let out: Vec<u8> = b"T Q=\n=".iter().filter_map(|&b| decoder.push(b)).collect();
/// assert_eq!(out, b"M");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LenientDecoder {
    acc: u32,
    shift: u32,
}

impl LenientDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one input byte, returning a decoded byte when one completes.
    pub fn push(&mut self, byte: u8) -> Option<u8> {
        let value = LENIENT_DECODE_TABLE[byte as usize];
        if value == LENIENT_SKIP {
            return None;
        }
        self.acc = (self.acc << 6) | u32::from(value);
        self.shift += 6;
        if self.shift < 8 {
            return None;
        }
        self.shift -= 8;
        let out = ((self.acc >> self.shift) & 0xff) as u8;
        // Keep only the bits not yet emitted.
        self.acc &= (1 << self.shift) - 1;
        Some(out)
    }

    /// Number of buffered bits that have not formed a whole byte yet.
    pub fn pending_bits(&self) -> u32 {
        self.shift
    }
}

/// Leniently decodes raw bytes. Non-alphabet bytes are skipped.
///
/// # Example
///
/// ```
/// use cdmi_base64::lenient_decode_bytes;
///
/// assert_eq!(lenient_decode_bytes(b"TW\r\nFu"), b"Man");
/// assert_eq!(lenient_decode_bytes(b"TWE"), b"Ma");
/// ```
pub fn lenient_decode_bytes(input: &[u8]) -> Vec<u8> {
    let mut decoder = LenientDecoder::new();
    input.iter().filter_map(|&b| decoder.push(b)).collect()
}

/// Leniently decodes text, returning each decoded byte as the `char` with
/// the same code point (Latin-1).
///
/// Each input `char` is looked up by its low 8 bits, so characters above
/// U+00FF alias onto Latin-1 positions. Characters that do not map to the
/// alphabet are skipped.
///
/// # Example
///
/// ```
/// use cdmi_base64::lenient_decode;
///
/// assert_eq!(lenient_decode("dXNlcjpwYXNz"), "user:pass");
/// assert_eq!(lenient_decode("dXNl cjpw\tYXNz!!"), "user:pass");
/// assert_eq!(lenient_decode("/w=="), "\u{ff}");
/// ```
pub fn lenient_decode(text: &str) -> String {
    let mut decoder = LenientDecoder::new();
    text.chars()
        .filter_map(|c| decoder.push((u32::from(c) & 0xff) as u8))
        .map(char::from)
        .collect()
}
