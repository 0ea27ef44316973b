//! Lookup tables shared by the encoder and both decoders.
//!
//! All tables are computed by const evaluation, so they exist before any
//! code runs and are never written afterwards.

use crate::constants::{ALPHABET_BYTES, LENIENT_SKIP, STRICT_INVALID};

/// Maps a 6-bit value to its alphabet byte.
pub(crate) static ENCODE_TABLE: [u8; 64] = *ALPHABET_BYTES;

/// Pre-computed two-character lookup table for base64 encoding.
/// Entry `i * 64 + j` holds the alphabet bytes for sextets `i` and `j`.
pub(crate) static ENCODE_PAIR_TABLE: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_BYTES[i];
            table[idx][1] = ALPHABET_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Byte to sextet for the strict decoder, `STRICT_INVALID` outside the alphabet.
pub(crate) static STRICT_DECODE_TABLE: [i8; 256] = {
    let mut table = [STRICT_INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as i8;
        i += 1;
    }
    table
};

/// Byte to sextet for the lenient decoder, `LENIENT_SKIP` outside the alphabet.
///
/// Kept apart from [`STRICT_DECODE_TABLE`] so that a change to one decoder's
/// notion of "invalid" never leaks into the other.
pub(crate) static LENIENT_DECODE_TABLE: [u8; 256] = {
    let mut table = [LENIENT_SKIP; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Looks up the sextet for `byte` in the strict table.
#[inline]
pub(crate) fn strict_sextet(byte: u8) -> Option<u8> {
    let value = STRICT_DECODE_TABLE[byte as usize];
    if value == STRICT_INVALID {
        None
    } else {
        Some(value as u8)
    }
}
