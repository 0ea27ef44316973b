//! Tests for base64 encoding (encode / to_base64).

use cdmi_base64::{encode, encoded_len, to_base64};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let result = encode(&blob);
        let expected = reference_encode(&blob);
        assert_eq!(
            result,
            expected.as_bytes(),
            "Failed for blob of length {}",
            blob.len()
        );
        assert_eq!(to_base64(&blob), expected);
    }
}

#[test]
fn empty_input() {
    assert!(encode(b"").is_empty());
}

#[test]
fn man() {
    assert_eq!(encode(&[0x4D, 0x61, 0x6E]), b"TWFu");
    assert_eq!(encode(&[0x4D, 0x61]), b"TWE=");
    assert_eq!(encode(&[0x4D]), b"TQ==");
}

#[test]
fn output_length_and_padding() {
    for length in 0..64 {
        let blob = vec![0x5Au8; length];
        let encoded = encode(&blob);
        assert_eq!(encoded.len(), encoded_len(length));
        assert_eq!(encoded.len() % 4, 0);
        let pads = encoded.iter().rev().take_while(|&&b| b == b'=').count();
        assert_eq!(pads, (3 - length % 3) % 3, "length {}", length);
    }
}

#[test]
fn all_byte_values() {
    let data: Vec<u8> = (0..=255).collect();
    let encoded = to_base64(&data);
    assert!(encoded.starts_with("AAECAwQFBgcICQoL"));
    assert!(encoded.ends_with("+/w=="));
}

/// Bit-by-bit encoder used to cross-check the table-driven one.
fn reference_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut result = String::new();
    for chunk in data.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        result.push(ALPHABET[(b0 >> 2) as usize] as char);
        result.push(ALPHABET[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize] as char);

        if chunk.len() > 1 {
            result.push(ALPHABET[(((b1 & 0x0f) << 2) | (b2 >> 6)) as usize] as char);
        } else {
            result.push('=');
        }

        if chunk.len() > 2 {
            result.push(ALPHABET[(b2 & 0x3f) as usize] as char);
        } else {
            result.push('=');
        }
    }

    result
}
