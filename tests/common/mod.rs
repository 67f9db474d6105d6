#![allow(dead_code)]

/// Decodes a hex string of exactly `N` bytes.
pub fn hex<const N: usize>(s: &str) -> [u8; N] {
    assert_eq!(s.len(), 2 * N, "hex string has the wrong length");

    let mut out = [0u8; N];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&s[2 * i..2 * i + 2], 16).unwrap();
    }
    out
}

/// A plaintext buffer: 32 reserved zero bytes followed by `message`.
pub fn padded(message: &[u8]) -> Vec<u8> {
    let mut buf = vec![0u8; 32];
    buf.extend_from_slice(message);
    buf
}
