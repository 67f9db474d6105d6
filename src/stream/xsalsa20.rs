use zeroize::Zeroize;

use super::core::hsalsa20;
use super::salsa20::apply_keystream;
use crate::constants::SIGMA;
use crate::error::{NaclError, Result};

/// Splits a 24-byte nonce: HSalsa20 turns the first 16 bytes and the key
/// into a subkey, the last 8 bytes become the Salsa20 nonce.
fn with_subkey<F>(nonce: &[u8; 24], key: &[u8; 32], f: F)
where
    F: FnOnce(&[u8; 8], &[u8; 32]),
{
    let mut prefix = [0u8; 16];
    prefix.copy_from_slice(&nonce[..16]);

    let mut tail = [0u8; 8];
    tail.copy_from_slice(&nonce[16..]);

    let mut subkey = hsalsa20(&prefix, key, &SIGMA);
    f(&tail, &subkey);
    subkey.zeroize();
}

/// Fills `out` with XSalsa20 keystream (`crypto_stream`).
///
/// The function is pure: the keystream of length `L` is always a prefix
/// of the keystream of any greater length for the same key and nonce.
pub fn keystream(out: &mut [u8], nonce: &[u8; 24], key: &[u8; 32]) {
    out.fill(0);
    xor_in_place(out, nonce, key);
}

/// Encrypts or decrypts `input` into `output` with XSalsa20
/// (`crypto_stream_xor`).
///
/// Returns [`NaclError::LengthMismatch`] when the buffers differ in
/// length; `output` is left untouched in that case.
///
/// # Security
///
/// A `(key, nonce)` pair must never encrypt two different messages.
pub fn xor(output: &mut [u8], input: &[u8], nonce: &[u8; 24], key: &[u8; 32]) -> Result<()> {
    if output.len() != input.len() {
        return Err(NaclError::LengthMismatch {
            expected: input.len(),
            actual: output.len(),
        });
    }

    output.copy_from_slice(input);
    xor_in_place(output, nonce, key);

    Ok(())
}

/// Encrypts or decrypts `buf` in place with XSalsa20.
pub fn xor_in_place(buf: &mut [u8], nonce: &[u8; 24], key: &[u8; 32]) {
    with_subkey(nonce, key, |tail, subkey| apply_keystream(buf, tail, subkey));
}
