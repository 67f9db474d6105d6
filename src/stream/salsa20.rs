//! Salsa20 stream cipher with an 8-byte nonce.
//!
//! The 16-byte core input is the nonce followed by a 64-bit
//! little-endian block counter starting at zero. Each 64-byte block of
//! the message is XORed with one core output; the last, shorter block
//! uses only a prefix of its keystream.
//!
//! This is `crypto_stream_salsa20` / `crypto_stream_salsa20_xor`.
//! [`crate::stream`] builds XSalsa20 on top of it.

use super::core::salsa20;
use crate::constants::{BLOCK_BYTES, SIGMA};
use crate::error::{NaclError, Result};

/// Adds one to the little-endian counter held in bytes 8..16.
#[inline(always)]
fn increment_counter(input: &mut [u8; 16]) {
    let mut carry = 1u16;

    for byte in &mut input[8..] {
        carry += u16::from(*byte);
        *byte = carry as u8;
        carry >>= 8;
    }
}

/// XORs the keystream into `buf`.
pub(crate) fn apply_keystream(buf: &mut [u8], nonce: &[u8; 8], key: &[u8; 32]) {
    let mut input = [0u8; 16];
    input[..8].copy_from_slice(nonce);

    for chunk in buf.chunks_mut(BLOCK_BYTES) {
        let block = salsa20(&input, key, &SIGMA);

        chunk.iter_mut().zip(block.iter()).for_each(|(b, k)| *b ^= k);

        increment_counter(&mut input);
    }
}

/// Fills `out` with raw keystream.
pub fn keystream(out: &mut [u8], nonce: &[u8; 8], key: &[u8; 32]) {
    out.fill(0);
    apply_keystream(out, nonce, key);
}

/// Encrypts or decrypts `input` into `output`.
///
/// Returns [`NaclError::LengthMismatch`] when the buffers differ in
/// length; `output` is left untouched in that case.
pub fn xor(output: &mut [u8], input: &[u8], nonce: &[u8; 8], key: &[u8; 32]) -> Result<()> {
    if output.len() != input.len() {
        return Err(NaclError::LengthMismatch {
            expected: input.len(),
            actual: output.len(),
        });
    }

    output.copy_from_slice(input);
    apply_keystream(output, nonce, key);

    Ok(())
}

/// Encrypts or decrypts `buf` in place.
pub fn xor_in_place(buf: &mut [u8], nonce: &[u8; 8], key: &[u8; 32]) {
    apply_keystream(buf, nonce, key);
}
