//! XSalsa20-Poly1305 secret-key authenticated encryption.
//!
//! ## Layout
//!
//! ```text
//! plaintext   [ 32 reserved bytes | message          ]
//! ciphertext  [ 16 zeros | tag    | encrypted message ]
//! ```
//!
//! ## Algorithm
//!
//! 1. XSalsa20 keystream is XORed over the whole buffer, reserved region
//!    included.
//! 2. The first 32 keystream bytes are the Poly1305 one-time key.
//! 3. The tag covers the encrypted message (bytes `32..`) and is stored in
//!    bytes `16..32`; bytes `0..16` are zeroed.
//!
//! Opening checks the tag before anything is decrypted.
//!
//! ## Notes
//!
//! - The content of the reserved region is ignored on input.
//! - The caller must ensure `(key, nonce)` uniqueness.

use tracing::debug;
use zeroize::Zeroize;

use crate::constants::{BOX_ZERO_BYTES, KEY_BYTES, NONCE_BYTES, ONETIMEAUTH_KEY_BYTES, ZERO_BYTES};
use crate::error::{NaclError, Result};
use crate::onetimeauth;
use crate::stream;

fn check_lengths(output: usize, input: usize) -> Result<()> {
    if input < ZERO_BYTES {
        return Err(NaclError::InvalidLength {
            minimum: ZERO_BYTES,
            actual: input,
        });
    }

    if output != input {
        return Err(NaclError::LengthMismatch {
            expected: input,
            actual: output,
        });
    }

    Ok(())
}

fn check_minimum(len: usize) -> Result<()> {
    check_lengths(len, len)
}

/// Encrypts and authenticates `plaintext` into `ciphertext`
/// (`crypto_secretbox`).
///
/// # Errors
///
/// - [`NaclError::InvalidLength`] if `plaintext` is shorter than
///   [`ZERO_BYTES`]
/// - [`NaclError::LengthMismatch`] if the two buffers differ in length
///
/// Nothing is written to `ciphertext` on error.
pub fn seal(
    ciphertext: &mut [u8],
    plaintext: &[u8],
    nonce: &[u8; NONCE_BYTES],
    key: &[u8; KEY_BYTES],
) -> Result<()> {
    check_lengths(ciphertext.len(), plaintext.len())?;

    ciphertext.copy_from_slice(plaintext);
    seal_in_place(ciphertext, nonce, key)
}

/// Encrypts and authenticates `buffer` in place.
///
/// # Errors
///
/// [`NaclError::InvalidLength`] if `buffer` is shorter than
/// [`ZERO_BYTES`]; the buffer is untouched in that case.
pub fn seal_in_place(
    buffer: &mut [u8],
    nonce: &[u8; NONCE_BYTES],
    key: &[u8; KEY_BYTES],
) -> Result<()> {
    check_minimum(buffer.len())?;

    buffer[..ZERO_BYTES].fill(0);
    stream::xor_in_place(buffer, nonce, key);

    let mut auth_key = [0u8; ONETIMEAUTH_KEY_BYTES];
    auth_key.copy_from_slice(&buffer[..ZERO_BYTES]);

    let tag = onetimeauth::authenticate(&buffer[ZERO_BYTES..], &auth_key);
    auth_key.zeroize();

    buffer[..BOX_ZERO_BYTES].fill(0);
    buffer[BOX_ZERO_BYTES..ZERO_BYTES].copy_from_slice(&tag);

    Ok(())
}

/// Verifies and decrypts `ciphertext` into `plaintext`
/// (`crypto_secretbox_open`).
///
/// On success the first [`ZERO_BYTES`] of `plaintext` are zero and the
/// message follows them.
///
/// # Errors
///
/// - [`NaclError::InvalidLength`] / [`NaclError::LengthMismatch`] as for
///   [`seal`]; `plaintext` is untouched
/// - [`NaclError::AuthenticationFailed`] if the tag does not match;
///   `plaintext` is zero-filled
pub fn open(
    plaintext: &mut [u8],
    ciphertext: &[u8],
    nonce: &[u8; NONCE_BYTES],
    key: &[u8; KEY_BYTES],
) -> Result<()> {
    if let Err(err) = check_lengths(plaintext.len(), ciphertext.len()) {
        debug!(
            len = ciphertext.len(),
            out_len = plaintext.len(),
            "secretbox rejected: bad length"
        );
        return Err(err);
    }

    plaintext.copy_from_slice(ciphertext);
    open_in_place(plaintext, nonce, key).inspect_err(|_| plaintext.fill(0))
}

/// Verifies and decrypts `buffer` in place.
///
/// # Errors
///
/// [`NaclError::InvalidLength`] or [`NaclError::AuthenticationFailed`].
/// The buffer is untouched on either error.
pub fn open_in_place(
    buffer: &mut [u8],
    nonce: &[u8; NONCE_BYTES],
    key: &[u8; KEY_BYTES],
) -> Result<()> {
    if let Err(err) = check_minimum(buffer.len()) {
        debug!(len = buffer.len(), "secretbox rejected: bad length");
        return Err(err);
    }

    let mut auth_key = [0u8; ONETIMEAUTH_KEY_BYTES];
    stream::keystream(&mut auth_key, nonce, key);

    let mut tag = [0u8; 16];
    tag.copy_from_slice(&buffer[BOX_ZERO_BYTES..ZERO_BYTES]);

    let verified = onetimeauth::verify(&tag, &buffer[ZERO_BYTES..], &auth_key);
    auth_key.zeroize();

    if let Err(err) = verified {
        debug!(len = buffer.len(), "secretbox rejected: authentication failed");
        return Err(err);
    }

    stream::xor_in_place(buffer, nonce, key);
    buffer[..ZERO_BYTES].fill(0);

    Ok(())
}
