//! One-shot Poly1305 authenticate and verify.
//!
//! A Poly1305 key authenticates a single message. Reusing a key for two
//! different messages lets an observer forge tags for that key.

use zeroize::Zeroize;

use super::mac::Poly1305;
use crate::constants::{ONETIMEAUTH_KEY_BYTES, TAG_BYTES};
use crate::ct::verify_16;
use crate::error::{NaclError, Result};

/// Computes the 16-byte Poly1305 tag of `message` (`crypto_onetimeauth`).
///
/// The message is consumed in 16-byte chunks; the last chunk may be
/// shorter. An empty message yields the `s` half of the key.
pub fn authenticate(message: &[u8], key: &[u8; ONETIMEAUTH_KEY_BYTES]) -> [u8; TAG_BYTES] {
    let mut mac = Poly1305::new(key);

    for chunk in message.chunks(16) {
        mac.update_block(chunk);
    }

    mac.finalize()
}

/// Checks `tag` against the Poly1305 tag of `message`
/// (`crypto_onetimeauth_verify`).
///
/// The comparison runs in constant time.
///
/// # Errors
///
/// Returns [`NaclError::AuthenticationFailed`] when the tags differ.
pub fn verify(
    tag: &[u8; TAG_BYTES],
    message: &[u8],
    key: &[u8; ONETIMEAUTH_KEY_BYTES],
) -> Result<()> {
    let mut expected = authenticate(message, key);
    let matches = verify_16(tag, &expected);
    expected.zeroize();

    if matches {
        Ok(())
    } else {
        Err(NaclError::AuthenticationFailed)
    }
}
