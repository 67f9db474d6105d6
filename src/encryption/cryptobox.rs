//! Curve25519-XSalsa20-Poly1305 public-key authenticated encryption.
//!
//! A box is a secretbox whose key is derived from a Diffie–Hellman
//! exchange:
//!
//! ```text
//! k = HSalsa20(0^16, X25519(my_secret, their_public), SIGMA)
//! ```
//!
//! Both parties derive the same `k`, so either one can open what the
//! other sealed. When many messages go to the same peer, compute `k`
//! once with [`beforenm`] and use [`afternm`] / [`open_afternm`].

use zeroize::Zeroize;

use super::secretbox;
use crate::constants::{NONCE_BYTES, SECRET_KEY_BYTES, SIGMA};
use crate::error::Result;
use crate::keys::{PublicKey, SecretKey, SharedKey, x25519};
use crate::rng::{EntropySource, OsEntropy};
use crate::stream::hsalsa20;

/// Generates a key pair from the operating system's entropy source
/// (`crypto_box_keypair`).
///
/// # Errors
///
/// Returns [`NaclError::EntropyUnavailable`](crate::error::NaclError::EntropyUnavailable)
/// when the OS source cannot be opened or read. No key is produced in
/// that case.
pub fn keypair() -> Result<(PublicKey, SecretKey)> {
    let mut os = OsEntropy::open()?;
    let pair = keypair_with(&mut os);
    os.close();

    pair
}

/// Generates a key pair from 32 bytes of `source`.
pub fn keypair_with<E: EntropySource + ?Sized>(source: &mut E) -> Result<(PublicKey, SecretKey)> {
    let mut bytes = [0u8; SECRET_KEY_BYTES];

    if let Err(err) = source.fill(&mut bytes) {
        bytes.zeroize();
        return Err(err);
    }

    let secret = SecretKey::from_bytes(bytes);
    bytes.zeroize();

    Ok((secret.public_key(), secret))
}

/// Derives the shared box key (`crypto_box_beforenm`).
///
/// `beforenm(b_pub, a_sec)` equals `beforenm(a_pub, b_sec)`.
pub fn beforenm(their_public: &PublicKey, my_secret: &SecretKey) -> SharedKey {
    let mut shared = x25519::scalarmult(my_secret.as_bytes(), their_public.as_bytes());
    let mut key = hsalsa20(&[0u8; 16], &shared, &SIGMA);
    shared.zeroize();

    let shared_key = SharedKey::from_bytes(key);
    key.zeroize();

    shared_key
}

/// Seals a message under a precomputed key (`crypto_box_afternm`).
///
/// Same buffer convention and errors as [`secretbox::seal`].
pub fn afternm(
    ciphertext: &mut [u8],
    plaintext: &[u8],
    nonce: &[u8; NONCE_BYTES],
    key: &SharedKey,
) -> Result<()> {
    secretbox::seal(ciphertext, plaintext, nonce, key.as_bytes())
}

/// Opens a message under a precomputed key (`crypto_box_open_afternm`).
///
/// Same buffer convention and errors as [`secretbox::open`].
pub fn open_afternm(
    plaintext: &mut [u8],
    ciphertext: &[u8],
    nonce: &[u8; NONCE_BYTES],
    key: &SharedKey,
) -> Result<()> {
    secretbox::open(plaintext, ciphertext, nonce, key.as_bytes())
}

/// Encrypts and authenticates `plaintext` from `my_secret` to
/// `their_public` (`crypto_box`).
pub fn seal(
    ciphertext: &mut [u8],
    plaintext: &[u8],
    nonce: &[u8; NONCE_BYTES],
    their_public: &PublicKey,
    my_secret: &SecretKey,
) -> Result<()> {
    let key = beforenm(their_public, my_secret);
    afternm(ciphertext, plaintext, nonce, &key)
}

/// Verifies and decrypts a box sent by `their_public` to `my_secret`
/// (`crypto_box_open`).
pub fn open(
    plaintext: &mut [u8],
    ciphertext: &[u8],
    nonce: &[u8; NONCE_BYTES],
    their_public: &PublicKey,
    my_secret: &SecretKey,
) -> Result<()> {
    let key = beforenm(their_public, my_secret);
    open_afternm(plaintext, ciphertext, nonce, &key)
}
