//! Public, secret and shared key wrappers.
//!
//! All three are plain 32-byte values with no validation at construction
//! time, matching the raw NaCl interface. The wrappers only exist so the
//! argument order of `box` operations is checked by the compiler and so
//! secret bytes are wiped when they go out of scope.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::x25519::scalarmult_base;
use crate::constants::{KEY_BYTES, PUBLIC_KEY_BYTES, SECRET_KEY_BYTES};

/// A Curve25519 public key (Montgomery u-coordinate).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_BYTES]);

impl PublicKey {
    /// Wraps raw public key bytes.
    #[inline]
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_BYTES]) -> Self {
        Self(bytes)
    }

    /// Returns the raw 32-byte encoding.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_BYTES] {
        &self.0
    }

    /// Returns a copy of the raw 32-byte encoding.
    #[inline]
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_BYTES] {
        self.0
    }
}

impl From<[u8; PUBLIC_KEY_BYTES]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_BYTES]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// A Curve25519 secret key.
///
/// The bytes are stored unclamped, exactly as drawn from the entropy
/// source; clamping happens inside every scalar multiplication.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; SECRET_KEY_BYTES]);

impl SecretKey {
    /// Wraps raw secret key bytes.
    #[inline]
    pub fn from_bytes(bytes: [u8; SECRET_KEY_BYTES]) -> Self {
        Self(bytes)
    }

    /// Borrows the raw secret bytes.
    ///
    /// Copies made from this reference are not wiped automatically.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_BYTES] {
        &self.0
    }

    /// Derives the matching public key, `clamp(secret) · 9`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(scalarmult_base(&self.0))
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

/// A precomputed box key, the output of
/// [`beforenm`](crate::encryption::cryptobox::beforenm).
///
/// It is also a valid secretbox key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedKey([u8; KEY_BYTES]);

impl SharedKey {
    /// Wraps raw key bytes.
    #[inline]
    pub fn from_bytes(bytes: [u8; KEY_BYTES]) -> Self {
        Self(bytes)
    }

    /// Borrows the raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_BYTES] {
        &self.0
    }
}

impl fmt::Debug for SharedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedKey").finish_non_exhaustive()
    }
}
