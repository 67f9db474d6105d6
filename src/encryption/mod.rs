//! Authenticated encryption.
//!
//! - [`secretbox`]: XSalsa20 + Poly1305 under a shared 32-byte key
//! - [`cryptobox`]: Curve25519 key agreement followed by secretbox
//!
//! Both use the zero-padded buffer convention: a plaintext buffer starts
//! with [`ZERO_BYTES`](crate::constants::ZERO_BYTES) reserved bytes, a
//! ciphertext buffer starts with
//! [`BOX_ZERO_BYTES`](crate::constants::BOX_ZERO_BYTES) zero bytes
//! followed by the 16-byte tag. Plaintext and ciphertext buffers of one
//! message have the same length.

pub mod cryptobox;
pub mod secretbox;
