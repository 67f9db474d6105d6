//! Byte lengths of every key, nonce, tag and reserved region.
//!
//! These values are part of the wire contract and never change.

/// Length of a Curve25519 public key.
pub const PUBLIC_KEY_BYTES: usize = 32;

/// Length of a Curve25519 secret key (scalar).
pub const SECRET_KEY_BYTES: usize = 32;

/// Length of a Diffie–Hellman shared secret before key derivation.
pub const SCALAR_MULT_BYTES: usize = 32;

/// Length of a box `beforenm` key or a secretbox key.
pub const KEY_BYTES: usize = 32;

/// Length of an XSalsa20 / box / secretbox nonce.
pub const NONCE_BYTES: usize = 24;

/// Length of a raw Salsa20 stream nonce.
pub const SALSA20_NONCE_BYTES: usize = 8;

/// Length of the Salsa20 / HSalsa20 core input block.
pub const CORE_INPUT_BYTES: usize = 16;

/// Length of one Salsa20 keystream block.
pub const BLOCK_BYTES: usize = 64;

/// Length of a Poly1305 tag.
pub const TAG_BYTES: usize = 16;

/// Length of a Poly1305 one-time key.
pub const ONETIMEAUTH_KEY_BYTES: usize = 32;

/// Reserved zero prefix of every plaintext buffer.
pub const ZERO_BYTES: usize = 32;

/// Zero prefix of every ciphertext buffer (the tag follows it).
pub const BOX_ZERO_BYTES: usize = 16;

/// The Salsa20 constant `"expand 32-byte k"`.
pub const SIGMA: [u8; 16] = *b"expand 32-byte k";
