//! NaCl-compatible authenticated encryption.
//!
//! This crate implements the `box` and `secretbox` constructions and the
//! primitives beneath them, byte-for-byte compatible with NaCl and
//! libsodium.
//!
//! The focus is on **clarity, predictability, and auditability**. Every
//! primitive is written out in full inside the crate; there is no
//! bignum library and no assembly.
//!
//! # Module overview
//!
//! - `keys`  
//!   Curve25519 scalar multiplication over GF(2²⁵⁵ − 19), and the
//!   public, secret and shared key types.
//!
//! - `stream`  
//!   The Salsa20 and HSalsa20 core functions, and the Salsa20 and
//!   XSalsa20 stream ciphers built from them.
//!
//! - `onetimeauth`  
//!   The Poly1305 one-time authenticator.
//!
//! - `encryption`  
//!   `secretbox` (XSalsa20 + Poly1305) and `cryptobox` (Curve25519 key
//!   agreement + secretbox).
//!
//! - `rng`  
//!   Entropy sources for key generation: the operating system's RNG and
//!   a seeded Salsa20 generator.
//!
//! - `ct`  
//!   Constant-time comparison.
//!
//! # Design goals
//!
//! - No heap allocations in core primitives
//! - No secret-dependent branches or memory indices
//! - Secret material wiped when dropped
//! - Errors only at the API boundary: lengths, tags and entropy
//!
//! # Example
//!
//! ```
//! use saltbox::encryption::cryptobox;
//! use saltbox::constants::ZERO_BYTES;
//! use saltbox::rng::Csprng;
//!
//! let mut rng = Csprng::from_seed([7u8; 32]);
//! let (alice_pk, alice_sk) = cryptobox::keypair_with(&mut rng)?;
//! let (bob_pk, bob_sk) = cryptobox::keypair_with(&mut rng)?;
//!
//! let nonce = [1u8; 24];
//! let mut message = vec![0u8; ZERO_BYTES];
//! message.extend_from_slice(b"hello bob");
//!
//! let mut sealed = vec![0u8; message.len()];
//! cryptobox::seal(&mut sealed, &message, &nonce, &bob_pk, &alice_sk)?;
//!
//! let mut opened = vec![0u8; sealed.len()];
//! cryptobox::open(&mut opened, &sealed, &nonce, &alice_pk, &bob_sk)?;
//! assert_eq!(&opened[ZERO_BYTES..], b"hello bob");
//! # Ok::<(), saltbox::NaclError>(())
//! ```

mod os;

pub mod constants;
pub mod ct;
pub mod encryption;
pub mod error;
pub mod keys;
pub mod onetimeauth;
pub mod rng;
pub mod stream;

pub use error::{NaclError, Result};
