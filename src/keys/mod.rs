//! Key material and key agreement.
//!
//! - `x25519`  
//!   Curve25519 scalar multiplication (Montgomery ladder, x-coordinate
//!   only), used to derive public keys and Diffie–Hellman secrets.
//!
//! - `types`  
//!   Fixed-size wrappers for public, secret and shared keys. Secret and
//!   shared keys are wiped from memory when dropped.

mod types;
pub mod x25519;

pub use types::{PublicKey, SecretKey, SharedKey};
