//! Poly1305 one-time authenticator.
//!
//! The implementation is split into two layers:
//!
//! - `mac`: the accumulator over GF(2^130 - 5), key clamping, block
//!   absorption and final reduction
//! - `core`: single-shot [`authenticate`] and [`verify`]
//!
//! Secretbox builds on `core`; the accumulator itself stays internal.

mod core;
pub(crate) mod mac;

pub use self::core::{authenticate, verify};
