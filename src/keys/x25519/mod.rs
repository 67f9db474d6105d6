//! Curve25519 scalar multiplication.
//!
//! This module provides the Diffie–Hellman primitive used by
//! [`crate::encryption::cryptobox`]: multiplication of a clamped secret
//! scalar by a point given only by its Montgomery u-coordinate.
//!
//! ## Structure
//!
//! - `field`  
//!   Arithmetic in GF(2²⁵⁵ − 19) on 10 limbs of 25.5 bits. This is the
//!   only field representation in the crate.
//!
//! - `core`  
//!   Clamping, the Montgomery ladder and base-point multiplication.
//!
//! Neither layer can fail. Degenerate scalars or points give a defined
//! (possibly all-zero) output and never panic; validating keys is the
//! caller's job.

mod core;
pub(crate) mod field;

pub use self::core::*;
