//! Salsa20-family stream ciphers.
//!
//! - `core`  
//!   The Salsa20 block function and the HSalsa20 key derivation
//!   function. Both run the same 20-round permutation and are exposed
//!   as two separately named functions because their outputs serve
//!   different purposes.
//!
//! - [`salsa20`]  
//!   Counter-mode Salsa20 with an 8-byte nonce.
//!
//! - XSalsa20 (re-exported at this level)  
//!   Salsa20 under a subkey derived by HSalsa20 from the first 16 bytes
//!   of a 24-byte nonce. This is the cipher used by
//!   [`secretbox`](crate::encryption::secretbox).
//!
//! Encryption and decryption are the same operation. None of these
//! functions authenticate anything.

mod core;
pub mod salsa20;
mod xsalsa20;

pub use self::core::{hsalsa20, salsa20 as salsa20_core};
pub use self::xsalsa20::{keystream, xor, xor_in_place};
