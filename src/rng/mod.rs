//! Randomness for key generation.
//!
//! - [`EntropySource`]: the seam key generation draws from
//! - [`OsEntropy`]: the operating system's secure RNG
//! - [`Csprng`]: a seeded Salsa20 generator, deterministic for a given
//!   seed

mod csprng;
mod entropy;

pub use csprng::Csprng;
pub use entropy::{EntropySource, OsEntropy};
