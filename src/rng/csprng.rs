//! Salsa20-based CSPRNG.
//!
//! The generator expands a 32-byte seed with the Salsa20 core in counter
//! mode:
//!
//! - the seed becomes the Salsa20 key, the nonce is fixed to zero
//! - output is produced one 64-byte block at a time
//! - after every request the generator rekeys itself from one more block
//!
//! The rekey gives forward secrecy: a state captured after a call does
//! not reveal the bytes that call returned.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::entropy::{EntropySource, OsEntropy};
use crate::constants::{BLOCK_BYTES, SIGMA};
use crate::error::Result;
use crate::stream::salsa20_core;

/// Cryptographically secure pseudorandom number generator.
///
/// Seeded from an [`EntropySource`] or from caller-supplied bytes. The
/// same seed always produces the same output stream, which is what makes
/// it usable as a deterministic source in tests.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Csprng {
    /// Internal Salsa20 key (256-bit)
    key: [u8; 32],

    /// Nonce, fixed to zero for generator use
    nonce: [u8; 8],

    /// Block counter
    counter: u64,
}

impl Csprng {
    /// Creates a generator from a caller-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable. The caller's
    /// copy is not wiped; the generator's own copy is wiped on drop.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            key: seed,
            nonce: [0u8; 8],
            counter: 0,
        }
    }

    /// Creates a generator seeded with 32 bytes from `source`.
    ///
    /// # Errors
    ///
    /// Propagates the source's error; no generator is built from a
    /// partial seed.
    pub fn from_entropy<E: EntropySource + ?Sized>(source: &mut E) -> Result<Self> {
        let mut seed = [0u8; 32];

        let filled = source.fill(&mut seed);
        let rng = filled.map(|()| Self::from_seed(seed));
        seed.zeroize();

        rng
    }

    /// Creates a generator seeded from the operating system.
    pub fn from_os() -> Result<Self> {
        let mut os = OsEntropy::open()?;
        let rng = Self::from_entropy(&mut os);
        os.close();

        rng
    }

    /// Fills `out` with pseudorandom bytes, then rekeys.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(BLOCK_BYTES) {
            let mut block = self.next_block();
            chunk.copy_from_slice(&block[..chunk.len()]);
            block.zeroize();
        }

        self.rekey();
    }

    fn next_block(&mut self) -> [u8; 64] {
        let mut input = [0u8; 16];
        input[..8].copy_from_slice(&self.nonce);
        input[8..].copy_from_slice(&self.counter.to_le_bytes());

        self.counter = self.counter.wrapping_add(1);

        salsa20_core(&input, &self.key, &SIGMA)
    }

    /// Replaces the key with the first 32 bytes of a fresh block.
    fn rekey(&mut self) {
        let mut block = self.next_block();
        self.key.copy_from_slice(&block[..32]);
        block.zeroize();
    }
}

impl EntropySource for Csprng {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        self.fill_bytes(buf);
        Ok(())
    }
}
