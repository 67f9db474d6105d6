//! Entropy sources for key generation.
//!
//! Key generation never reaches the operating system directly. It asks
//! an [`EntropySource`] for bytes, so callers decide where randomness
//! comes from and tests can plug in a deterministic [`Csprng`].
//!
//! [`Csprng`]: super::Csprng

use tracing::{debug, warn};

use crate::error::Result;
use crate::os::sys_random;

/// A source of uniformly random bytes.
pub trait EntropySource {
    /// Fills `buf` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`NaclError::EntropyUnavailable`](crate::error::NaclError::EntropyUnavailable)
    /// when the source cannot deliver. On error the content of `buf` must
    /// not be used.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Handle on the operating system's secure random number generator.
///
/// The handle has a single owner. It is released by [`OsEntropy::close`]
/// or, failing that, when dropped.
///
/// `getrandom`, `arc4random_buf` and `BCryptGenRandom` hold no descriptor
/// to release, so open and close only mark the lifecycle: `open` checks
/// that the source answers, `close` ends the handle's use.
#[derive(Debug)]
pub struct OsEntropy {
    open: bool,
}

impl OsEntropy {
    /// Opens the OS entropy source.
    ///
    /// One byte is drawn and discarded to make sure the source answers
    /// before any key depends on it.
    ///
    /// # Errors
    ///
    /// Returns `EntropyUnavailable` when the platform has no usable
    /// source.
    pub fn open() -> Result<Self> {
        let mut probe = [0u8; 1];

        if let Err(err) = sys_random(&mut probe) {
            warn!("OS entropy source could not be opened: {err}");
            return Err(err);
        }

        debug!("OS entropy source opened");
        Ok(Self { open: true })
    }

    /// Releases the source.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.open {
            self.open = false;
            debug!("OS entropy source closed");
        }
    }
}

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let len = buf.len();

        sys_random(buf).inspect_err(|err| {
            warn!(len, "OS entropy source failed: {err}");
        })
    }
}

impl Drop for OsEntropy {
    fn drop(&mut self) {
        self.release();
    }
}
