//! Error types for the box and secretbox constructions.
//!
//! The arithmetic layers (field, Salsa20, Poly1305) never fail. Every
//! error below comes from a length check, a tag check, or the entropy
//! source used for key generation, and each one is terminal for the call
//! that produced it.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = core::result::Result<T, NaclError>;

/// Errors returned by the public operations of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NaclError {
    /// The buffer is shorter than the reserved zero-padding region.
    ///
    /// No cryptographic work is performed when this is returned.
    #[error("invalid buffer length: expected at least {minimum} bytes, got {actual}")]
    InvalidLength {
        /// Smallest accepted length in bytes.
        minimum: usize,
        /// Length that was provided.
        actual: usize,
    },

    /// Input and output buffers do not have the same length.
    #[error("buffer length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Length of the input buffer.
        expected: usize,
        /// Length of the output buffer.
        actual: usize,
    },

    /// The Poly1305 tag did not match.
    ///
    /// Any output produced alongside this error must be discarded.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// No secure entropy source could be reached.
    #[error("secure entropy source unavailable: {reason}")]
    EntropyUnavailable {
        /// Short description of the failing source.
        reason: &'static str,
    },
}
