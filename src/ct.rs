//! Constant-time comparison utilities.
//!
//! Comparisons of tags and keys must not reveal where the first
//! differing byte is. Every byte is XORed, the differences are OR-ed
//! into a single accumulator, and only that accumulator is inspected.

/// Constant-time equality.
///
/// Implementations must touch every byte of both operands regardless of
/// their content and must not return early.
pub trait ConstantTimeEq {
    /// Returns `true` if `self == other`, in constant time.
    fn ct_eq(&self, other: &Self) -> bool;
}

impl<const N: usize> ConstantTimeEq for [u8; N] {
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> bool {
        let diff = self
            .iter()
            .zip(other)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b));

        // 1 when diff == 0, 0 otherwise, without a data-dependent branch.
        ((u32::from(diff).wrapping_sub(1) >> 8) & 1) == 1
    }
}

/// Compares two 16-byte strings in constant time (`crypto_verify_16`).
#[inline]
pub fn verify_16(x: &[u8; 16], y: &[u8; 16]) -> bool {
    x.ct_eq(y)
}

/// Compares two 32-byte strings in constant time (`crypto_verify_32`).
#[inline]
pub fn verify_32(x: &[u8; 32], y: &[u8; 32]) -> bool {
    x.ct_eq(y)
}
