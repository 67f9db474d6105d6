//! Finite field arithmetic for Curve25519.
//!
//! Elements of
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁵ − 19
//! ```
//!
//! are stored as 10 signed limbs with alternating widths
//!
//! ```text
//! [26, 25, 26, 25, 26, 25, 26, 25, 26, 25] bits
//! ```
//!
//! i.e. radix 2²⁵·⁵. Limbs are kept as `i32` and every product or carry
//! is computed in `i64`. Additions and subtractions are left unreduced;
//! multiplication, squaring and the ladder constant product end with a
//! carry chain that brings each limb back to (about) its nominal width.
//!
//! Only [`FieldElement::to_bytes`] produces a canonical value. Two
//! elements must never be compared limb by limb.
//!
//! Nothing in this module branches on or indexes by limb values.

use std::array;
use std::ops::{Add, Mul, Sub};

/// Promotes both operands to `i64` before multiplying.
macro_rules! mul {
    ($a:expr, $b:expr) => {
        ($a as i64) * ($b as i64)
    };
}

/// Width of each limb, lowest first.
const LIMB_BITS: [u32; 10] = [26, 25, 26, 25, 26, 25, 26, 25, 26, 25];

/// Carry order after a full product: the two halves run interleaved so
/// the chain stays short, then the top carry is folded in with ×19 and
/// limb 0 is settled once more.
const PRODUCT_CARRIES: [usize; 12] = [0, 4, 1, 5, 2, 6, 3, 7, 4, 8, 9, 0];

/// Carry order after decoding or a small-constant product.
const LINEAR_CARRIES: [usize; 10] = [9, 1, 3, 5, 7, 0, 2, 4, 6, 8];

/// Byte layout of each limb in the 32-byte encoding:
/// `(byte_offset, loads_four_bytes, left_shift)`.
const LIMB_LAYOUT: [(usize, bool, u32); 10] = [
    (0, true, 0),
    (4, false, 6),
    (7, false, 5),
    (10, false, 3),
    (13, false, 2),
    (16, true, 0),
    (20, false, 7),
    (23, false, 5),
    (26, false, 4),
    (29, false, 2),
];

#[inline(always)]
fn load_3(input: &[u8]) -> i64 {
    i64::from(input[0]) | (i64::from(input[1]) << 8) | (i64::from(input[2]) << 16)
}

#[inline(always)]
fn load_4(input: &[u8]) -> i64 {
    load_3(input) | (i64::from(input[3]) << 24)
}

/// Moves the excess of limb `index` into the next limb, rounding to the
/// nearest multiple of the limb radix. The carry out of limb 9 wraps to
/// limb 0 multiplied by 19, since `2²⁵⁵ ≡ 19 (mod p)`.
#[inline(always)]
fn carry_limb(h: &mut [i64; 10], index: usize) {
    let bits = LIMB_BITS[index];
    let carry = (h[index] + (1i64 << (bits - 1))) >> bits;
    h[index] -= carry << bits;

    if index == 9 {
        h[0] += carry * 19;
    } else {
        h[index + 1] += carry;
    }
}

fn settle(mut h: [i64; 10], order: &[usize]) -> FieldElement {
    for &index in order {
        carry_limb(&mut h, index);
    }

    FieldElement(h.map(|limb| limb as i32))
}

/// Field element modulo `2^255 - 19` in radix `2^25.5`.
#[derive(Clone, Copy)]
pub(crate) struct FieldElement(pub(crate) [i32; 10]);

impl FieldElement {
    /// The additive identity.
    pub(crate) const ZERO: Self = FieldElement([0; 10]);

    /// The multiplicative identity.
    pub(crate) const ONE: Self = FieldElement([1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Constant-time conditional swap.
    ///
    /// `condition` must be `0` or `1`. The mask is `0` or all ones and the
    /// masked difference is XORed into both operands, so the same work
    /// is done whatever the value of `condition`.
    pub(crate) fn swap(&mut self, rhs: &mut Self, condition: u32) {
        let mask = 0i32.wrapping_sub(condition as i32);

        for (s, r) in self.0.iter_mut().zip(rhs.0.iter_mut()) {
            let diff = (*s ^ *r) & mask;
            *s ^= diff;
            *r ^= diff;
        }
    }

    /// Decodes a little-endian 32-byte string. Bit 255 is ignored.
    ///
    /// Non-canonical encodings (values in `[p, 2²⁵⁵)`) are accepted and
    /// reduced by the arithmetic that follows.
    pub(crate) fn from_bytes(input: &[u8; 32]) -> FieldElement {
        let mut h = [0i64; 10];

        for (limb, &(offset, four, shift)) in h.iter_mut().zip(LIMB_LAYOUT.iter()) {
            let raw = if four {
                load_4(&input[offset..])
            } else {
                load_3(&input[offset..])
            };
            *limb = raw << shift;
        }

        // Drop bit 255: limb 9 holds bits 230..=254 only.
        h[9] = (load_3(&input[29..]) & 0x7f_ffff) << 2;

        settle(h, &LINEAR_CARRIES)
    }

    /// Encodes the unique representative in `[0, p)` as 32 little-endian
    /// bytes.
    ///
    /// The first pass estimates `q = ⌊value / p⌋` (0 or 1 for any element
    /// produced by this module) by pushing a carry from limb 9 around the
    /// whole chain. The second pass adds `19·q` and propagates exact floor
    /// carries, dropping the final `2²⁵⁵` carry; this subtracts `q·p`.
    pub(crate) fn to_bytes(self) -> [u8; 32] {
        let mut h = self.0.map(i64::from);

        let mut q = (19 * h[9] + (1i64 << 24)) >> 25;
        for (limb, bits) in h.iter().zip(LIMB_BITS) {
            q = (limb + q) >> bits;
        }

        h[0] += 19 * q;

        for index in 0..9 {
            let bits = LIMB_BITS[index];
            let carry = h[index] >> bits;
            h[index + 1] += carry;
            h[index] -= carry << bits;
        }
        h[9] &= (1i64 << 25) - 1;

        // Limbs are now in [0, 2^width); pack 255 bits.
        let mut out = [0u8; 32];
        let mut acc = 0u64;
        let mut acc_bits = 0u32;
        let mut pos = 0usize;

        for (limb, bits) in h.iter().zip(LIMB_BITS) {
            acc |= (*limb as u64) << acc_bits;
            acc_bits += bits;

            while acc_bits >= 8 {
                out[pos] = acc as u8;
                pos += 1;
                acc >>= 8;
                acc_bits -= 8;
            }
        }
        out[pos] = acc as u8;

        out
    }

    /// Multiplies by `121666 = (486662 + 2) / 4`, the Montgomery ladder
    /// constant of Curve25519.
    pub(crate) fn mul121666(&self) -> Self {
        let h = self.0.map(|limb| mul!(limb, 121_666));
        settle(h, &LINEAR_CARRIES)
    }

    /// Squares the element.
    ///
    /// Same accumulation as [`Mul`], visiting each unordered limb pair once
    /// and doubling the off-diagonal terms.
    pub(crate) fn square(self) -> FieldElement {
        let f = self.0;
        let mut h = [0i64; 10];

        for i in 0..10 {
            for j in i..10 {
                let mut term = mul!(f[i], f[j]);
                if i != j {
                    term *= 2;
                }
                if i % 2 == 1 && j % 2 == 1 {
                    term *= 2;
                }
                if i + j >= 10 {
                    term *= 19;
                }
                h[(i + j) % 10] += term;
            }
        }

        settle(h, &PRODUCT_CARRIES)
    }

    /// Squares the element `n` times.
    pub(crate) fn n_square(self, n: usize) -> FieldElement {
        (0..n).fold(self, |acc, _| acc.square())
    }

    /// Computes `self^(p - 2)`, the multiplicative inverse.
    ///
    /// The exponent is reached through a fixed chain of 254 squarings and
    /// 11 multiplications. Zero maps to zero.
    pub(crate) fn invert(&self) -> Self {
        let z = *self;

        let z2 = z.square();
        let z9 = z2.n_square(2) * z;
        let z11 = z9 * z2;
        let z2_5_0 = z11.square() * z9;
        let z2_10_0 = z2_5_0.n_square(5) * z2_5_0;
        let z2_20_0 = z2_10_0.n_square(10) * z2_10_0;
        let z2_40_0 = z2_20_0.n_square(20) * z2_20_0;
        let z2_50_0 = z2_40_0.n_square(10) * z2_10_0;
        let z2_100_0 = z2_50_0.n_square(50) * z2_50_0;
        let z2_200_0 = z2_100_0.n_square(100) * z2_100_0;
        let z2_250_0 = z2_200_0.n_square(50) * z2_50_0;

        // 2^255 - 32 + 11 = p - 2
        z2_250_0.n_square(5) * z11
    }
}

impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        FieldElement(array::from_fn(|index| self.0[index] + rhs.0[index]))
    }
}

impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        FieldElement(array::from_fn(|index| self.0[index] - rhs.0[index]))
    }
}

/// Schoolbook product over the 10 limbs.
///
/// Limb `i` carries weight `2^⌈25.5·i⌉`, so the product of two odd limbs
/// lands one bit above the slot it is accumulated in and is doubled.
/// Terms with `i + j ≥ 10` pass `2²⁵⁵` and wrap to slot `i + j − 10`
/// multiplied by 19.
impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: Self) -> Self::Output {
        let f = self.0;
        let g = rhs.0;
        let mut h = [0i64; 10];

        for i in 0..10 {
            for j in 0..10 {
                let mut term = mul!(f[i], g[j]);
                if i % 2 == 1 && j % 2 == 1 {
                    term *= 2;
                }
                if i + j >= 10 {
                    term *= 19;
                }
                h[(i + j) % 10] += term;
            }
        }

        settle(h, &PRODUCT_CARRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldElement;

    const P: [u8; 32] = {
        let mut p = [0xffu8; 32];
        p[0] = 0xed;
        p[31] = 0x7f;
        p
    };

    fn fe(value: u32) -> FieldElement {
        let mut bytes = [0u8; 32];
        bytes[..4].copy_from_slice(&value.to_le_bytes());
        FieldElement::from_bytes(&bytes)
    }

    fn sample() -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (index, byte) in bytes.iter_mut().enumerate() {
            *byte = (index as u8).wrapping_mul(37).wrapping_add(11);
        }
        bytes[31] &= 0x3f;
        bytes
    }

    #[test]
    fn canonical_bytes_round_trip() {
        let bytes = sample();
        assert_eq!(FieldElement::from_bytes(&bytes).to_bytes(), bytes);
    }

    #[test]
    fn modulus_encodes_as_zero() {
        assert_eq!(FieldElement::from_bytes(&P).to_bytes(), [0u8; 32]);

        let mut p_plus_one = P;
        p_plus_one[0] += 1;
        assert_eq!(FieldElement::from_bytes(&p_plus_one).to_bytes(), fe(1).to_bytes());

        let mut top = [0xffu8; 32];
        top[31] = 0x7f;
        assert_eq!(FieldElement::from_bytes(&top).to_bytes(), fe(18).to_bytes());
    }

    #[test]
    fn high_bit_is_ignored() {
        let bytes = sample();
        let mut flagged = bytes;
        flagged[31] |= 0x80;
        assert_eq!(FieldElement::from_bytes(&flagged).to_bytes(), bytes);
    }

    #[test]
    fn subtraction_wraps_modulo_p() {
        let diff = FieldElement::ZERO - FieldElement::ONE;
        let mut expected = P;
        expected[0] -= 1;
        assert_eq!(diff.to_bytes(), expected);
    }

    #[test]
    fn square_matches_mul() {
        let x = FieldElement::from_bytes(&sample());
        assert_eq!(x.square().to_bytes(), (x * x).to_bytes());
        assert_eq!(x.n_square(3).to_bytes(), (x * x * x * x * x * x * x * x).to_bytes());
    }

    #[test]
    fn small_products() {
        assert_eq!((fe(6) * fe(7)).to_bytes(), fe(42).to_bytes());
        assert_eq!(fe(3).mul121666().to_bytes(), fe(364_998).to_bytes());

        let x = FieldElement::from_bytes(&sample());
        assert_eq!(x.mul121666().to_bytes(), (x * fe(121_666)).to_bytes());
    }

    #[test]
    fn invert_is_multiplicative_inverse() {
        for x in [fe(9), fe(2), FieldElement::from_bytes(&sample())] {
            assert_eq!((x * x.invert()).to_bytes(), FieldElement::ONE.to_bytes());
        }

        assert_eq!(FieldElement::ZERO.invert().to_bytes(), [0u8; 32]);
    }

    #[test]
    fn swap_is_conditional() {
        let mut a = fe(5);
        let mut b = fe(8);

        a.swap(&mut b, 0);
        assert_eq!(a.to_bytes(), fe(5).to_bytes());
        assert_eq!(b.to_bytes(), fe(8).to_bytes());

        a.swap(&mut b, 1);
        assert_eq!(a.to_bytes(), fe(8).to_bytes());
        assert_eq!(b.to_bytes(), fe(5).to_bytes());
    }
}
