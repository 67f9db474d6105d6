use zeroize::Zeroize;

use super::field::FieldElement;

/// The Curve25519 base point, `u = 9`.
pub const BASE_POINT: [u8; 32] = {
    let mut point = [0u8; 32];
    point[0] = 9;
    point
};

/// Clamps a 32-byte secret into a Curve25519 scalar.
///
/// Clears the three low bits (cofactor), clears bit 255 and sets bit 254
/// so the ladder always runs over the same number of significant bits.
#[inline]
pub fn clamp(secret: &[u8; 32]) -> [u8; 32] {
    let mut e = *secret;
    e[0] &= 248;
    e[31] &= 127;
    e[31] |= 64;
    e
}

/// Curve25519 scalar multiplication on Montgomery u-coordinates.
///
/// Computes `clamp(scalar) · point` and returns the u-coordinate of the
/// result. This is `crypto_scalarmult` from NaCl.
///
/// ## Algorithm
///
/// The ladder keeps `(x2:z2) = k·P` and `(x3:z3) = (k+1)·P` in
/// projective form. For each bit from 254 down to 0 the two pairs are
/// swapped when the bit differs from the previous one, and one combined
/// differential addition and doubling step is applied. A single inversion
/// at the end returns to affine form.
///
/// ## Security
///
/// - Every bit costs the same field operations; the scalar only ever
///   reaches [`FieldElement::swap`] as a 0/1 mask.
/// - The peer point is not validated. Low-order inputs yield the all-zero
///   output, which is returned as is.
pub fn scalarmult(scalar: &[u8; 32], point: &[u8; 32]) -> [u8; 32] {
    let mut e = clamp(scalar);

    let x1 = FieldElement::from_bytes(point);
    let mut x2 = FieldElement::ONE;
    let mut z2 = FieldElement::ZERO;
    let mut x3 = x1;
    let mut z3 = FieldElement::ONE;

    let mut swap = 0u32;

    for pos in (0..=254usize).rev() {
        let bit = u32::from((e[pos >> 3] >> (pos & 7)) & 1);
        swap ^= bit;
        x2.swap(&mut x3, swap);
        z2.swap(&mut z3, swap);
        swap = bit;

        let d = x3 - z3;
        let b = x2 - z2;
        let a = x2 + z2;
        let c = x3 + z3;

        let da = d * a;
        let cb = c * b;
        let bb = b.square();
        let aa = a.square();

        x3 = (da + cb).square();
        z3 = x1 * (da - cb).square();
        x2 = aa * bb;

        let e_diff = aa - bb;
        z2 = e_diff * (bb + e_diff.mul121666());
    }

    x2.swap(&mut x3, swap);
    z2.swap(&mut z3, swap);

    e.zeroize();

    (x2 * z2.invert()).to_bytes()
}

/// Multiplies the base point by a secret scalar.
///
/// This is how a public key is derived from a secret key
/// (`crypto_scalarmult_base`).
pub fn scalarmult_base(scalar: &[u8; 32]) -> [u8; 32] {
    scalarmult(scalar, &BASE_POINT)
}
