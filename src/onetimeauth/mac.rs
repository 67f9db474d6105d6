use zeroize::{Zeroize, ZeroizeOnDrop};

/// `2^136 - p` as 17 base-256 limbs, with `p = 2^130 - 5`.
///
/// Adding it modulo `2^136` subtracts `p`.
const MINUS_P: [u32; 17] = [5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 252];

/// Adds `c` into `h` limb by limb, carrying 8 bits at a time. The carry
/// out of limb 16 is dropped (arithmetic modulo `2^136`).
#[inline(always)]
fn add_limbs(h: &mut [u32; 17], c: &[u32; 17]) {
    let mut u = 0u32;

    for (h_j, c_j) in h.iter_mut().zip(c) {
        u += *h_j + c_j;
        *h_j = u & 255;
        u >>= 8;
    }
}

/// Poly1305 accumulator over GF(2^130 - 5).
///
/// Numbers are held as 17 limbs of 8 bits, little-endian. A limb may
/// briefly exceed 8 bits inside [`Poly1305::update_block`]; every public
/// step leaves limbs 0..16 below 256 and limb 16 small.
///
/// An instance authenticates exactly one message and is wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct Poly1305 {
    /// Clamped multiplier `r`.
    r: [u32; 17],

    /// Running accumulator `h`.
    h: [u32; 17],

    /// Final additive key `s`.
    s: [u8; 16],
}

impl Poly1305 {
    /// Splits a one-time key into `r = key[0..16]` and `s = key[16..32]`
    /// and clamps `r`: the top four bits of bytes 3, 7, 11 and 15 and the
    /// bottom two bits of bytes 4, 8 and 12 are cleared.
    pub(crate) fn new(one_time_key: &[u8; 32]) -> Self {
        let mut r = [0u32; 17];
        for (r_j, &k) in r.iter_mut().zip(&one_time_key[..16]) {
            *r_j = u32::from(k);
        }

        for index in [3, 7, 11, 15] {
            r[index] &= 15;
        }
        for index in [4, 8, 12] {
            r[index] &= 252;
        }

        let mut s = [0u8; 16];
        s.copy_from_slice(&one_time_key[16..]);

        Poly1305 { r, h: [0; 17], s }
    }

    /// Absorbs one chunk of at most 16 bytes.
    ///
    /// The chunk is read as a little-endian number with a single `1` byte
    /// appended right after its last byte, then
    ///
    /// ```text
    /// h = (h + chunk) · r  mod 2^130 - 5
    /// ```
    ///
    /// The product is a schoolbook product over 17 limbs. A partial
    /// product at position `i + j ≥ 17` stands for `2^(8(i+j))`, that is
    /// `2^136 · 2^(8(i+j-17))`, and `2^136 = 2^6 · 2^130 ≡ 64 · 5 = 320`,
    /// so it is folded into limb `i + j - 17` multiplied by 320.
    pub(crate) fn update_block(&mut self, block: &[u8]) {
        debug_assert!(block.len() <= 16);

        let mut c = [0u32; 17];
        for (c_j, &m) in c.iter_mut().zip(block) {
            *c_j = u32::from(m);
        }
        c[block.len()] = 1;

        add_limbs(&mut self.h, &c);

        let mut x = [0u32; 17];
        for (i, x_i) in x.iter_mut().enumerate() {
            for (j, &h_j) in self.h.iter().enumerate() {
                let r = if j <= i {
                    self.r[i - j]
                } else {
                    320 * self.r[i + 17 - j]
                };
                *x_i += h_j * r;
            }
        }
        self.h = x;

        // Carry through the low 16 limbs, keep 2 bits in limb 16 and fold
        // everything above 2^130 back in multiplied by 5.
        let mut u = 0u32;
        for h_j in &mut self.h[..16] {
            u += *h_j;
            *h_j = u & 255;
            u >>= 8;
        }
        u += self.h[16];
        self.h[16] = u & 3;

        u = 5 * (u >> 2);
        for h_j in &mut self.h[..16] {
            u += *h_j;
            *h_j = u & 255;
            u >>= 8;
        }
        u += self.h[16];
        self.h[16] = u;

        x.zeroize();
    }

    /// Fully reduces the accumulator, adds `s` and returns the tag.
    ///
    /// `h - p` is always computed; the sign bit of the difference selects
    /// between `h` and `h - p` through a mask, never a branch.
    pub(crate) fn finalize(mut self) -> [u8; 16] {
        let g = self.h;
        add_limbs(&mut self.h, &MINUS_P);

        // All ones when h - p went negative, i.e. h < p.
        let mask = 0u32.wrapping_sub(self.h[16] >> 7);
        for (h_j, g_j) in self.h.iter_mut().zip(&g) {
            *h_j ^= mask & (g_j ^ *h_j);
        }

        let mut c = [0u32; 17];
        for (c_j, &s_j) in c.iter_mut().zip(&self.s) {
            *c_j = u32::from(s_j);
        }
        add_limbs(&mut self.h, &c);

        let mut tag = [0u8; 16];
        for (t, &h_j) in tag.iter_mut().zip(&self.h) {
            *t = h_j as u8;
        }

        tag
    }
}

#[cfg(test)]
mod tests {
    use super::Poly1305;

    fn key() -> [u8; 32] {
        let mut key = [0u8; 32];
        for (index, byte) in key.iter_mut().enumerate() {
            *byte = 0xa0 ^ (index as u8).wrapping_mul(29);
        }
        key
    }

    fn tag_of(key: &[u8; 32], message: &[u8]) -> [u8; 16] {
        let mut mac = Poly1305::new(key);
        for chunk in message.chunks(16) {
            mac.update_block(chunk);
        }
        mac.finalize()
    }

    #[test]
    fn empty_message_yields_s() {
        let key = key();
        assert_eq!(tag_of(&key, b"")[..], key[16..]);
    }

    #[test]
    fn clamped_bits_of_r_are_ignored() {
        let key = key();
        let mut noisy = key;
        noisy[3] |= 0xf0;
        noisy[4] |= 0x03;
        noisy[15] |= 0xf0;

        let message = b"clamping keeps r below 2^124 in every limb group";
        assert_eq!(tag_of(&key, message), tag_of(&noisy, message));
    }

    #[test]
    fn trailing_zero_changes_tag() {
        let key = key();
        assert_ne!(tag_of(&key, b"abc"), tag_of(&key, b"abc\0"));
        assert_ne!(tag_of(&key, &[0u8; 16]), tag_of(&key, &[0u8; 15]));
    }

    #[test]
    fn r_of_zero_yields_s() {
        let mut key = key();
        key[..16].fill(0);
        assert_eq!(tag_of(&key, b"anything at all, any length")[..], key[16..]);
    }
}
