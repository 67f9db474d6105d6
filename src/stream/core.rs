//! Salsa20 and HSalsa20 core functions.
//!
//! Both functions load the same 16-word state from a 16-byte constant, a
//! 32-byte key and a 16-byte input, and apply the same 20-round
//! permutation. They differ only in what they return:
//!
//! - [`salsa20`] adds the input state back (feed-forward) and returns all
//!   64 bytes. It is a keystream block generator.
//! - [`hsalsa20`] returns 8 of the permuted words without feed-forward.
//!   It is a key derivation function used to extend the nonce and to
//!   hash a Diffie–Hellman secret into a box key; its output must never
//!   be used as keystream.
//!
//! State layout (word indices):
//!
//! ```text
//!  c0  k0  k1  k2
//!  k3  c1  i0  i1
//!  i2  i3  c2  k4
//!  k5  k6  k7  c3
//! ```

/// Performs one Salsa20 quarter round on words `(a, b, c, d)`.
///
/// Additions wrap modulo 2³²; rotations are 7, 9, 13 and 18 bits.
#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[b] ^= state[a].wrapping_add(state[d]).rotate_left(7);
    state[c] ^= state[b].wrapping_add(state[a]).rotate_left(9);
    state[d] ^= state[c].wrapping_add(state[b]).rotate_left(13);
    state[a] ^= state[d].wrapping_add(state[c]).rotate_left(18);
}

/// One double round: four column quarter rounds, then four row quarter
/// rounds, each listed as `(a, b, c, d)`.
#[cfg(not(feature = "speed"))]
const DOUBLE_ROUND: [[usize; 4]; 8] = [
    [0, 4, 8, 12],
    [5, 9, 13, 1],
    [10, 14, 2, 6],
    [15, 3, 7, 11],
    [0, 1, 2, 3],
    [5, 6, 7, 4],
    [10, 11, 8, 9],
    [15, 12, 13, 14],
];

/// Applies the 20-round Salsa20 permutation in place.
#[cfg(not(feature = "speed"))]
fn rounds(state: &mut [u32; 16]) {
    for _ in 0..10 {
        for [a, b, c, d] in DOUBLE_ROUND {
            quarter_round(state, a, b, c, d);
        }
    }
}

/// Applies the 20-round Salsa20 permutation in place.
#[cfg(feature = "speed")]
fn rounds(state: &mut [u32; 16]) {
    for _ in 0..10 {
        // Column round
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 5, 9, 13, 1);
        quarter_round(state, 10, 14, 2, 6);
        quarter_round(state, 15, 3, 7, 11);

        // Row round
        quarter_round(state, 0, 1, 2, 3);
        quarter_round(state, 5, 6, 7, 4);
        quarter_round(state, 10, 11, 8, 9);
        quarter_round(state, 15, 12, 13, 14);
    }
}

#[inline(always)]
fn load32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn initial_state(input: &[u8; 16], key: &[u8; 32], constant: &[u8; 16]) -> [u32; 16] {
    let mut state = [0u32; 16];

    for i in 0..4 {
        state[5 * i] = load32(&constant[4 * i..]);
        state[1 + i] = load32(&key[4 * i..]);
        state[6 + i] = load32(&input[4 * i..]);
        state[11 + i] = load32(&key[16 + 4 * i..]);
    }

    state
}

/// Salsa20 core: one 64-byte keystream block (`crypto_core_salsa20`).
///
/// # Parameters
/// - `input`: nonce and block counter (16 bytes)
/// - `key`: 256-bit key
/// - `constant`: domain constant, [`SIGMA`](crate::constants::SIGMA) for
///   every use in this crate
pub fn salsa20(input: &[u8; 16], key: &[u8; 32], constant: &[u8; 16]) -> [u8; 64] {
    let mut state = initial_state(input, key, constant);
    let original = state;

    rounds(&mut state);

    state.iter_mut().zip(&original).for_each(|(s, o)| {
        *s = s.wrapping_add(*o);
    });

    let mut out = [0u8; 64];
    out.chunks_exact_mut(4)
        .zip(&state)
        .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

    out
}

/// HSalsa20: derives a 32-byte subkey (`crypto_core_hsalsa20`).
///
/// Returns the diagonal words 0, 5, 10, 15 followed by the input words
/// 6, 7, 8, 9 of the permuted state. This equals the feed-forward output
/// with the constant and input contributions subtracted back out.
pub fn hsalsa20(input: &[u8; 16], key: &[u8; 32], constant: &[u8; 16]) -> [u8; 32] {
    let mut state = initial_state(input, key, constant);

    rounds(&mut state);

    let mut out = [0u8; 32];
    out.chunks_exact_mut(4)
        .zip([0, 5, 10, 15, 6, 7, 8, 9])
        .for_each(|(chunk, index)| chunk.copy_from_slice(&state[index].to_le_bytes()));

    out
}
