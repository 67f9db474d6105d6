mod common;

use common::{hex, padded};
use saltbox::NaclError;
use saltbox::constants::{BOX_ZERO_BYTES, ZERO_BYTES};
use saltbox::encryption::secretbox;

use xsalsa20poly1305::aead::{AeadInPlace, KeyInit};
use xsalsa20poly1305::{Nonce, XSalsa20Poly1305};

fn key() -> [u8; 32] {
    hex("1b27556473e985d462cd51197a9a46c76009549eac6474f206c4ee0844f68389")
}

fn nonce() -> [u8; 24] {
    hex("69696ee955b62b73cd62bda875fc73d68219e0036b7a0b37")
}

fn sealed(message: &[u8]) -> Vec<u8> {
    let plain = padded(message);
    let mut cipher = vec![0u8; plain.len()];
    secretbox::seal(&mut cipher, &plain, &nonce(), &key()).unwrap();
    cipher
}

// -------------------------------------------------------
// COMPATIBILITY
// -------------------------------------------------------

#[test]
fn test_secretbox_matches_reference() {
    let cipher = XSalsa20Poly1305::new_from_slice(&key()).unwrap();

    for len in [0, 1, 16, 17, 64, 131, 1000] {
        let message: Vec<u8> = (0..len).map(|i| (i * 13) as u8).collect();
        let ours = sealed(&message);

        let mut body = message.clone();
        let tag = cipher
            .encrypt_in_place_detached(Nonce::from_slice(&nonce()), b"", &mut body)
            .unwrap();

        assert_eq!(&ours[..BOX_ZERO_BYTES], &[0u8; BOX_ZERO_BYTES]);
        assert_eq!(&ours[BOX_ZERO_BYTES..ZERO_BYTES], tag.as_slice(), "tag, length {len}");
        assert_eq!(&ours[ZERO_BYTES..], &body[..], "body, length {len}");
    }
}

// -------------------------------------------------------
// ROUND TRIP
// -------------------------------------------------------

#[test]
fn test_secretbox_roundtrip() {
    let message = b"the quick brown fox jumps over the lazy dog";
    let cipher = sealed(message);

    let mut plain = vec![0xffu8; cipher.len()];
    secretbox::open(&mut plain, &cipher, &nonce(), &key()).unwrap();

    assert_eq!(&plain[..ZERO_BYTES], &[0u8; ZERO_BYTES]);
    assert_eq!(&plain[ZERO_BYTES..], message);
}

#[test]
fn test_secretbox_in_place_roundtrip() {
    let message = b"sealed and opened in the same buffer";
    let mut buf = padded(message);

    secretbox::seal_in_place(&mut buf, &nonce(), &key()).unwrap();
    assert_eq!(buf, sealed(message));

    secretbox::open_in_place(&mut buf, &nonce(), &key()).unwrap();
    assert_eq!(buf, padded(message));
}

#[test]
fn test_secretbox_empty_message() {
    let cipher = sealed(b"");
    assert_eq!(cipher.len(), ZERO_BYTES);

    let mut plain = [0u8; ZERO_BYTES];
    secretbox::open(&mut plain, &cipher, &nonce(), &key()).unwrap();
    assert_eq!(plain, [0u8; ZERO_BYTES]);
}

#[test]
fn test_secretbox_reserved_region_ignored() {
    let message = b"reserved bytes carry garbage";
    let mut dirty = padded(message);
    dirty[..ZERO_BYTES].fill(0xa5);

    let mut cipher = vec![0u8; dirty.len()];
    secretbox::seal(&mut cipher, &dirty, &nonce(), &key()).unwrap();

    assert_eq!(cipher, sealed(message));
}

// -------------------------------------------------------
// REJECTION
// -------------------------------------------------------

#[test]
fn test_secretbox_rejects_any_flipped_bit() {
    let cipher = sealed(b"flip one bit anywhere after the zero prefix");

    for i in BOX_ZERO_BYTES..cipher.len() {
        let mut bad = cipher.clone();
        bad[i] ^= 0x04;

        let mut plain = vec![0xffu8; bad.len()];
        assert_eq!(
            secretbox::open(&mut plain, &bad, &nonce(), &key()),
            Err(NaclError::AuthenticationFailed),
            "byte {i}"
        );
        assert!(plain.iter().all(|&b| b == 0), "output not wiped at byte {i}");
    }
}

#[test]
fn test_secretbox_open_in_place_failure_leaves_buffer() {
    let mut cipher = sealed(b"left as it was");
    cipher[40] ^= 1;
    let before = cipher.clone();

    assert_eq!(
        secretbox::open_in_place(&mut cipher, &nonce(), &key()),
        Err(NaclError::AuthenticationFailed)
    );
    assert_eq!(cipher, before);
}

#[test]
fn test_secretbox_wrong_key_or_nonce() {
    let cipher = sealed(b"bound to one key and one nonce");
    let mut plain = vec![0u8; cipher.len()];

    let mut other_key = key();
    other_key[0] ^= 1;
    assert_eq!(
        secretbox::open(&mut plain, &cipher, &nonce(), &other_key),
        Err(NaclError::AuthenticationFailed)
    );

    let mut other_nonce = nonce();
    other_nonce[23] ^= 1;
    assert_eq!(
        secretbox::open(&mut plain, &cipher, &other_nonce, &key()),
        Err(NaclError::AuthenticationFailed)
    );
}

#[test]
fn test_secretbox_short_buffers() {
    let mut out = [0x77u8; 31];
    let input = [0u8; 31];
    let expected = Err(NaclError::InvalidLength {
        minimum: ZERO_BYTES,
        actual: 31,
    });

    assert_eq!(secretbox::seal(&mut out, &input, &nonce(), &key()), expected);
    assert_eq!(secretbox::open(&mut out, &input, &nonce(), &key()), expected);
    assert_eq!(secretbox::seal_in_place(&mut out, &nonce(), &key()), expected);
    assert_eq!(secretbox::open_in_place(&mut out, &nonce(), &key()), expected);
    assert_eq!(out, [0x77; 31]);
}

#[test]
fn test_secretbox_length_mismatch() {
    let plain = padded(b"abc");
    let mut out = vec![0u8; plain.len() + 1];

    assert_eq!(
        secretbox::seal(&mut out, &plain, &nonce(), &key()),
        Err(NaclError::LengthMismatch {
            expected: plain.len(),
            actual: plain.len() + 1
        })
    );
}

#[test]
fn test_secretbox_open_length_mismatch() {
    let cipher = sealed(b"abc");
    let mut out = vec![0x99u8; cipher.len() - 1];

    assert_eq!(
        secretbox::open(&mut out, &cipher, &nonce(), &key()),
        Err(NaclError::LengthMismatch {
            expected: cipher.len(),
            actual: cipher.len() - 1
        })
    );
    assert!(out.iter().all(|&b| b == 0x99));
}
