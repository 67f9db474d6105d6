use saltbox::rng::{Csprng, EntropySource, OsEntropy};

#[test]
fn test_csprng_deterministic_from_seed() {
    let mut rng1 = Csprng::from_seed([0x42u8; 32]);
    let mut rng2 = Csprng::from_seed([0x42u8; 32]);

    let mut a = [0u8; 128];
    let mut b = [0u8; 128];

    rng1.fill_bytes(&mut a);
    rng2.fill_bytes(&mut b);

    assert_eq!(a, b);
}

#[test]
fn test_csprng_rekey_changes_output() {
    let mut rng = Csprng::from_seed([0xAAu8; 32]);

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];

    rng.fill_bytes(&mut a);
    rng.fill_bytes(&mut b);

    assert_ne!(a, b);
}

#[test]
fn test_csprng_split_requests_differ_from_single() {
    let mut whole = Csprng::from_seed([1u8; 32]);
    let mut split = Csprng::from_seed([1u8; 32]);

    let mut a = [0u8; 128];
    whole.fill_bytes(&mut a);

    let mut b = [0u8; 128];
    split.fill_bytes(&mut b[..64]);
    split.fill_bytes(&mut b[64..]);

    // Same first block, then the rekey takes over.
    assert_eq!(a[..64], b[..64]);
    assert_ne!(a[64..], b[64..]);
}

#[test]
fn test_csprng_not_all_zero() {
    let mut rng = Csprng::from_seed([0u8; 32]);

    let mut out = [0u8; 64];
    rng.fill_bytes(&mut out);

    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn test_csprng_as_entropy_source() {
    let mut rng = Csprng::from_seed([5u8; 32]);
    let mut reference = Csprng::from_seed([5u8; 32]);

    let mut a = [0u8; 40];
    let mut b = [0u8; 40];
    rng.fill(&mut a).unwrap();
    reference.fill_bytes(&mut b);

    assert_eq!(a, b);
}

#[test]
fn test_csprng_from_entropy() {
    let mut seed_source = Csprng::from_seed([3u8; 32]);
    let mut rng = Csprng::from_entropy(&mut seed_source).unwrap();

    let mut out = [0u8; 32];
    rng.fill_bytes(&mut out);
    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn test_os_entropy_open_fill_close() {
    let mut os = OsEntropy::open().unwrap();

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];
    os.fill(&mut a).unwrap();
    os.fill(&mut b).unwrap();

    assert_ne!(a, b);
    os.close();
}

#[test]
fn test_csprng_from_os() {
    let mut a = Csprng::from_os().unwrap();
    let mut b = Csprng::from_os().unwrap();

    let mut x = [0u8; 32];
    let mut y = [0u8; 32];
    a.fill_bytes(&mut x);
    b.fill_bytes(&mut y);

    assert_ne!(x, y);
}

#[test]
fn test_os_entropy_released_on_drop() {
    for _ in 0..4 {
        let mut os = OsEntropy::open().unwrap();
        let mut buf = [0u8; 16];
        os.fill(&mut buf).unwrap();
    }

    let os = OsEntropy::open().unwrap();
    os.close();
}
