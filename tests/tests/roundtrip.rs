//! Encrypt/decrypt round trips over every valid combination

use cipherkit_tests::combos::{self, Combo, Kind, MAX_IV_LEN};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn roundtrip(combo: &Combo, data: &[u8], key: &[u8; 32], iv: &[u8; MAX_IV_LEN]) -> Vec<u8> {
    let sealed = combo.crypto(data, key, iv).encrypt();
    assert!(sealed.is_ok(), "{} encrypt: {:?}", combo.label(), sealed.error());

    let opened = combo.crypto(sealed.as_bytes(), key, iv).decrypt();
    assert!(opened.is_ok(), "{} decrypt: {:?}", combo.label(), opened.error());
    assert_eq!(opened.as_bytes(), data, "{}", combo.label());
    sealed.to_bytes()
}

#[test]
fn test_every_combination_roundtrips() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let key: [u8; 32] = rng.gen();
    let iv: [u8; MAX_IV_LEN] = rng.gen();
    let combos = combos::all();
    assert!(combos.len() > 100);

    for combo in &combos {
        for len in [0usize, 1, 7, 8, 15, 16, 17, 33, 64] {
            let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
            let sealed = roundtrip(combo, &data, &key, &iv);

            match combo.kind {
                Kind::Block => {
                    assert_eq!(sealed.len() % combo.block_size, 0, "{}", combo.label());
                    assert!(sealed.len() > data.len(), "{}", combo.label());
                }
                Kind::Stream | Kind::StreamCipher => {
                    assert_eq!(sealed.len(), data.len(), "{}", combo.label())
                }
                Kind::Aead => {
                    assert_eq!(sealed.len(), data.len() + combo.block_size, "{}", combo.label())
                }
            }
            if len >= 16 {
                assert_ne!(&sealed[..len], &data[..], "{}", combo.label());
            }
        }
    }
}

#[test]
fn test_encryption_is_deterministic() {
    let key = [0x42u8; 32];
    let iv = [0x24u8; MAX_IV_LEN];
    for combo in combos::all() {
        let first = combo.crypto(b"same input twice", &key, &iv).encrypt();
        let second = combo.crypto(b"same input twice", &key, &iv).encrypt();
        assert_eq!(first.as_bytes(), second.as_bytes(), "{}", combo.label());
    }
}

#[test]
fn test_key_changes_output() {
    let iv = [0x24u8; MAX_IV_LEN];
    for combo in combos::all() {
        let a = combo.crypto(b"sixteen byte msg", &[1u8; 32], &iv).encrypt();
        let b = combo.crypto(b"sixteen byte msg", &[2u8; 32], &iv).encrypt();
        assert_ne!(a.as_bytes(), b.as_bytes(), "{}", combo.label());
    }
}

fn combo_strategy() -> impl Strategy<Value = Combo> {
    let combos = combos::all();
    (0..combos.len()).prop_map(move |i| combos[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn any_combination_roundtrips(
        combo in combo_strategy(),
        key in any::<[u8; 32]>(),
        iv in any::<[u8; MAX_IV_LEN]>(),
        data in prop::collection::vec(any::<u8>(), 0..300)
    ) {
        let sealed = combo.crypto(&data, &key, &iv).encrypt();
        prop_assert!(sealed.is_ok(), "{}: {:?}", combo.label(), sealed.error());

        let opened = combo.crypto(sealed.as_bytes(), &key, &iv).decrypt();
        prop_assert!(opened.is_ok(), "{}: {:?}", combo.label(), opened.error());
        prop_assert_eq!(opened.as_bytes(), &data[..]);
    }

    #[test]
    fn stream_modes_preserve_length(
        combo in combo_strategy().prop_filter("keystream modes", |c| c.kind == Kind::Stream),
        data in prop::collection::vec(any::<u8>(), 0..100)
    ) {
        let sealed = combo.crypto(&data, &[9u8; 32], &[3u8; MAX_IV_LEN]).encrypt();
        prop_assert_eq!(sealed.as_bytes().len(), data.len());
    }
}
