//! Tag verification for the authenticated modes

use cipherkit_symmetric::Error;
use cipherkit_tests::combos::{self, Combo, Kind, MAX_IV_LEN};
use proptest::prelude::*;

const KEY: [u8; 32] = [0x3Cu8; 32];
const IV: [u8; MAX_IV_LEN] = [0x1Fu8; MAX_IV_LEN];

fn aead_strategy() -> impl Strategy<Value = Combo> {
    let combos = combos::of_kind(Kind::Aead);
    (0..combos.len()).prop_map(move |i| combos[i])
}

fn seal(combo: &Combo, data: &[u8], aad: &[u8]) -> Vec<u8> {
    let sealed = combo.crypto(data, &KEY, &IV).with_additional(aad).encrypt();
    assert!(sealed.is_ok(), "{}: {:?}", combo.label(), sealed.error());
    sealed.to_bytes()
}

#[test]
fn test_truncated_tag_is_rejected() {
    for combo in combos::of_kind(Kind::Aead) {
        let sealed = seal(&combo, b"short message", b"");
        let out = combo.crypto(&sealed[..sealed.len() - 1], &KEY, &IV).decrypt();
        assert!(
            out.error().is_some_and(Error::is_authentication_failure),
            "{}: {:?}",
            combo.label(),
            out.error()
        );
        assert!(out.as_bytes().is_empty());
    }
}

#[test]
fn test_input_shorter_than_tag() {
    for combo in combos::of_kind(Kind::Aead) {
        let out = combo.crypto(&[0u8; 3], &KEY, &IV).decrypt();
        assert!(out.error().is_some(), "{}", combo.label());
        assert!(out.as_bytes().is_empty());
    }
}

#[test]
fn test_smaller_tag_size() {
    for combo in combos::of_kind(Kind::Aead) {
        let sealed = combo
            .crypto(b"tagged", &KEY, &IV)
            .with_tag_size(4)
            .encrypt();
        assert_eq!(sealed.as_bytes().len(), 6 + 4, "{}", combo.label());

        let opened = combo
            .crypto(sealed.as_bytes(), &KEY, &IV)
            .with_tag_size(4)
            .decrypt();
        assert_eq!(opened.as_bytes(), b"tagged", "{}", combo.label());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn flipped_bit_fails_authentication(
        combo in aead_strategy(),
        data in prop::collection::vec(any::<u8>(), 0..64),
        aad in prop::collection::vec(any::<u8>(), 0..32),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let mut sealed = seal(&combo, &data, &aad);
        let i = position.index(sealed.len());
        sealed[i] ^= 1 << bit;

        let out = combo.crypto(&sealed, &KEY, &IV).with_additional(&aad).decrypt();
        prop_assert!(
            out.error().is_some_and(Error::is_authentication_failure),
            "{}: {:?}", combo.label(), out.error()
        );
        prop_assert!(out.as_bytes().is_empty());
    }

    #[test]
    fn changed_associated_data_fails(
        combo in aead_strategy(),
        data in prop::collection::vec(any::<u8>(), 0..64),
        aad in prop::collection::vec(any::<u8>(), 1..32)
    ) {
        let sealed = seal(&combo, &data, &aad);
        let mut other = aad.clone();
        other[0] ^= 0x80;

        let out = combo.crypto(&sealed, &KEY, &IV).with_additional(&other).decrypt();
        prop_assert!(out.error().is_some_and(Error::is_authentication_failure));

        let out = combo.crypto(&sealed, &KEY, &IV).with_additional(&aad).decrypt();
        prop_assert_eq!(out.as_bytes(), &data[..]);
    }
}
