//! Input validation through the public builder
//!
//! Key problems are reported before IV problems, and IV problems before any
//! data is processed.

use cipherkit_symmetric::{Crypto, Error, Mode, Multiple, Padding};
use cipherkit_tests::combos::{self, Kind, MAX_IV_LEN};

#[test]
fn test_empty_key_rejected_before_iv() {
    for combo in combos::all() {
        let mut crypto = Crypto::from_string("data").multiple(combo.multiple);
        if let Some(mode) = combo.mode {
            crypto = crypto.mode(mode);
        }
        let out = crypto.encrypt();
        assert!(
            matches!(out.error(), Some(Error::InvalidKeySize { actual: 0, .. })),
            "{}: {:?}",
            combo.label(),
            out.error()
        );
    }
}

#[test]
fn test_missing_iv() {
    for combo in combos::all().into_iter().filter(|c| c.iv_len > 0) {
        let mut crypto = Crypto::from_string("data")
            .with_key(&[7u8; 32][..combo.key_len])
            .multiple(combo.multiple);
        if let Some(mode) = combo.mode {
            crypto = crypto.mode(mode);
        }
        let out = crypto.encrypt();
        assert!(
            matches!(out.error(), Some(Error::InvalidIvSize { actual: 0, .. })),
            "{}: {:?}",
            combo.label(),
            out.error()
        );
    }
}

#[test]
fn test_iv_one_byte_short() {
    for combo in combos::all().into_iter().filter(|c| c.iv_len > 1) {
        let out = combo
            .crypto(b"data", &[7u8; 32], &[1u8; MAX_IV_LEN])
            .with_iv(vec![1u8; combo.iv_len - 1])
            .encrypt();
        let accepted = matches!(
            combo.mode,
            Some(Mode::EAX | Mode::OCB | Mode::OCB3 | Mode::GOST_CFB)
        );
        if accepted {
            assert!(out.is_ok(), "{}: {:?}", combo.label(), out.error());
        } else {
            assert!(
                matches!(out.error(), Some(Error::InvalidIvSize { .. })),
                "{}: {:?}",
                combo.label(),
                out.error()
            );
        }
    }
}

#[test]
fn test_unaligned_input_without_padding() {
    for combo in combos::of_kind(Kind::Block) {
        let out = combo
            .crypto(&[0u8; 13], &[7u8; 32], &[1u8; MAX_IV_LEN])
            .padding(Padding::NONE)
            .encrypt();
        assert!(
            matches!(out.error(), Some(Error::InvalidDataLength { actual: 13, .. })),
            "{}: {:?}",
            combo.label(),
            out.error()
        );
    }
}

#[test]
fn test_unaligned_ciphertext_for_block_modes() {
    for combo in combos::of_kind(Kind::Block) {
        let out = combo
            .crypto(&[0u8; 17], &[7u8; 32], &[1u8; MAX_IV_LEN])
            .decrypt();
        assert!(
            matches!(out.error(), Some(Error::InvalidDataLength { actual: 17, .. })),
            "{}: {:?}",
            combo.label(),
            out.error()
        );
    }
}

#[test]
fn test_mode_limits() {
    let key = [7u8; 32];
    let cases = [
        (Multiple::AES, 16, Mode::GOFB, 16),
        (Multiple::MAGMA, 32, Mode::OCB, 7),
        (Multiple::DES, 8, Mode::CFB128, 8),
    ];
    for (multiple, key_len, mode, iv_len) in cases {
        let out = Crypto::from_string("data")
            .with_key(&key[..key_len])
            .with_iv(vec![0u8; iv_len])
            .multiple(multiple)
            .mode(mode)
            .encrypt();
        assert!(
            matches!(out.error(), Some(Error::InvalidParameter { .. })),
            "{:?}/{:?}: {:?}",
            multiple,
            mode,
            out.error()
        );
    }
}

#[test]
fn test_mgm_nonce_top_bit() {
    let out = Crypto::from_string("data")
        .with_key([7u8; 32])
        .with_iv([0x80u8; 16])
        .kuznyechik()
        .mgm()
        .encrypt();
    assert!(matches!(
        out.error(),
        Some(Error::InvalidParameter { context: "MGM", .. })
    ));
}
