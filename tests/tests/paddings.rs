//! Padding behaviour through the pipeline

use cipherkit_algorithms::Pkcs1BlockType;
use cipherkit_symmetric::{Crypto, Error, Padding};
use proptest::prelude::*;

const KEY: &str = "0123456789abcdef";

fn cbc(data: &[u8], padding: Padding) -> Crypto {
    Crypto::from_bytes(data)
        .with_key_string(KEY)
        .with_iv_string(KEY)
        .aes()
        .cbc()
        .padding(padding)
}

fn ecb_open(sealed: &[u8], padding: Padding) -> Crypto {
    Crypto::from_bytes(sealed).with_key_string(KEY).aes().ecb().padding(padding)
}

const REVERSIBLE: &[Padding] = &[
    Padding::PKCS1,
    Padding::PKCS5,
    Padding::PKCS7,
    Padding::X923,
    Padding::ISO10126,
    Padding::ISO7816_4,
];

#[test]
fn test_padding_layout() {
    // Decrypting without padding exposes what each scheme appended.
    let data = b"0123456789";
    let raw = |padding| {
        let sealed = Crypto::from_bytes(data)
            .with_key_string(KEY)
            .aes()
            .ecb()
            .padding(padding)
            .encrypt();
        ecb_open(sealed.as_bytes(), Padding::NONE).decrypt().to_bytes()
    };

    assert_eq!(&raw(Padding::PKCS7)[10..], &[6u8; 6]);
    assert_eq!(&raw(Padding::X923)[10..], &[0, 0, 0, 0, 0, 6]);
    assert_eq!(&raw(Padding::ISO7816_4)[10..], &[0x80, 0, 0, 0, 0, 0]);
    assert_eq!(&raw(Padding::ZERO)[10..], &[0u8; 6]);
    assert_eq!(raw(Padding::ISO10126)[15], 6);

    let pkcs1 = raw(Padding::PKCS1);
    assert_eq!(&pkcs1[..2], &[0x00, 0x02]);
    assert!(pkcs1[2..5].iter().all(|&b| b != 0));
    assert_eq!(pkcs1[5], 0x00);
    assert_eq!(&pkcs1[6..], data);
}

#[test]
fn test_pkcs1_block_types() {
    for (block_type, filler) in [(Pkcs1BlockType::Zero, 0x00u8), (Pkcs1BlockType::Ones, 0xFF)] {
        let sealed = Crypto::from_string("PKCS1 data")
            .with_key_string(KEY)
            .with_pkcs1_block_type(block_type)
            .aes()
            .ecb()
            .pkcs1_padding()
            .encrypt();
        assert!(sealed.is_ok(), "{:?}", sealed.error());

        let raw = ecb_open(sealed.as_bytes(), Padding::NONE).decrypt().to_bytes();
        assert_eq!(raw.len(), 16);
        assert_eq!(&raw[..3], &[0x00, block_type.as_byte(), filler]);

        let opened = ecb_open(sealed.as_bytes(), Padding::PKCS1)
            .with_pkcs1_block_type(block_type)
            .decrypt();
        assert_eq!(opened.to_string(), "PKCS1 data");
    }

    let mismatched = Crypto::from_string("PKCS1 data")
        .with_key_string(KEY)
        .with_pkcs1_block_type(Pkcs1BlockType::Ones)
        .aes()
        .ecb()
        .pkcs1_padding()
        .encrypt();
    let out = ecb_open(mismatched.as_bytes(), Padding::PKCS1).decrypt();
    assert_eq!(out.error(), Some(&Error::InvalidPadding { scheme: "PKCS1" }));
}

#[test]
fn test_zero_padding_strips_trailing_zeros() {
    let sealed = cbc(b"ends with zero\0", Padding::ZERO).encrypt();
    let opened = cbc(sealed.as_bytes(), Padding::ZERO).decrypt();
    assert_eq!(opened.as_bytes(), b"ends with zero");
}

#[test]
fn test_stream_mode_with_padding() {
    let unpadded = Crypto::from_string("stream")
        .with_key_string(KEY)
        .with_iv_string(KEY)
        .aes()
        .ctr()
        .no_padding()
        .encrypt();
    assert_eq!(unpadded.as_bytes().len(), 6);

    let padded = Crypto::from_string("stream")
        .with_key_string(KEY)
        .with_iv_string(KEY)
        .aes()
        .ctr()
        .pkcs7_padding()
        .encrypt();
    assert_eq!(padded.as_bytes().len(), 16);
    assert_eq!(&padded.as_bytes()[..6], unpadded.as_bytes());
}

#[test]
fn test_aead_ignores_padding() {
    let sealed = Crypto::from_string("aead")
        .with_key_string(KEY)
        .with_iv_string("nonce")
        .aes()
        .eax()
        .iso7816_4_padding()
        .encrypt();
    assert_eq!(sealed.as_bytes().len(), 4 + 16);
}

proptest! {
    #[test]
    fn reversible_paddings_roundtrip(
        index in 0..REVERSIBLE.len(),
        data in prop::collection::vec(any::<u8>(), 0..100)
    ) {
        let padding = REVERSIBLE[index];
        let sealed = cbc(&data, padding).encrypt();
        prop_assert!(sealed.is_ok(), "{:?}", sealed.error());
        prop_assert_eq!(sealed.as_bytes().len() % 16, 0);
        prop_assert!(sealed.as_bytes().len() > data.len());

        let opened = cbc(sealed.as_bytes(), padding).decrypt();
        prop_assert_eq!(opened.as_bytes(), &data[..]);
    }

    #[test]
    fn zero_padding_roundtrips_without_trailing_zero(
        prefix in prop::collection::vec(any::<u8>(), 0..100),
        last in 1u8..=255
    ) {
        let mut data = prefix;
        data.push(last);
        let sealed = cbc(&data, Padding::ZERO).encrypt();
        prop_assert_eq!(sealed.as_bytes().len(), data.len().div_ceil(16) * 16);
        let opened = cbc(sealed.as_bytes(), Padding::ZERO).decrypt();
        prop_assert_eq!(opened.as_bytes(), &data[..]);
    }

    #[test]
    fn no_padding_requires_alignment(blocks in 0usize..6, extra in 0usize..16) {
        let data = vec![0x5Au8; blocks * 16 + extra];
        let sealed = cbc(&data, Padding::NONE).encrypt();
        if extra == 0 {
            prop_assert_eq!(sealed.as_bytes().len(), data.len());
        } else {
            let rejected = matches!(
                sealed.error(),
                Some(Error::InvalidDataLength { .. })
            );
            prop_assert!(rejected);
        }
    }
}
