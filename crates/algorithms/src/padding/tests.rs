use super::*;
use cipherkit_api::{Error, PaddingScheme};

fn schemes() -> Vec<Box<dyn PaddingScheme>> {
    vec![
        Box::new(Pkcs7),
        Box::new(Pkcs5),
        Box::new(AnsiX923),
        Box::new(Iso10126),
        Box::new(Iso7816),
        Box::new(Pkcs1::default()),
        Box::new(Pkcs1::new(Pkcs1BlockType::Ones)),
    ]
}

#[test]
fn test_roundtrip_all_lengths() {
    for scheme in schemes() {
        for block_size in [8usize, 16] {
            for len in 0..40 {
                let data: Vec<u8> = (0..len).map(|i| (i as u8).wrapping_mul(7) | 1).collect();
                let padded = scheme.pad(&data, block_size).unwrap();
                assert_eq!(padded.len() % block_size, 0, "{} len {}", scheme.name(), len);
                assert!(padded.len() > data.len(), "{} len {}", scheme.name(), len);
                assert_eq!(
                    scheme.unpad(&padded, block_size).unwrap(),
                    data,
                    "{} len {}",
                    scheme.name(),
                    len
                );
            }
        }
    }
}

#[test]
fn test_pkcs7_layout() {
    let padded = Pkcs7.pad(b"Hello World", 16).unwrap();
    assert_eq!(padded.len(), 16);
    assert_eq!(&padded[11..], &[5u8; 5]);

    let full = Pkcs7.pad(&[0xAA; 16], 16).unwrap();
    assert_eq!(full.len(), 32);
    assert_eq!(&full[16..], &[16u8; 16]);

    assert_eq!(Pkcs7.pad(&[], 8).unwrap(), vec![8u8; 8]);
}

#[test]
fn test_pkcs7_rejects_corruption() {
    let mut padded = Pkcs7.pad(b"twelve bytes", 16).unwrap();
    assert_eq!(padded[15], 4);

    // a filler byte that disagrees with the count
    padded[13] = 3;
    assert_eq!(
        Pkcs7.unpad(&padded, 16),
        Err(Error::InvalidPadding { scheme: "PKCS7" })
    );

    let mut zero_count = Pkcs7.pad(b"x", 8).unwrap();
    zero_count[7] = 0;
    assert!(Pkcs7.unpad(&zero_count, 8).is_err());

    let mut oversized = Pkcs7.pad(b"x", 8).unwrap();
    oversized[7] = 9;
    assert!(Pkcs7.unpad(&oversized, 8).is_err());

    assert!(Pkcs7.unpad(&[], 8).is_err());
    assert!(Pkcs7.unpad(&[1u8; 7], 8).is_err());
}

#[test]
fn test_block_size_limits() {
    assert!(matches!(
        Pkcs7.pad(b"data", 0),
        Err(Error::InvalidParameter { .. })
    ));
    assert!(Pkcs7.pad(b"data", 256).is_err());
    assert!(Pkcs7.pad(b"data", 255).is_ok());
}

#[test]
fn test_x923_layout_and_validation() {
    let padded = AnsiX923.pad(b"abc", 8).unwrap();
    assert_eq!(padded, [b'a', b'b', b'c', 0, 0, 0, 0, 5]);

    let mut bad = padded.clone();
    bad[4] = 1;
    assert_eq!(
        AnsiX923.unpad(&bad, 8),
        Err(Error::InvalidPadding { scheme: "ANSI X9.23" })
    );
}

#[test]
fn test_iso10126_only_checks_count() {
    let padded = Iso10126.pad(b"abc", 8).unwrap();
    assert_eq!(padded[7], 5);
    let mut altered = padded.clone();
    altered[4] ^= 0xFF;
    assert_eq!(Iso10126.unpad(&altered, 8).unwrap(), b"abc");
}

#[test]
fn test_iso7816_layout_and_validation() {
    assert_eq!(
        Iso7816.pad(b"abc", 8).unwrap(),
        [b'a', b'b', b'c', 0x80, 0, 0, 0, 0]
    );
    let full = Iso7816.pad(&[1u8; 8], 8).unwrap();
    assert_eq!(&full[8..], &[0x80, 0, 0, 0, 0, 0, 0, 0]);

    assert!(Iso7816.unpad(&[0u8; 8], 8).is_err());
    assert!(Iso7816.unpad(&[1, 2, 3, 0x81, 0, 0, 0, 0], 8).is_err());
}

#[test]
fn test_zero_padding() {
    assert_eq!(ZeroPadding.pad(b"abc", 4).unwrap(), b"abc\0");
    assert_eq!(ZeroPadding.pad(b"abcd", 4).unwrap(), b"abcd");
    assert!(ZeroPadding.pad(b"", 4).unwrap().is_empty());
    assert_eq!(ZeroPadding.unpad(b"abc\0\0\0\0\0", 8).unwrap(), b"abc");
    // trailing zeros in the message are lost
    assert_eq!(ZeroPadding.unpad(b"ab\0\0", 4).unwrap(), b"ab");
}

#[test]
fn test_no_padding() {
    assert_eq!(NoPadding.pad(&[1u8; 16], 16).unwrap(), vec![1u8; 16]);
    assert!(matches!(
        NoPadding.pad(&[1u8; 15], 16),
        Err(Error::InvalidDataLength { actual: 15, .. })
    ));
    assert_eq!(NoPadding.unpad(&[1, 2, 3], 16).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_pkcs1_layout() {
    let ones = Pkcs1::new(Pkcs1BlockType::Ones).pad(b"hi", 8).unwrap();
    assert_eq!(ones, [0x00, 0x01, 0xFF, 0xFF, 0xFF, 0x00, b'h', b'i']);

    let zero = Pkcs1::new(Pkcs1BlockType::Zero).pad(b"hi", 8).unwrap();
    assert_eq!(zero, [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, b'h', b'i']);
    assert_eq!(Pkcs1::new(Pkcs1BlockType::Zero).unpad(&zero, 8).unwrap(), b"hi");

    let random = Pkcs1::default().pad(b"hi", 16).unwrap();
    assert_eq!(&random[..2], &[0x00, 0x02]);
    assert!(random[2..13].iter().all(|&b| b != 0));
    assert_eq!(random[13], 0x00);

    // exactly three bytes of overhead still fit in the block
    assert_eq!(Pkcs1::new(Pkcs1BlockType::Ones).pad(&[7u8; 5], 8).unwrap().len(), 8);
}

#[test]
fn test_pkcs1_block_type_rules() {
    assert!(Pkcs1::new(Pkcs1BlockType::Zero).pad(&[0, 1, 2], 8).is_err());
    assert_eq!(Pkcs1BlockType::try_from(1).unwrap(), Pkcs1BlockType::Ones);
    assert!(Pkcs1BlockType::try_from(3).is_err());
    assert_eq!(u8::from(Pkcs1BlockType::Random), 2);

    let padded = Pkcs1::new(Pkcs1BlockType::Ones).pad(b"data", 8).unwrap();
    assert_eq!(
        Pkcs1::default().unpad(&padded, 8),
        Err(Error::InvalidPadding { scheme: "PKCS1" })
    );

    let mut broken = padded.clone();
    broken[3] = 0x17;
    assert!(Pkcs1::new(Pkcs1BlockType::Ones).unpad(&broken, 8).is_err());
}
