use super::*;
use crate::block::{Aes, Magma};
use cipherkit_api::{Error, KeyInit};

const KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const IV: &str = "000102030405060708090a0b0c0d0e0f";
const PLAINTEXT: &str = "6bc1bee22e409f96e93d7e117393172aae2d8a571e03ac9c9eb76fac45af8e51";

fn aes_cbc() -> Cbc<Aes> {
    let cipher = Aes::new(&hex::decode(KEY).unwrap()).unwrap();
    Cbc::new(cipher, &hex::decode(IV).unwrap()).unwrap()
}

#[test]
fn test_cbc_aes128_sp800_38a() {
    let plaintext = hex::decode(PLAINTEXT).unwrap();
    let expected =
        hex::decode("7649abac8119b246cee98e9b12e9197d5086cb9b507219ee95db113a917678b2").unwrap();

    let mode = aes_cbc();
    let ciphertext = mode.encrypt(&plaintext).unwrap();
    assert_eq!(ciphertext, expected);
    assert_eq!(mode.decrypt(&ciphertext).unwrap(), plaintext);
}

#[test]
fn test_cbc_restarts_from_iv_each_call() {
    let plaintext = hex::decode(PLAINTEXT).unwrap();
    let mode = aes_cbc();
    let first = mode.encrypt(&plaintext).unwrap();
    let second = mode.encrypt(&plaintext).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_cbc_identical_blocks_differ() {
    let mode = aes_cbc();
    let ciphertext = mode.encrypt(&[0x42u8; 32]).unwrap();
    assert_ne!(ciphertext[..16], ciphertext[16..]);
}

#[test]
fn test_cbc_magma_roundtrip() {
    let key = hex::decode("ffeeddccbbaa99887766554433221100f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff")
        .unwrap();
    let mode = Cbc::new(Magma::new(&key).unwrap(), &[0x11u8; 8]).unwrap();
    let plaintext = b"sixteen byte msg".to_vec();
    let ciphertext = mode.encrypt(&plaintext).unwrap();
    assert_eq!(ciphertext.len(), 16);
    assert_eq!(mode.decrypt(&ciphertext).unwrap(), plaintext);
}

#[test]
fn test_cbc_validation() {
    let cipher = Aes::new(&hex::decode(KEY).unwrap()).unwrap();
    assert!(matches!(
        Cbc::new(cipher, &[0u8; 8]),
        Err(Error::InvalidIvSize { context: "CBC", actual: 8 })
    ));

    let mode = aes_cbc();
    assert!(matches!(
        mode.encrypt(&[0u8; 20]),
        Err(Error::InvalidDataLength { actual: 20, .. })
    ));
    assert!(mode.decrypt(&[0u8; 31]).is_err());
}
