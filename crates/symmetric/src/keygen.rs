//! Random keys and IVs from the operating system RNG

use cipherkit_api::{validate, Error, Result};
use cipherkit_common::SecretVec;
use rand::rngs::OsRng;
use rand::RngCore;

fn fill(context: &'static str, out: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(out)
        .map_err(|err| Error::parameter(context, format!("OS RNG failure: {}", err)))
}

/// A fresh `len`-byte key
pub fn generate_key(len: usize) -> Result<SecretVec> {
    validate::parameter(len > 0, "generate_key", "key length must be positive")?;
    let mut key = SecretVec::new(vec![0u8; len]);
    fill("generate_key", key.as_mut_slice())?;
    Ok(key)
}

/// A fresh `len`-byte IV or nonce
pub fn generate_iv(len: usize) -> Result<Vec<u8>> {
    let mut iv = vec![0u8; len];
    fill("generate_iv", &mut iv)?;
    Ok(iv)
}
