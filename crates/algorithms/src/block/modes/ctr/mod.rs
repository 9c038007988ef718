//! Counter (CTR) mode
//!
//! Counter mode turns a block cipher into a stream cipher by encrypting
//! successive values of a counter and XORing the result with the plaintext.
//! The whole IV block is the initial counter and is incremented as one
//! big-endian integer, wrapping modulo 2^n. This matches both NIST SP 800-38A
//! and the GOST R 34.13-2015 counter mode when the upper half of the IV
//! carries the nonce.

use cipherkit_api::{validate, BlockCipher, Result, StreamMode};
use cipherkit_internal::{increment_be, xor_in_place};
use zeroize::Zeroizing;

/// Counter mode implementation
pub struct Ctr<C: BlockCipher> {
    cipher: C,
    counter: Vec<u8>,
}

impl<C: BlockCipher> Ctr<C> {
    /// Creates a CTR instance whose first counter block is `iv`
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self> {
        validate::iv_size("CTR", iv.len(), cipher.block_size())?;
        Ok(Self {
            cipher,
            counter: iv.to_vec(),
        })
    }
}

/// XOR `data` with the keystream E(counter), E(counter + 1), ...
pub(crate) fn apply_keystream<C: BlockCipher + ?Sized>(
    cipher: &C,
    initial_counter: &[u8],
    data: &[u8],
) -> Result<Vec<u8>> {
    let mut out = data.to_vec();
    let mut counter = Zeroizing::new(initial_counter.to_vec());
    let mut keystream = Zeroizing::new(vec![0u8; initial_counter.len()]);

    for chunk in out.chunks_mut(initial_counter.len()) {
        keystream.copy_from_slice(&counter);
        cipher.encrypt_block(&mut keystream)?;
        xor_in_place(chunk, &keystream);
        increment_be(&mut counter);
    }
    Ok(out)
}

impl<C: BlockCipher> StreamMode for Ctr<C> {
    fn name(&self) -> &'static str {
        "CTR"
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        apply_keystream(&self.cipher, &self.counter, plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        apply_keystream(&self.cipher, &self.counter, ciphertext)
    }
}
