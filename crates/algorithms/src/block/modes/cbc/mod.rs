//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode is a block cipher mode of operation that provides confidentiality
//! by XORing each plaintext block with the previous ciphertext block before
//! encryption. The first block is XORed with an initialization vector (IV).
//!
//! This implementation follows NIST SP 800-38A. Input must already be a whole
//! number of blocks; padding is applied by the caller.

use cipherkit_api::{validate, BlockCipher, BlockMode, Result};
use cipherkit_internal::xor_in_place;
use zeroize::Zeroizing;

/// CBC mode implementation
pub struct Cbc<C: BlockCipher> {
    cipher: C,
    iv: Vec<u8>,
}

impl<C: BlockCipher> Cbc<C> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be exactly one block long.
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self> {
        validate::iv_size("CBC", iv.len(), cipher.block_size())?;
        Ok(Self {
            cipher,
            iv: iv.to_vec(),
        })
    }
}

impl<C: BlockCipher> BlockMode for Cbc<C> {
    fn name(&self) -> &'static str {
        "CBC"
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate::block_aligned("CBC plaintext", plaintext.len(), block_size)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut chain = Zeroizing::new(self.iv.clone());

        for chunk in plaintext.chunks(block_size) {
            // chain becomes the new ciphertext block in place
            xor_in_place(&mut chain, chunk);
            self.cipher.encrypt_block(&mut chain)?;
            ciphertext.extend_from_slice(&chain);
        }

        Ok(ciphertext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate::block_aligned("CBC ciphertext", ciphertext.len(), block_size)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut prev: &[u8] = &self.iv;
        let mut block = Zeroizing::new(vec![0u8; block_size]);

        for chunk in ciphertext.chunks(block_size) {
            block.copy_from_slice(chunk);
            self.cipher.decrypt_block(&mut block)?;
            xor_in_place(&mut block, prev);
            plaintext.extend_from_slice(&block);
            prev = chunk;
        }

        Ok(plaintext)
    }
}

#[cfg(test)]
mod tests;
