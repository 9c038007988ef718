//! Electronic Codebook (ECB) mode
//!
//! Each block is encrypted independently with no IV. Identical plaintext
//! blocks produce identical ciphertext blocks, so ECB only suits single-block
//! payloads or interoperability with systems that demand it.

use cipherkit_api::{validate, BlockCipher, BlockMode, Result};

/// ECB mode over any block cipher
pub struct Ecb<C: BlockCipher> {
    cipher: C,
}

impl<C: BlockCipher> Ecb<C> {
    /// Wrap a keyed cipher
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }

    fn process(&self, context: &'static str, data: &[u8], forward: bool) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        validate::block_aligned(context, data.len(), block_size)?;

        let mut out = data.to_vec();
        for block in out.chunks_mut(block_size) {
            if forward {
                self.cipher.encrypt_block(block)?;
            } else {
                self.cipher.decrypt_block(block)?;
            }
        }
        Ok(out)
    }
}

impl<C: BlockCipher> BlockMode for Ecb<C> {
    fn name(&self) -> &'static str {
        "ECB"
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.process("ECB plaintext", plaintext, true)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.process("ECB ciphertext", ciphertext, false)
    }
}
