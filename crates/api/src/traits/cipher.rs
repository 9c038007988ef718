//! Primitive cipher traits
//!
//! [`BlockCipher`] is object-safe so modes can drive either a concrete
//! cipher (`Cbc<Aes>`) or one chosen at runtime (`Cbc<Box<dyn BlockCipher>>`).

use crate::error::Result;

/// Type-level constants describing a block cipher
pub trait CipherAlgorithm {
    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Accepted key lengths in bytes
    const KEY_SIZES: &'static [usize];

    /// Display name
    fn name() -> &'static str;
}

/// Construction of a keyed primitive from raw key bytes
pub trait KeyInit: Sized {
    /// Expand `key` into a ready-to-use instance
    ///
    /// Fails with `InvalidKeySize` before any other work when the key length
    /// is not accepted.
    fn new(key: &[u8]) -> Result<Self>;
}

/// A keyed block cipher operating in place on exactly one block
pub trait BlockCipher: Send + Sync {
    /// Display name of the cipher
    fn name(&self) -> &'static str;

    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// Encrypt a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}

impl<C: BlockCipher + ?Sized> BlockCipher for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        (**self).encrypt_block(block)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        (**self).decrypt_block(block)
    }
}

/// A keyed stream cipher producing a keystream XORed over the data
pub trait StreamCipher: Send {
    /// Display name of the cipher
    fn name(&self) -> &'static str;

    /// XOR the next keystream bytes into `data`
    ///
    /// Encryption and decryption are the same operation.
    fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()>;
}

impl<S: StreamCipher + ?Sized> StreamCipher for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        (**self).apply_keystream(data)
    }
}
