//! Padding strategy trait

use crate::error::Result;

/// Extends plaintext to a block multiple and strips it again after decryption
pub trait PaddingScheme: Send + Sync {
    /// Display name of the scheme
    fn name(&self) -> &'static str;

    /// Pad `data` for a cipher with `block_size`-byte blocks
    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>>;

    /// Remove padding, rejecting malformed patterns with `InvalidPadding`
    fn unpad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>>;
}
