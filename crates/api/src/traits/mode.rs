//! Mode-of-operation capability traits
//!
//! A mode implements exactly the capability it supports; the pipeline
//! dispatches on which one it was handed instead of calling stubs.
//!
//! Every mode instance is built from one IV/nonce and may be used for several
//! calls, each starting from that IV. Reusing a nonce with the same key for
//! two different messages breaks confidentiality (and, for AEAD modes,
//! authenticity); choosing fresh nonces is the caller's responsibility.

use crate::error::Result;

/// Mode that requires input to be a whole number of blocks
pub trait BlockMode: Send {
    /// Display name of the mode
    fn name(&self) -> &'static str;

    /// Encrypt block-aligned plaintext
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt block-aligned ciphertext
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;
}

/// Mode that accepts any input length, including a partial final segment
pub trait StreamMode: Send {
    /// Display name of the mode
    fn name(&self) -> &'static str;

    /// Encrypt plaintext of any length
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt ciphertext of any length
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;
}

/// Authenticated encryption with associated data
pub trait AeadMode: Send {
    /// Display name of the mode
    fn name(&self) -> &'static str;

    /// Length of the tag appended by [`seal`](AeadMode::seal)
    fn tag_size(&self) -> usize;

    /// Encrypt and authenticate, returning `ciphertext || tag`
    fn seal(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>>;

    /// Verify and decrypt `ciphertext || tag`
    ///
    /// The tag is recomputed and compared in constant time before any
    /// plaintext is produced; a mismatch yields `AuthenticationFailed`.
    fn open(&self, sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>>;
}
