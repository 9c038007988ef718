//! Error handling for the cipherkit ecosystem
//!
//! A single [`Error`] enum is shared by every crate in the workspace so that
//! a failure raised deep inside a mode or padding reaches the caller of the
//! pipeline unchanged.

pub mod validate;

use thiserror::Error as ThisError;

/// Primary error type for cipher, mode, padding and registry operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Key length is not among the cipher's accepted sizes
    #[error("invalid key size for {algorithm}: {actual} bytes")]
    InvalidKeySize {
        /// Cipher that rejected the key
        algorithm: &'static str,
        /// Supplied key length in bytes
        actual: usize,
    },

    /// IV or nonce length does not match the mode's requirement
    #[error("invalid IV size for {context}: {actual} bytes")]
    InvalidIvSize {
        /// Mode that rejected the IV
        context: &'static str,
        /// Supplied IV length in bytes
        actual: usize,
    },

    /// Input is not a whole number of blocks where one is required
    #[error("invalid data length for {context}: {actual} bytes with block size {block_size}")]
    InvalidDataLength {
        /// Operation that rejected the input
        context: &'static str,
        /// Block size the input must align to
        block_size: usize,
        /// Supplied input length in bytes
        actual: usize,
    },

    /// Unpadding found an inconsistent padding pattern
    #[error("invalid {scheme} padding")]
    InvalidPadding {
        /// Padding scheme that rejected the input
        scheme: &'static str,
    },

    /// AEAD tag verification failed; no plaintext is released
    #[error("authentication failed for {context}")]
    AuthenticationFailed {
        /// Mode whose tag did not verify
        context: &'static str,
    },

    /// A token was never registered
    #[error("unknown {kind} algorithm (token {token})")]
    UnknownAlgorithm {
        /// Token family: `multiple`, `mode` or `padding`
        kind: &'static str,
        /// Raw token value
        token: u32,
    },

    /// A configuration value is out of range or missing
    #[error("invalid parameter for {context}: {message}")]
    InvalidParameter {
        /// Component that rejected the parameter
        context: &'static str,
        /// What was wrong with it
        message: String,
    },

    /// Input text could not be decoded from hex or base64
    #[error("{context} decoding failed: {message}")]
    Encoding {
        /// Encoding that failed
        context: &'static str,
        /// Decoder message
        message: String,
    },
}

/// Result type for cipherkit operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn parameter(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// True for tag verification failures
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Error::AuthenticationFailed { .. })
    }
}

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Self {
        Error::parameter("array conversion", "slice length does not match")
    }
}
