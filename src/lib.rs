//! # cipherkit
//!
//! A symmetric cryptography composition engine: any registered block cipher,
//! any mode of operation and any padding scheme behind one encrypt/decrypt
//! contract.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cipherkit = "0.3"
//! ```
//!
//! ```ignore
//! use cipherkit::prelude::*;
//!
//! let sealed = Crypto::from_string("test-pass")
//!     .with_key_string("dfertf12dfertf12")
//!     .with_iv_string("dfertf12dfertf12")
//!     .aes()
//!     .cbc()
//!     .pkcs7_padding()
//!     .encrypt()
//!     .to_base64_string();
//! ```
//!
//! ## Features
//!
//! - `engine` (default): registry, builder and pipeline
//! - `algorithms`: raw ciphers, modes and paddings only
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`cipherkit-api`]: Error type and capability traits
//! - [`cipherkit-algorithms`]: Block/stream ciphers, modes, paddings
//! - [`cipherkit-symmetric`]: Registry, option context and builder

// Core re-exports (always available)
pub use cipherkit_api as api;
pub use cipherkit_common as common;
pub use cipherkit_internal as internal;
pub use cipherkit_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use cipherkit_algorithms as algorithms;

#[cfg(feature = "engine")]
pub use cipherkit_symmetric as symmetric;

/// Common imports for cipherkit users
pub mod prelude {
    pub use crate::api::{Error, Result};

    pub use crate::api::{
        AeadMode, BlockCipher, BlockMode, CipherAlgorithm, KeyInit, PaddingScheme, StreamCipher,
        StreamMode,
    };

    pub use crate::common::{SecretBuffer, SecretVec};

    pub use zeroize::Zeroizing;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::Pkcs1BlockType;

    #[cfg(feature = "engine")]
    pub use crate::symmetric::{
        default_registry, generate_iv, generate_key, Config, ConfigValue, Crypto, Engine, Mode,
        Multiple, MultipleEntry, Options, Output, Padding, Registry, RegistryBuilder, Selection,
    };
}
