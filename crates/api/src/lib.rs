//! Public API traits and types for the cipherkit library
//!
//! This crate defines the error taxonomy shared by every cipherkit crate and
//! the capability traits that ciphers, modes and paddings implement:
//!
//! - [`BlockCipher`] / [`StreamCipher`] for primitives
//! - [`BlockMode`], [`StreamMode`] and [`AeadMode`] for modes of operation
//! - [`PaddingScheme`] for padding strategies

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

pub use error::{validate, Error, Result};

pub use traits::{
    AeadMode, BlockCipher, BlockMode, CipherAlgorithm, KeyInit, PaddingScheme, StreamCipher,
    StreamMode,
};
