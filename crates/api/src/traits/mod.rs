//! Capability traits implemented by ciphers, modes and paddings

pub mod cipher;
pub mod mode;
pub mod padding;

pub use cipher::{BlockCipher, CipherAlgorithm, KeyInit, StreamCipher};
pub use mode::{AeadMode, BlockMode, StreamMode};
pub use padding::PaddingScheme;
