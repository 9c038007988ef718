//! Stream cipher implementations
//!
//! Stream ciphers are registered as mode-less cipher families: the pipeline
//! XORs their keystream over the whole buffer instead of driving a mode.
//!
//! # Security Considerations
//!
//! Reusing a (key, nonce) pair with ChaCha20, or reusing any RC4 key,
//! exposes the XOR of the plaintexts.

pub mod chacha;
pub mod rc4;

pub use chacha::chacha20::ChaCha20;
pub use rc4::Rc4;
