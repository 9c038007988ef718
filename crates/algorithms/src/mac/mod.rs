//! Message authentication codes built from block ciphers

pub mod cmac;

pub use cmac::Cmac;
