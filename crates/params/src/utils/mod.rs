//! Constant values for cipherkit cryptographic operations

pub mod symmetric;
