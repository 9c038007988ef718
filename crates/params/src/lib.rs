//! Constant values for cipherkit
//!
//! Key, block, nonce and tag sizes shared by the algorithm and engine crates.

#![no_std]

pub mod utils;
