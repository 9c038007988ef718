//! Common implementations and shared functionality for the cipherkit library
//!
//! This crate holds the secret-carrying containers used for keys and key
//! schedules across the cipherkit components.

#![forbid(unsafe_code)]

pub mod security;

pub use security::{SecretBuffer, SecretVec};
