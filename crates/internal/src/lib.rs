//! Internal utilities for the cipherkit library
//!
//! Not a public API: byte helpers and constant-time primitives shared by the
//! algorithm crates.

#![forbid(unsafe_code)]

pub mod bytes;
pub mod constant_time;

pub use bytes::{increment_be, xor_in_place};
pub use constant_time::{ct_eq, ct_lt_mask};
