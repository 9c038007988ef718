//! Security primitives for handling key material
//!
//! Every container here zeroizes on drop and redacts its `Debug` output.

pub mod secret;

pub use secret::{SecretBuffer, SecretVec};
