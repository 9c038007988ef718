//! Shared fixtures for the cipherkit integration tests
//!
//! - [`combos`]: every valid cipher, mode and padding selection together
//!   with the key and IV sizes it needs
//! - [`vectors`]: JSON known-answer vectors run through the full pipeline

pub mod combos;
pub mod vectors;
