//! Composition root for the built-in algorithms
//!
//! [`register_defaults`] is the only place that knows the concrete cipher,
//! mode and padding types; everything else goes through the registry.

mod ciphers;
mod modes;
mod paddings;

use crate::registry::RegistryBuilder;

/// Register every built-in cipher family, mode and padding on `builder`
pub fn register_defaults(builder: &RegistryBuilder) {
    ciphers::register(builder);
    modes::register(builder);
    paddings::register(builder);
}
