//! Composition engine for the cipherkit library
//!
//! This crate combines the primitives of `cipherkit-algorithms` at runtime:
//!
//! - [`registry`]: tokens, factories and the immutable [`Registry`]
//! - [`options`]: key, IV and typed [`Config`] for one call
//! - [`engine`]: the padding and mode pipeline
//! - [`builder`]: the fluent [`Crypto`] entry point and its [`Output`]
//! - [`defaults`]: registration of every built-in algorithm
//!
//! Errors are the shared [`cipherkit_api::Error`]; no parallel error type
//! exists here.
//!
//! Logging goes through `tracing` at `debug` level for pipeline stages and
//! `warn` for tag mismatches. Key and IV bytes are never logged; install a
//! subscriber in the application to see the events.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod builder;
pub mod defaults;
pub mod encoding;
pub mod engine;
pub mod keygen;
pub mod options;
pub mod output;
pub mod registry;

pub use builder::Crypto;
pub use defaults::register_defaults;
pub use engine::{Engine, Selection};
pub use keygen::{generate_iv, generate_key};
pub use options::{Config, ConfigValue, Options};
pub use output::Output;
pub use registry::{
    default_registry, Mode, ModeFactory, ModeInstance, Multiple, MultipleEntry, Padding,
    PaddingFactory, Registry, RegistryBuilder,
};

// Re-export the API error system instead of custom error types
pub use cipherkit_api::error::{validate, Error, Result};
