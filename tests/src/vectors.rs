//! Loads known-answer vectors from JSON files and runs them through the
//! pipeline
//!
//! Each vector names its algorithms by their registry display names, so the
//! files double as a check of name lookup.

use cipherkit_symmetric::{Config, Engine, Options, Registry, Selection};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A named list of vectors
#[derive(Debug, Clone, Deserialize)]
pub struct VectorSuite {
    pub suite: String,
    pub vectors: Vec<Vector>,
}

/// One encrypt/decrypt known answer; byte fields are hex
#[derive(Debug, Clone, Deserialize)]
pub struct Vector {
    pub name: String,
    pub multiple: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub padding: Option<String>,
    pub key: String,
    #[serde(default)]
    pub iv: Option<String>,
    /// Associated data for AEAD modes
    #[serde(default)]
    pub aad: Option<String>,
    #[serde(default)]
    pub config: Config,
    pub plaintext: String,
    pub ciphertext: String,
}

fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
}

fn decode(field: &str, value: &str) -> Result<Vec<u8>, String> {
    hex::decode(value).map_err(|e| format!("bad hex in `{}`: {}", field, e))
}

/// Load `src/vectors/<name>.json`
pub fn load_suite(name: &str) -> Result<VectorSuite, String> {
    let path = vectors_dir().join(format!("{}.json", name));
    let json = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&json).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

impl Vector {
    /// Resolve the display names against `registry`
    pub fn selection(&self, registry: &Registry) -> Result<Selection, String> {
        let multiple = registry
            .find_multiple_by_name(&self.multiple)
            .ok_or_else(|| format!("unknown cipher `{}`", self.multiple))?;
        let mut selection = Selection::new(multiple);
        if let Some(name) = &self.mode {
            let mode = registry
                .find_mode_by_name(name)
                .ok_or_else(|| format!("unknown mode `{}`", name))?;
            selection = selection.with_mode(mode);
        }
        if let Some(name) = &self.padding {
            let padding = registry
                .find_padding_by_name(name)
                .ok_or_else(|| format!("unknown padding `{}`", name))?;
            selection = selection.with_padding(padding);
        }
        Ok(selection)
    }

    /// Key, IV and config for this vector
    pub fn options(&self) -> Result<Options, String> {
        let mut config = self.config.clone();
        if let Some(aad) = &self.aad {
            config.additional = Some(decode("aad", aad)?);
        }
        let mut options = Options::new(decode("key", &self.key)?).with_config(config);
        if let Some(iv) = &self.iv {
            options.set_iv(decode("iv", iv)?);
        }
        Ok(options)
    }

    /// Encrypt and decrypt through `engine`, comparing both directions
    pub fn check(&self, engine: &Engine) -> Result<(), String> {
        let selection = self.selection(engine.registry())?;
        let options = self.options()?;
        let plaintext = decode("plaintext", &self.plaintext)?;
        let ciphertext = decode("ciphertext", &self.ciphertext)?;

        let sealed = engine
            .encrypt(&selection, &plaintext, &options)
            .map_err(|e| format!("{}: encrypt failed: {}", self.name, e))?;
        if sealed != ciphertext {
            return Err(format!(
                "{}: expected {}, got {}",
                self.name,
                self.ciphertext,
                hex::encode(&sealed)
            ));
        }

        let opened = engine
            .decrypt(&selection, &ciphertext, &options)
            .map_err(|e| format!("{}: decrypt failed: {}", self.name, e))?;
        if opened != plaintext {
            return Err(format!("{}: decrypt did not restore the plaintext", self.name));
        }
        Ok(())
    }
}
