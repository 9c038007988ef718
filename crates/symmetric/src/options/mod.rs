//! Option context carried through one pipeline call
//!
//! [`Options`] bundles the key, the IV or nonce and a typed [`Config`].
//! `Config` covers the keys the built-in modes understand and keeps any
//! other key in an open-ended `extra` map, so plugins can read their own
//! settings. Both `Config` and [`ConfigValue`] are serde types and can be
//! loaded from JSON or TOML.

use cipherkit_algorithms::Pkcs1BlockType;
use cipherkit_api::{Error, Result};
use cipherkit_common::SecretVec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Config key for associated data
pub const ADDITIONAL: &str = "additional";

/// Config key for the AEAD tag length in bytes
pub const TAG_SIZE: &str = "tag_size";

/// Config key for the CFB segment width in bits
pub const BIT_BLOCK_SIZE: &str = "bit_block_size";

/// Config key for the PKCS#1 block type
pub const PKCS1_BLOCK_TYPE: &str = "pkcs1_padding_bt";

/// Loosely typed value accepted through the generic config surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Boolean flag
    Bool(bool),
    /// Integer
    Int(i64),
    /// UTF-8 text
    Str(String),
    /// Raw bytes
    Bytes(Vec<u8>),
}

impl ConfigValue {
    /// Integer value, if this is one
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Byte view of `Bytes` and `Str` values
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ConfigValue::Bytes(v) => Some(v),
            ConfigValue::Str(s) => Some(s.as_bytes()),
            _ => None,
        }
    }

    /// Boolean value, if this is one
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(v: bool) -> Self {
        ConfigValue::Bool(v)
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        ConfigValue::Int(v)
    }
}

impl From<i32> for ConfigValue {
    fn from(v: i32) -> Self {
        ConfigValue::Int(v.into())
    }
}

impl From<u32> for ConfigValue {
    fn from(v: u32) -> Self {
        ConfigValue::Int(v.into())
    }
}

impl From<&str> for ConfigValue {
    fn from(v: &str) -> Self {
        ConfigValue::Str(v.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(v: String) -> Self {
        ConfigValue::Str(v)
    }
}

impl From<Vec<u8>> for ConfigValue {
    fn from(v: Vec<u8>) -> Self {
        ConfigValue::Bytes(v)
    }
}

impl From<&[u8]> for ConfigValue {
    fn from(v: &[u8]) -> Self {
        ConfigValue::Bytes(v.to_vec())
    }
}

/// Per-call mode and padding configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Associated data for AEAD modes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<Vec<u8>>,
    /// AEAD tag length in bytes; the block size when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_size: Option<usize>,
    /// Segment width in bits for CFB-N and GOST CFB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bit_block_size: Option<usize>,
    /// PKCS#1 block type; 02 when unset
    #[serde(
        rename = "pkcs1_padding_bt",
        skip_serializing_if = "Option::is_none"
    )]
    pub pkcs1_block_type: Option<Pkcs1BlockType>,
    /// Keys not understood by the built-in algorithms
    #[serde(flatten)]
    pub extra: BTreeMap<String, ConfigValue>,
}

fn non_negative(key: &'static str, value: &ConfigValue) -> Result<usize> {
    value
        .as_int()
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| Error::parameter(key, "expected a non-negative integer"))
}

impl Config {
    /// Store `value` under `key`
    ///
    /// The well-known keys are type-checked and routed to their typed fields;
    /// every other key lands in `extra`.
    pub fn set(&mut self, key: &str, value: impl Into<ConfigValue>) -> Result<()> {
        let value = value.into();
        match key {
            ADDITIONAL => {
                let bytes = value
                    .as_bytes()
                    .ok_or_else(|| Error::parameter(ADDITIONAL, "expected bytes or a string"))?;
                self.additional = Some(bytes.to_vec());
            }
            TAG_SIZE => self.tag_size = Some(non_negative(TAG_SIZE, &value)?),
            BIT_BLOCK_SIZE => self.bit_block_size = Some(non_negative(BIT_BLOCK_SIZE, &value)?),
            PKCS1_BLOCK_TYPE => {
                let raw = non_negative(PKCS1_BLOCK_TYPE, &value)?;
                let byte = u8::try_from(raw)
                    .map_err(|_| Error::parameter(PKCS1_BLOCK_TYPE, "expected 0, 1 or 2"))?;
                self.pkcs1_block_type = Some(Pkcs1BlockType::try_from(byte)?);
            }
            other => {
                self.extra.insert(other.to_string(), value);
            }
        }
        Ok(())
    }

    /// Value stored under `key`, typed fields included
    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        match key {
            ADDITIONAL => self.additional.clone().map(ConfigValue::Bytes),
            TAG_SIZE => self.tag_size.map(|v| ConfigValue::Int(v as i64)),
            BIT_BLOCK_SIZE => self.bit_block_size.map(|v| ConfigValue::Int(v as i64)),
            PKCS1_BLOCK_TYPE => self
                .pkcs1_block_type
                .map(|bt| ConfigValue::Int(i64::from(bt.as_byte()))),
            other => self.extra.get(other).cloned(),
        }
    }

    /// True if `key` has a value
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Associated data, empty when unset
    pub fn additional_or_empty(&self) -> &[u8] {
        self.additional.as_deref().unwrap_or(&[])
    }

    /// Integer extra under `key`, range-checked into `u32`
    pub fn extra_u32(&self, key: &'static str) -> Result<Option<u32>> {
        match self.extra.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_int()
                .and_then(|v| u32::try_from(v).ok())
                .map(Some)
                .ok_or_else(|| Error::parameter(key, "expected an integer in the u32 range")),
        }
    }
}

/// Key, IV and configuration for one encrypt or decrypt call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    key: SecretVec,
    iv: Option<Vec<u8>>,
    config: Config,
}

impl Options {
    /// Options holding only a key
    pub fn new(key: impl AsRef<[u8]>) -> Self {
        Self {
            key: SecretVec::from_slice(key.as_ref()),
            iv: None,
            config: Config::default(),
        }
    }

    /// Set the IV or nonce
    pub fn with_iv(mut self, iv: impl AsRef<[u8]>) -> Self {
        self.iv = Some(iv.as_ref().to_vec());
        self
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Replace the key
    pub fn set_key(&mut self, key: impl AsRef<[u8]>) {
        self.key = SecretVec::from_slice(key.as_ref());
    }

    /// Replace the IV or nonce
    pub fn set_iv(&mut self, iv: impl AsRef<[u8]>) {
        self.iv = Some(iv.as_ref().to_vec());
    }

    /// Key bytes
    pub fn key(&self) -> &[u8] {
        self.key.as_slice()
    }

    /// IV or nonce, if any
    pub fn iv(&self) -> Option<&[u8]> {
        self.iv.as_deref()
    }

    /// Configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable configuration
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}
