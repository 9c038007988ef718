//! Hex and base64 codecs for builder input and pipeline output
//!
//! Base64 uses the standard alphabet with padding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use cipherkit_api::{Error, Result};

/// Lower-case hex
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Upper-case hex
pub fn encode_upper_hex(data: &[u8]) -> String {
    hex::encode_upper(data)
}

/// Standard base64
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode hex in either case
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    hex::decode(text).map_err(|err| Error::Encoding {
        context: "hex",
        message: err.to_string(),
    })
}

/// Decode standard base64
pub fn decode_base64(text: &str) -> Result<Vec<u8>> {
    STANDARD.decode(text).map_err(|err| Error::Encoding {
        context: "base64",
        message: err.to_string(),
    })
}
