//! Pipeline result with formatting helpers

use crate::encoding::{encode_base64, encode_hex, encode_upper_hex};
use cipherkit_api::{Error, Result};
use std::fmt;
use zeroize::Zeroizing;

/// Bytes produced by a pipeline call, or the error that stopped it
///
/// On error every byte accessor returns an empty value; check
/// [`error`](Output::error) or use [`into_result`](Output::into_result).
#[derive(Debug, Clone)]
pub struct Output {
    data: Zeroizing<Vec<u8>>,
    error: Option<Error>,
}

impl Output {
    /// Successful result
    pub fn success(data: Vec<u8>) -> Self {
        Self {
            data: Zeroizing::new(data),
            error: None,
        }
    }

    /// Failed result
    pub fn failure(error: Error) -> Self {
        Self {
            data: Zeroizing::new(Vec::new()),
            error: Some(error),
        }
    }

    /// The error, if the call failed
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// True if the call succeeded
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Borrow the bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Copy of the bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    /// Lower-case hex of the bytes
    pub fn to_hex_string(&self) -> String {
        encode_hex(&self.data)
    }

    /// Upper-case hex of the bytes
    pub fn to_upper_hex_string(&self) -> String {
        encode_upper_hex(&self.data)
    }

    /// Standard base64 of the bytes
    pub fn to_base64_string(&self) -> String {
        encode_base64(&self.data)
    }

    /// The bytes, or the error that prevented them
    pub fn into_result(self) -> Result<Vec<u8>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.data.to_vec()),
        }
    }
}

impl From<Result<Vec<u8>>> for Output {
    fn from(result: Result<Vec<u8>>) -> Self {
        match result {
            Ok(data) => Output::success(data),
            Err(err) => Output::failure(err),
        }
    }
}

/// The bytes as UTF-8 text, invalid sequences replaced
impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}
