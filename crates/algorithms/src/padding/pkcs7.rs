//! PKCS#7 (RFC 5652 section 6.3) and its PKCS#5 alias

use super::{check_block_size, counted_unpad_len, fill_length, Filler};
use cipherkit_api::{PaddingScheme, Result};

fn pad_with_count(scheme: &'static str, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    check_block_size(scheme, block_size)?;
    let n = fill_length(data.len(), block_size);
    let mut out = Vec::with_capacity(data.len() + n);
    out.extend_from_slice(data);
    out.resize(data.len() + n, n as u8);
    Ok(out)
}

fn unpad_with_count(scheme: &'static str, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let len = counted_unpad_len(scheme, data, block_size, Filler::Count)?;
    Ok(data[..len].to_vec())
}

/// PKCS#7: `n` bytes of value `n`, 1 ≤ n ≤ block size
#[derive(Debug, Clone, Copy, Default)]
pub struct Pkcs7;

impl PaddingScheme for Pkcs7 {
    fn name(&self) -> &'static str {
        "PKCS7"
    }

    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        pad_with_count("PKCS7", data, block_size)
    }

    fn unpad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        unpad_with_count("PKCS7", data, block_size)
    }
}

/// PKCS#5, treated as PKCS#7 at the cipher's block size
#[derive(Debug, Clone, Copy, Default)]
pub struct Pkcs5;

impl PaddingScheme for Pkcs5 {
    fn name(&self) -> &'static str {
        "PKCS5"
    }

    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        pad_with_count("PKCS5", data, block_size)
    }

    fn unpad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        unpad_with_count("PKCS5", data, block_size)
    }
}
