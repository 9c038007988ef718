//! Zero padding and the explicit no-padding scheme

use cipherkit_api::{validate, PaddingScheme, Result};

/// Zeros up to the next block boundary; aligned input is left unchanged
///
/// Unpadding strips every trailing zero, so data that itself ends in 0x00
/// does not round-trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroPadding;

impl PaddingScheme for ZeroPadding {
    fn name(&self) -> &'static str {
        "Zero"
    }

    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        validate::parameter(block_size > 0, "Zero padding", "block size must be positive")?;
        let rem = data.len() % block_size;
        let mut out = data.to_vec();
        if rem != 0 {
            out.resize(data.len() + block_size - rem, 0);
        }
        Ok(out)
    }

    fn unpad(&self, data: &[u8], _block_size: usize) -> Result<Vec<u8>> {
        let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        Ok(data[..end].to_vec())
    }
}

/// No padding: input must already be block aligned
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPadding;

impl PaddingScheme for NoPadding {
    fn name(&self) -> &'static str {
        "NoPadding"
    }

    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        validate::block_aligned("NoPadding", data.len(), block_size)?;
        Ok(data.to_vec())
    }

    fn unpad(&self, data: &[u8], _block_size: usize) -> Result<Vec<u8>> {
        Ok(data.to_vec())
    }
}
