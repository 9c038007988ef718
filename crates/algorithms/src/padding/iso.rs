//! ANSI X9.23, ISO 10126 and ISO/IEC 7816-4 padding

use super::{check_block_size, counted_unpad_len, fill_length, Filler};
use cipherkit_api::{Error, PaddingScheme, Result};
use rand::rngs::OsRng;
use rand::RngCore;

/// ANSI X9.23: zero bytes followed by a count byte
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiX923;

impl PaddingScheme for AnsiX923 {
    fn name(&self) -> &'static str {
        "ANSI X9.23"
    }

    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        check_block_size("ANSI X9.23", block_size)?;
        let n = fill_length(data.len(), block_size);
        let mut out = data.to_vec();
        out.resize(data.len() + n - 1, 0);
        out.push(n as u8);
        Ok(out)
    }

    fn unpad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        let len = counted_unpad_len("ANSI X9.23", data, block_size, Filler::Zero)?;
        Ok(data[..len].to_vec())
    }
}

/// ISO 10126: random bytes followed by a count byte
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso10126;

impl PaddingScheme for Iso10126 {
    fn name(&self) -> &'static str {
        "ISO 10126"
    }

    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        check_block_size("ISO 10126", block_size)?;
        let n = fill_length(data.len(), block_size);
        let mut out = data.to_vec();
        out.resize(data.len() + n, 0);
        OsRng.fill_bytes(&mut out[data.len()..data.len() + n - 1]);
        out[data.len() + n - 1] = n as u8;
        Ok(out)
    }

    fn unpad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        let len = counted_unpad_len("ISO 10126", data, block_size, Filler::Any)?;
        Ok(data[..len].to_vec())
    }
}

/// ISO/IEC 7816-4: a 0x80 marker followed by zero bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso7816;

impl PaddingScheme for Iso7816 {
    fn name(&self) -> &'static str {
        "ISO 7816-4"
    }

    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        check_block_size("ISO 7816-4", block_size)?;
        let n = fill_length(data.len(), block_size);
        let mut out = data.to_vec();
        out.push(0x80);
        out.resize(data.len() + n, 0);
        Ok(out)
    }

    fn unpad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        check_block_size("ISO 7816-4", block_size)?;
        let scheme = "ISO 7816-4";
        if data.is_empty() || data.len() % block_size != 0 {
            return Err(Error::InvalidPadding { scheme });
        }

        let floor = data.len() - block_size;
        let marker = data[floor..]
            .iter()
            .rposition(|&b| b != 0)
            .map(|i| floor + i)
            .ok_or(Error::InvalidPadding { scheme })?;
        if data[marker] != 0x80 {
            return Err(Error::InvalidPadding { scheme });
        }
        Ok(data[..marker].to_vec())
    }
}
