//! PKCS#1 v1.5 style padding applied to block ciphers
//!
//! The padded message is `00 || BT || PS || 00 || D`, extended so that its
//! total length is a multiple of the block size (at least three bytes of
//! overhead). The filler `PS` depends on the block type:
//!
//! | BT | PS                    |
//! |----|-----------------------|
//! | 00 | 0x00 bytes            |
//! | 01 | 0xFF bytes            |
//! | 02 | random non-zero bytes |
//!
//! With block type 00 the separator is indistinguishable from the filler, so
//! data starting with 0x00 cannot be padded.

use cipherkit_api::{validate, Error, PaddingScheme, Result};
use rand::rngs::OsRng;
use rand::Rng;

/// Fixed overhead: leading zero, block type and separator
const OVERHEAD: usize = 3;

/// PKCS#1 block type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum Pkcs1BlockType {
    /// Zero filler
    Zero,
    /// 0xFF filler
    Ones,
    /// Random non-zero filler
    #[default]
    Random,
}

impl Pkcs1BlockType {
    /// The BT byte written after the leading zero
    pub fn as_byte(self) -> u8 {
        match self {
            Pkcs1BlockType::Zero => 0x00,
            Pkcs1BlockType::Ones => 0x01,
            Pkcs1BlockType::Random => 0x02,
        }
    }
}

impl TryFrom<u8> for Pkcs1BlockType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Pkcs1BlockType::Zero),
            1 => Ok(Pkcs1BlockType::Ones),
            2 => Ok(Pkcs1BlockType::Random),
            other => Err(Error::parameter(
                "PKCS1",
                format!("block type {} is not 0, 1 or 2", other),
            )),
        }
    }
}

impl From<Pkcs1BlockType> for u8 {
    fn from(bt: Pkcs1BlockType) -> Self {
        bt.as_byte()
    }
}

/// PKCS#1 padding with a fixed block type
#[derive(Debug, Clone, Copy, Default)]
pub struct Pkcs1 {
    block_type: Pkcs1BlockType,
}

impl Pkcs1 {
    /// Padding with the given block type
    pub fn new(block_type: Pkcs1BlockType) -> Self {
        Self { block_type }
    }

    /// Configured block type
    pub fn block_type(&self) -> Pkcs1BlockType {
        self.block_type
    }
}

impl PaddingScheme for Pkcs1 {
    fn name(&self) -> &'static str {
        "PKCS1"
    }

    fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        validate::parameter(block_size > 0, "PKCS1", "block size must be positive")?;
        if self.block_type == Pkcs1BlockType::Zero && data.first() == Some(&0) {
            return Err(Error::parameter(
                "PKCS1",
                "block type 0 cannot pad data that starts with 0x00",
            ));
        }

        let total = (data.len() + OVERHEAD).div_ceil(block_size) * block_size;
        let filler_len = total - data.len() - OVERHEAD;

        let mut out = Vec::with_capacity(total);
        out.push(0x00);
        out.push(self.block_type.as_byte());
        match self.block_type {
            Pkcs1BlockType::Zero => out.resize(2 + filler_len, 0x00),
            Pkcs1BlockType::Ones => out.resize(2 + filler_len, 0xFF),
            Pkcs1BlockType::Random => {
                let mut rng = OsRng;
                out.extend((0..filler_len).map(|_| rng.gen_range(1..=255u8)));
            }
        }
        out.push(0x00);
        out.extend_from_slice(data);
        Ok(out)
    }

    fn unpad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        let invalid = Error::InvalidPadding { scheme: "PKCS1" };
        if block_size == 0 || data.len() < OVERHEAD || data.len() % block_size != 0 {
            return Err(invalid);
        }
        if data[0] != 0x00 || data[1] != self.block_type.as_byte() {
            return Err(invalid);
        }

        let body = &data[2..];
        let start = match self.block_type {
            Pkcs1BlockType::Zero => body.iter().position(|&b| b != 0).unwrap_or(body.len()),
            Pkcs1BlockType::Ones => {
                let sep = body
                    .iter()
                    .position(|&b| b != 0xFF)
                    .ok_or_else(|| invalid.clone())?;
                if body[sep] != 0x00 {
                    return Err(invalid);
                }
                sep + 1
            }
            Pkcs1BlockType::Random => {
                let sep = body
                    .iter()
                    .position(|&b| b == 0)
                    .ok_or_else(|| invalid.clone())?;
                sep + 1
            }
        };
        Ok(body[start..].to_vec())
    }
}
