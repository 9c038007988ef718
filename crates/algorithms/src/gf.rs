//! Block-width arithmetic in GF(2^64) and GF(2^128)
//!
//! Blocks of 8 or 16 bytes are handled as big-endian integers held in a
//! `u128`; 64-bit blocks occupy the low half. The reduction constants are the
//! usual ones for doubling in CMAC/OCB and multiplication in MGM:
//! x^128 + x^7 + x^2 + x + 1 and x^64 + x^4 + x^3 + x + 1.

use cipherkit_api::{BlockCipher, Error, Result};

/// Width and reduction constant for one block size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Field {
    pub bits: u32,
    pub residue: u128,
}

impl Field {
    /// Field matching `block_size`, or `InvalidParameter` for other widths
    pub fn for_block_size(context: &'static str, block_size: usize) -> Result<Self> {
        match block_size {
            16 => Ok(Self {
                bits: 128,
                residue: 0x87,
            }),
            8 => Ok(Self {
                bits: 64,
                residue: 0x1B,
            }),
            other => Err(Error::parameter(
                context,
                format!("unsupported block size {} bytes (need 8 or 16)", other),
            )),
        }
    }

    #[inline(always)]
    pub fn mask(&self) -> u128 {
        if self.bits == 128 {
            u128::MAX
        } else {
            (1u128 << self.bits) - 1
        }
    }

    #[inline(always)]
    pub fn bytes(&self) -> usize {
        (self.bits / 8) as usize
    }

    /// Multiply by x
    #[inline(always)]
    pub fn dbl(&self, v: u128) -> u128 {
        let carry = (v >> (self.bits - 1)) & 1;
        ((v << 1) & self.mask()) ^ (self.residue & 0u128.wrapping_sub(carry))
    }

    /// Full field multiplication, branch-free in the operands
    pub fn mul(&self, x: u128, y: u128) -> u128 {
        let mut z = 0u128;
        let mut v = x;
        let mut y = y;
        for _ in 0..self.bits {
            z ^= v & 0u128.wrapping_sub(y & 1);
            v = self.dbl(v);
            y >>= 1;
        }
        z
    }

    /// Big-endian block (at most `bytes()` long, zero-extended on the right)
    #[inline(always)]
    pub fn load(&self, block: &[u8]) -> u128 {
        let mut buf = [0u8; 16];
        let start = 16 - self.bytes();
        buf[start..start + block.len()].copy_from_slice(block);
        u128::from_be_bytes(buf)
    }

    /// Write the block value as `bytes()` big-endian bytes
    #[inline(always)]
    pub fn store(&self, v: u128) -> Vec<u8> {
        v.to_be_bytes()[16 - self.bytes()..].to_vec()
    }

    /// Encrypt a block held as an integer
    pub fn encrypt<C: BlockCipher + ?Sized>(&self, cipher: &C, v: u128) -> Result<u128> {
        let mut buf = v.to_be_bytes();
        let start = 16 - self.bytes();
        cipher.encrypt_block(&mut buf[start..])?;
        Ok(u128::from_be_bytes(buf))
    }

    /// Decrypt a block held as an integer
    pub fn decrypt<C: BlockCipher + ?Sized>(&self, cipher: &C, v: u128) -> Result<u128> {
        let mut buf = v.to_be_bytes();
        let start = 16 - self.bytes();
        cipher.decrypt_block(&mut buf[start..])?;
        Ok(u128::from_be_bytes(buf))
    }
}
