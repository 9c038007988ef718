//! Magma block cipher (GOST R 34.12-2015, 64-bit block)
//!
//! The 32-round Feistel network of GOST 28147-89 fixed to the S-box set
//! `id-tc26-gost-28147-param-Z`. Words are read big-endian; the 256-bit key
//! supplies eight 32-bit subkeys used K0..K7 three times, then K7..K0.

use byteorder::{BigEndian, ByteOrder};
use cipherkit_api::{validate, BlockCipher, CipherAlgorithm, KeyInit, Result};
use cipherkit_params::utils::symmetric::{MAGMA_BLOCK_SIZE, MAGMA_KEY_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

const SBOX: [[u8; 16]; 8] = [
    [12, 4, 6, 2, 10, 5, 11, 9, 14, 8, 13, 7, 0, 3, 15, 1],
    [6, 8, 2, 3, 9, 10, 5, 12, 1, 14, 4, 7, 11, 13, 0, 15],
    [11, 3, 5, 8, 2, 15, 10, 13, 14, 1, 7, 4, 12, 9, 6, 0],
    [12, 8, 2, 1, 13, 4, 15, 6, 7, 0, 10, 5, 3, 14, 9, 11],
    [7, 15, 5, 10, 8, 1, 6, 13, 0, 9, 3, 14, 11, 4, 2, 12],
    [5, 13, 15, 6, 9, 2, 12, 10, 11, 7, 8, 1, 4, 3, 14, 0],
    [8, 14, 2, 5, 6, 9, 1, 12, 15, 4, 11, 0, 13, 10, 3, 7],
    [1, 7, 14, 13, 0, 5, 8, 3, 4, 15, 10, 6, 9, 12, 11, 2],
];

/// Nibble substitution `t`; S-box `i` handles bits 4i..4i+4
#[inline(always)]
fn t(a: u32) -> u32 {
    let mut out = 0u32;
    for (i, row) in SBOX.iter().enumerate() {
        let nibble = (a >> (4 * i)) & 0xF;
        out |= (row[nibble as usize] as u32) << (4 * i);
    }
    out
}

/// Round function `g[k](a)`
#[inline(always)]
fn g(k: u32, a: u32) -> u32 {
    t(a.wrapping_add(k)).rotate_left(11)
}

/// Magma with its eight 32-bit subkeys
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Magma {
    subkeys: [u32; 8],
}

impl CipherAlgorithm for Magma {
    const BLOCK_SIZE: usize = MAGMA_BLOCK_SIZE;
    const KEY_SIZES: &'static [usize] = &[MAGMA_KEY_SIZE];

    fn name() -> &'static str {
        "Magma"
    }
}

impl KeyInit for Magma {
    fn new(key: &[u8]) -> Result<Self> {
        validate::key_size("Magma", key.len(), Self::KEY_SIZES)?;
        let mut subkeys = [0u32; 8];
        BigEndian::read_u32_into(key, &mut subkeys);
        Ok(Self { subkeys })
    }
}

impl Magma {
    /// Subkey for round `i` of encryption
    #[inline(always)]
    fn encrypt_key(&self, i: usize) -> u32 {
        if i < 24 {
            self.subkeys[i % 8]
        } else {
            self.subkeys[31 - i]
        }
    }

    fn crypt(&self, block: &mut [u8], key_at: impl Fn(usize) -> u32) {
        let mut hi = BigEndian::read_u32(&block[..4]);
        let mut lo = BigEndian::read_u32(&block[4..]);
        for i in 0..31 {
            let next = hi ^ g(key_at(i), lo);
            hi = lo;
            lo = next;
        }
        hi ^= g(key_at(31), lo);
        BigEndian::write_u32(&mut block[..4], hi);
        BigEndian::write_u32(&mut block[4..], lo);
    }
}

impl BlockCipher for Magma {
    fn name(&self) -> &'static str {
        <Self as CipherAlgorithm>::name()
    }

    fn block_size(&self) -> usize {
        MAGMA_BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::block_length("Magma block", block.len(), MAGMA_BLOCK_SIZE)?;
        self.crypt(block, |i| self.encrypt_key(i));
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::block_length("Magma block", block.len(), MAGMA_BLOCK_SIZE)?;
        self.crypt(block, |i| self.encrypt_key(31 - i));
        Ok(())
    }
}
