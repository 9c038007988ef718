//! AES block cipher implementation
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197. A single [`Aes`] type covers the 128, 192 and
//! 256-bit variants; the variant is selected by the key length.
//!
//! ## Constant-Time Guarantees
//!
//! This implementation mitigates timing side-channel attacks by:
//! - Using branchless arithmetic for GF(2^8) operations
//! - Using bitsliced S-box implementations instead of table lookups
//! - Ensuring consistent memory access patterns

use std::sync::atomic::{compiler_fence, Ordering};

use cipherkit_api::{validate, BlockCipher, CipherAlgorithm, KeyInit, Result};
use cipherkit_common::SecretBuffer;
use cipherkit_params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Round constants for AES key expansion
const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000,
    0x40000000, 0x80000000, 0x1b000000, 0x36000000,
];

/// Room for the largest schedule: 15 round keys × 16 bytes
const MAX_SCHEDULE: usize = 240;

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a & 0x80;
        a <<= 1;
        a ^= ((hi != 0) as u8) * 0x1B;
        b >>= 1;
    }
    p
}

/// Raise to the 254th power (b⁻¹ in GF(2⁸)) in constant time
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    y = gf_mul(y, x2);

    // zero has no inverse; map it to zero
    let mask = ((x != 0) as u8).wrapping_neg();
    y & mask
}

/// AES forward S-box: inv(x) ⊕ ROTL(inv(x),1–4) ⊕ 0x63
#[inline(always)]
fn bitsliced_sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

/// AES inverse S-box: undo affine then invert
#[inline(always)]
fn bitsliced_inv_sbox(x: u8) -> u8 {
    let y = x ^ 0x63;
    // A⁻¹ is convolution by t¹ + t³ + t⁶ mod (t⁸+1)
    let u = y.rotate_left(1) ^ y.rotate_left(3) ^ y.rotate_left(6);
    gf_inv(u)
}

/// Substitutes each byte in a word using the AES S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let b = word.to_be_bytes();
    u32::from_be_bytes([
        bitsliced_sbox(b[0]),
        bitsliced_sbox(b[1]),
        bitsliced_sbox(b[2]),
        bitsliced_sbox(b[3]),
    ])
}

/// AES with a 128, 192 or 256-bit key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes {
    round_keys: SecretBuffer<MAX_SCHEDULE>,
    rounds: usize,
}

impl CipherAlgorithm for Aes {
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;
    const KEY_SIZES: &'static [usize] = &[AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE];

    fn name() -> &'static str {
        "AES"
    }
}

impl KeyInit for Aes {
    fn new(key: &[u8]) -> Result<Self> {
        validate::key_size("AES", key.len(), Self::KEY_SIZES)?;
        let (round_keys, rounds) = Self::expand_key(key);
        Ok(Aes { round_keys, rounds })
    }
}

impl Aes {
    /// Number of rounds for the loaded key (10, 12 or 14)
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// FIPS 197 key expansion for any supported key length
    fn expand_key(key: &[u8]) -> (SecretBuffer<MAX_SCHEDULE>, usize) {
        let nk = key.len() / 4;
        let rounds = nk + 6;
        let total = 4 * (rounds + 1);

        let mut words = [0u32; MAX_SCHEDULE / 4];
        for (i, chunk) in key.chunks_exact(4).enumerate() {
            words[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for i in nk..total {
            let mut temp = words[i - 1];
            if i % nk == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ RCON[i / nk];
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }
            words[i] = words[i - nk] ^ temp;
        }

        let mut bytes = [0u8; MAX_SCHEDULE];
        for (i, word) in words.iter().take(total).enumerate() {
            bytes[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
        }
        words.zeroize();

        let schedule = SecretBuffer::new(bytes);
        bytes.zeroize();
        (schedule, rounds)
    }

    /// SubBytes step with bitsliced implementation
    fn sub_bytes(state: &mut [u8; 16]) {
        for byte in state.iter_mut() {
            *byte = bitsliced_sbox(*byte);
        }
        compiler_fence(Ordering::SeqCst);
    }

    /// ShiftRows step
    fn shift_rows(state: &mut [u8; 16]) {
        let t = *state;
        for c in 0..4 {
            for r in 0..4 {
                state[c * 4 + r] = t[((c + r) % 4) * 4 + r];
            }
        }
    }

    /// Multiply by 2 in GF(2^8)
    #[inline(always)]
    fn mul2(byte: u8) -> u8 {
        let high = byte >> 7;
        (byte << 1) ^ (high * 0x1B)
    }

    /// MixColumns step
    fn mix_columns(state: &mut [u8; 16]) {
        for c in 0..4 {
            let i = c * 4;
            let (s0, s1, s2, s3) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
            state[i] = Self::mul2(s0) ^ Self::mul2(s1) ^ s1 ^ s2 ^ s3;
            state[i + 1] = s0 ^ Self::mul2(s1) ^ Self::mul2(s2) ^ s2 ^ s3;
            state[i + 2] = s0 ^ s1 ^ Self::mul2(s2) ^ Self::mul2(s3) ^ s3;
            state[i + 3] = Self::mul2(s0) ^ s0 ^ s1 ^ s2 ^ Self::mul2(s3);
        }
    }

    /// AddRoundKey step
    #[inline(always)]
    fn add_round_key(state: &mut [u8; 16], round_key: &[u8]) {
        for (s, k) in state.iter_mut().zip(round_key) {
            *s ^= k;
        }
    }

    /// Inverse SubBytes with bitsliced implementation
    fn inv_sub_bytes(state: &mut [u8; 16]) {
        for byte in state.iter_mut() {
            *byte = bitsliced_inv_sbox(*byte);
        }
        compiler_fence(Ordering::SeqCst);
    }

    /// Inverse ShiftRows
    fn inv_shift_rows(state: &mut [u8; 16]) {
        let t = *state;
        for c in 0..4 {
            for r in 0..4 {
                state[((c + r) % 4) * 4 + r] = t[c * 4 + r];
            }
        }
    }

    /// Inverse MixColumns
    fn inv_mix_columns(state: &mut [u8; 16]) {
        for c in 0..4 {
            let i = c * 4;
            let (s0, s1, s2, s3) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
            state[i] = gf_mul(s0, 14) ^ gf_mul(s1, 11) ^ gf_mul(s2, 13) ^ gf_mul(s3, 9);
            state[i + 1] = gf_mul(s0, 9) ^ gf_mul(s1, 14) ^ gf_mul(s2, 11) ^ gf_mul(s3, 13);
            state[i + 2] = gf_mul(s0, 13) ^ gf_mul(s1, 9) ^ gf_mul(s2, 14) ^ gf_mul(s3, 11);
            state[i + 3] = gf_mul(s0, 11) ^ gf_mul(s1, 13) ^ gf_mul(s2, 9) ^ gf_mul(s3, 14);
        }
    }

    #[inline(always)]
    fn round_key(&self, round: usize) -> &[u8] {
        &self.round_keys.as_slice()[round * 16..(round + 1) * 16]
    }
}

impl BlockCipher for Aes {
    fn name(&self) -> &'static str {
        <Self as CipherAlgorithm>::name()
    }

    fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::block_length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let mut state = [0u8; 16];
        state.copy_from_slice(block);

        Self::add_round_key(&mut state, self.round_key(0));
        for round in 1..self.rounds {
            Self::sub_bytes(&mut state);
            Self::shift_rows(&mut state);
            Self::mix_columns(&mut state);
            Self::add_round_key(&mut state, self.round_key(round));
        }
        Self::sub_bytes(&mut state);
        Self::shift_rows(&mut state);
        Self::add_round_key(&mut state, self.round_key(self.rounds));

        block.copy_from_slice(&state);
        state.zeroize();
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::block_length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let mut state = [0u8; 16];
        state.copy_from_slice(block);

        Self::add_round_key(&mut state, self.round_key(self.rounds));
        for round in (1..self.rounds).rev() {
            Self::inv_shift_rows(&mut state);
            Self::inv_sub_bytes(&mut state);
            Self::add_round_key(&mut state, self.round_key(round));
            Self::inv_mix_columns(&mut state);
        }
        Self::inv_shift_rows(&mut state);
        Self::inv_sub_bytes(&mut state);
        Self::add_round_key(&mut state, self.round_key(0));

        block.copy_from_slice(&state);
        state.zeroize();
        Ok(())
    }
}
