//! Kuznyechik block cipher (GOST R 34.12-2015, 128-bit block)
//!
//! A 10-round SP network: each round XORs a round key, applies the byte
//! substitution `S` and the linear transform `L` built from an LFSR over
//! GF(2^8) with the polynomial x^8 + x^7 + x^6 + x + 1.

use cipherkit_api::{validate, BlockCipher, CipherAlgorithm, KeyInit, Result};
use cipherkit_common::SecretBuffer;
use cipherkit_params::utils::symmetric::{KUZNYECHIK_BLOCK_SIZE, KUZNYECHIK_KEY_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Nonlinear bijection `pi` from the standard
const PI: [u8; 256] = [
    0xfc, 0xee, 0xdd, 0x11, 0xcf, 0x6e, 0x31, 0x16, 0xfb, 0xc4, 0xfa, 0xda, 0x23, 0xc5, 0x04, 0x4d,
    0xe9, 0x77, 0xf0, 0xdb, 0x93, 0x2e, 0x99, 0xba, 0x17, 0x36, 0xf1, 0xbb, 0x14, 0xcd, 0x5f, 0xc1,
    0xf9, 0x18, 0x65, 0x5a, 0xe2, 0x5c, 0xef, 0x21, 0x81, 0x1c, 0x3c, 0x42, 0x8b, 0x01, 0x8e, 0x4f,
    0x05, 0x84, 0x02, 0xae, 0xe3, 0x6a, 0x8f, 0xa0, 0x06, 0x0b, 0xed, 0x98, 0x7f, 0xd4, 0xd3, 0x1f,
    0xeb, 0x34, 0x2c, 0x51, 0xea, 0xc8, 0x48, 0xab, 0xf2, 0x2a, 0x68, 0xa2, 0xfd, 0x3a, 0xce, 0xcc,
    0xb5, 0x70, 0x0e, 0x56, 0x08, 0x0c, 0x76, 0x12, 0xbf, 0x72, 0x13, 0x47, 0x9c, 0xb7, 0x5d, 0x87,
    0x15, 0xa1, 0x96, 0x29, 0x10, 0x7b, 0x9a, 0xc7, 0xf3, 0x91, 0x78, 0x6f, 0x9d, 0x9e, 0xb2, 0xb1,
    0x32, 0x75, 0x19, 0x3d, 0xff, 0x35, 0x8a, 0x7e, 0x6d, 0x54, 0xc6, 0x80, 0xc3, 0xbd, 0x0d, 0x57,
    0xdf, 0xf5, 0x24, 0xa9, 0x3e, 0xa8, 0x43, 0xc9, 0xd7, 0x79, 0xd6, 0xf6, 0x7c, 0x22, 0xb9, 0x03,
    0xe0, 0x0f, 0xec, 0xde, 0x7a, 0x94, 0xb0, 0xbc, 0xdc, 0xe8, 0x28, 0x50, 0x4e, 0x33, 0x0a, 0x4a,
    0xa7, 0x97, 0x60, 0x73, 0x1e, 0x00, 0x62, 0x44, 0x1a, 0xb8, 0x38, 0x82, 0x64, 0x9f, 0x26, 0x41,
    0xad, 0x45, 0x46, 0x92, 0x27, 0x5e, 0x55, 0x2f, 0x8c, 0xa3, 0xa5, 0x7d, 0x69, 0xd5, 0x95, 0x3b,
    0x07, 0x58, 0xb3, 0x40, 0x86, 0xac, 0x1d, 0xf7, 0x30, 0x37, 0x6b, 0xe4, 0x88, 0xd9, 0xe7, 0x89,
    0xe1, 0x1b, 0x83, 0x49, 0x4c, 0x3f, 0xf8, 0xfe, 0x8d, 0x53, 0xaa, 0x90, 0xca, 0xd8, 0x85, 0x61,
    0x20, 0x71, 0x67, 0xa4, 0x2d, 0x2b, 0x09, 0x5b, 0xcb, 0x9b, 0x25, 0xd0, 0xbe, 0xe5, 0x6c, 0x52,
    0x59, 0xa6, 0x74, 0xd2, 0xe6, 0xf4, 0xb4, 0xc0, 0xd1, 0x66, 0xaf, 0xc2, 0x39, 0x4b, 0x63, 0xb6,
];

const PI_INV: [u8; 256] = invert(&PI);

/// Coefficients of the linear transform `l`
const L_VEC: [u8; 16] = [
    0x94, 0x20, 0x85, 0x10, 0xc2, 0xc0, 0x01, 0xfb, 0x01, 0xc0, 0xc2, 0x10, 0x85, 0x20, 0x94, 0x01,
];

const fn invert(table: &[u8; 256]) -> [u8; 256] {
    let mut inv = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        inv[table[i] as usize] = i as u8;
        i += 1;
    }
    inv
}

/// Multiply in GF(2^8) modulo x^8 + x^7 + x^6 + x + 1
#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        p ^= a & (b & 1).wrapping_neg();
        let hi = a >> 7;
        a = (a << 1) ^ (hi * 0xC3);
        b >>= 1;
    }
    p
}

type Block = [u8; KUZNYECHIK_BLOCK_SIZE];

#[inline(always)]
fn linear(state: &Block) -> u8 {
    state
        .iter()
        .zip(L_VEC.iter())
        .fold(0u8, |acc, (&s, &l)| acc ^ gf_mul(s, l))
}

/// One LFSR step `R`
fn r(state: &mut Block) {
    let x = linear(state);
    state.copy_within(0..15, 1);
    state[0] = x;
}

/// Inverse LFSR step
fn r_inv(state: &mut Block) {
    let first = state[0];
    state.copy_within(1..16, 0);
    state[15] = first;
    state[15] = linear(state);
}

fn l(state: &mut Block) {
    for _ in 0..16 {
        r(state);
    }
}

fn l_inv(state: &mut Block) {
    for _ in 0..16 {
        r_inv(state);
    }
}

fn s(state: &mut Block) {
    for b in state.iter_mut() {
        *b = PI[*b as usize];
    }
}

fn s_inv(state: &mut Block) {
    for b in state.iter_mut() {
        *b = PI_INV[*b as usize];
    }
}

fn xor(state: &mut Block, key: &[u8]) {
    for (s, k) in state.iter_mut().zip(key) {
        *s ^= k;
    }
}

/// Kuznyechik with its expanded schedule of ten 128-bit round keys
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Kuznyechik {
    round_keys: SecretBuffer<160>,
}

impl CipherAlgorithm for Kuznyechik {
    const BLOCK_SIZE: usize = KUZNYECHIK_BLOCK_SIZE;
    const KEY_SIZES: &'static [usize] = &[KUZNYECHIK_KEY_SIZE];

    fn name() -> &'static str {
        "Kuznyechik"
    }
}

impl KeyInit for Kuznyechik {
    fn new(key: &[u8]) -> Result<Self> {
        validate::key_size("Kuznyechik", key.len(), Self::KEY_SIZES)?;

        let mut k1: Block = [0u8; 16];
        let mut k2: Block = [0u8; 16];
        k1.copy_from_slice(&key[..16]);
        k2.copy_from_slice(&key[16..]);

        let mut schedule = [0u8; 160];
        schedule[..16].copy_from_slice(&k1);
        schedule[16..32].copy_from_slice(&k2);

        // Feistel expansion with the iteration constants C_i = L(i)
        for pair in 0..4 {
            for step in 0..8 {
                let mut c: Block = [0u8; 16];
                c[15] = (8 * pair + step + 1) as u8;
                l(&mut c);

                let mut t = k1;
                xor(&mut t, &c);
                s(&mut t);
                l(&mut t);
                xor(&mut t, &k2);

                k2 = k1;
                k1 = t;
            }
            let offset = 32 * (pair + 1);
            schedule[offset..offset + 16].copy_from_slice(&k1);
            schedule[offset + 16..offset + 32].copy_from_slice(&k2);
        }

        let round_keys = SecretBuffer::new(schedule);
        schedule.zeroize();
        k1.zeroize();
        k2.zeroize();
        Ok(Self { round_keys })
    }
}

impl Kuznyechik {
    #[inline(always)]
    fn round_key(&self, i: usize) -> &[u8] {
        &self.round_keys.as_slice()[i * 16..(i + 1) * 16]
    }
}

impl BlockCipher for Kuznyechik {
    fn name(&self) -> &'static str {
        <Self as CipherAlgorithm>::name()
    }

    fn block_size(&self) -> usize {
        KUZNYECHIK_BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::block_length("Kuznyechik block", block.len(), KUZNYECHIK_BLOCK_SIZE)?;
        let mut state: Block = [0u8; 16];
        state.copy_from_slice(block);

        for i in 0..9 {
            xor(&mut state, self.round_key(i));
            s(&mut state);
            l(&mut state);
        }
        xor(&mut state, self.round_key(9));

        block.copy_from_slice(&state);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::block_length("Kuznyechik block", block.len(), KUZNYECHIK_BLOCK_SIZE)?;
        let mut state: Block = [0u8; 16];
        state.copy_from_slice(block);

        xor(&mut state, self.round_key(9));
        for i in (0..9).rev() {
            l_inv(&mut state);
            s_inv(&mut state);
            xor(&mut state, self.round_key(i));
        }

        block.copy_from_slice(&state);
        Ok(())
    }
}
