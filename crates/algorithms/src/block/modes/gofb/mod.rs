//! GOST 28147-89 output feedback ("gamma") mode
//!
//! The IV is encrypted once to seed two 32-bit registers N1 and N2 (taken
//! big-endian from the two halves of E(IV), N2 first). For each 8-byte
//! segment N1 gains C2 = 0x01010101 modulo 2^32 and N2 gains
//! C1 = 0x01010104 modulo 2^32 - 1; the gamma is E(N2 || N1). Only 64-bit
//! block ciphers are accepted.

use byteorder::{BigEndian, ByteOrder};
use cipherkit_api::{validate, BlockCipher, Result, StreamMode};
use cipherkit_internal::xor_in_place;
use zeroize::Zeroizing;

const GOFB_BLOCK_SIZE: usize = 8;
const C1: u32 = 0x0101_0104;
const C2: u32 = 0x0101_0101;

/// Addition modulo 2^32 - 1
#[inline(always)]
fn add_mod_2_32_minus_1(a: u32, b: u32) -> u32 {
    let (sum, carry) = a.overflowing_add(b);
    sum.wrapping_add(carry as u32)
}

/// GOST gamma mode over a 64-bit block cipher
pub struct Gofb<C: BlockCipher> {
    cipher: C,
    iv: [u8; GOFB_BLOCK_SIZE],
}

impl<C: BlockCipher> Gofb<C> {
    /// Creates a GOFB instance; the cipher must have 8-byte blocks and the
    /// IV must be 8 bytes
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self> {
        validate::parameter(
            cipher.block_size() == GOFB_BLOCK_SIZE,
            "GOFB",
            "requires a 64-bit block cipher",
        )?;
        validate::iv_size("GOFB", iv.len(), GOFB_BLOCK_SIZE)?;
        Ok(Self {
            cipher,
            iv: iv.try_into()?,
        })
    }

    fn process(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut seed = Zeroizing::new(self.iv);
        self.cipher.encrypt_block(&mut seed[..])?;
        let mut n2 = BigEndian::read_u32(&seed[..4]);
        let mut n1 = BigEndian::read_u32(&seed[4..]);

        let mut out = data.to_vec();
        let mut gamma = Zeroizing::new([0u8; GOFB_BLOCK_SIZE]);
        for chunk in out.chunks_mut(GOFB_BLOCK_SIZE) {
            n1 = n1.wrapping_add(C2);
            n2 = add_mod_2_32_minus_1(n2, C1);
            BigEndian::write_u32(&mut gamma[..4], n2);
            BigEndian::write_u32(&mut gamma[4..], n1);
            self.cipher.encrypt_block(&mut gamma[..])?;
            xor_in_place(chunk, &gamma[..]);
        }
        Ok(out)
    }
}

impl<C: BlockCipher> StreamMode for Gofb<C> {
    fn name(&self) -> &'static str {
        "GOFB"
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.process(plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.process(ciphertext)
    }
}
