//! Multilinear Galois Mode (MGM), RFC 9058 / R 1323565.1.026-2019
//!
//! MGM pairs a counter keystream with a multilinear MAC over GF(2^n):
//!
//! - `Y_1 = E(0 || ICN)` drives encryption; each step increments the right
//!   half of `Y` modulo 2^(n/2).
//! - `Z_1 = E(1 || ICN)` drives authentication; each step increments the left
//!   half of `Z`, and `H_i = E(Z_i)`.
//! - `T = MSB_S(E(Σ H_i ⊗ A_i ⊕ Σ H_j ⊗ C_j ⊕ H_last ⊗ (len(A) || len(C))))`
//!
//! The nonce is one block with its most significant bit clear.

use crate::gf::Field;
use cipherkit_api::{validate, AeadMode, BlockCipher, Error, Result};
use cipherkit_internal::ct_eq;

/// MGM instance bound to one nonce
pub struct Mgm<C: BlockCipher> {
    cipher: C,
    field: Field,
    nonce: u128,
    tag_size: usize,
}

impl<C: BlockCipher> Mgm<C> {
    /// Creates an MGM instance
    ///
    /// The cipher must have 64 or 128-bit blocks, the nonce must be exactly
    /// one block with the top bit clear, and the tag between 1 byte and one
    /// block.
    pub fn new(cipher: C, nonce: &[u8], tag_size: usize) -> Result<Self> {
        let n = cipher.block_size();
        let field = Field::for_block_size("MGM", n)?;
        validate::iv_size("MGM", nonce.len(), n)?;
        validate::parameter(
            nonce[0] & 0x80 == 0,
            "MGM",
            "most significant nonce bit must be zero",
        )?;
        if tag_size == 0 || tag_size > n {
            return Err(Error::parameter(
                "MGM",
                format!("tag size {} must be between 1 and {}", tag_size, n),
            ));
        }
        Ok(Self {
            cipher,
            field,
            nonce: field.load(nonce),
            tag_size,
        })
    }

    fn half_mask(&self) -> u128 {
        (1u128 << (self.field.bits / 2)) - 1
    }

    /// `len(A) + len(C)` in bits must stay below 2^(n/2)
    ///
    /// Within that bound neither the length block nor the half-block
    /// counters of `Y` and `Z` can wrap.
    fn check_lengths(&self, aad_len: usize, data_len: usize) -> Result<()> {
        let bits = (aad_len as u128 + data_len as u128) * 8;
        validate::parameter(
            bits <= self.half_mask(),
            "MGM",
            "associated data and message exceed 2^(n/2) bits",
        )
    }

    /// XOR `data` with the Y keystream
    fn crypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        let n = self.field.bytes();
        let mask = self.half_mask();
        let mut y = self.field.encrypt(&self.cipher, self.nonce)?;
        let mut out = Vec::with_capacity(data.len());

        for chunk in data.chunks(n) {
            let keystream = self.field.store(self.field.encrypt(&self.cipher, y)?);
            out.extend(chunk.iter().zip(&keystream).map(|(a, b)| a ^ b));
            y = (y & !mask) | (y.wrapping_add(1) & mask);
        }
        Ok(out)
    }

    /// Full-width tag over `aad` and `ciphertext`
    fn tag(&self, aad: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let n = self.field.bytes();
        let half = self.field.bits / 2;
        let mask = self.half_mask();
        let top_bit = 1u128 << (self.field.bits - 1);

        let mut z = self.field.encrypt(&self.cipher, self.nonce | top_bit)?;
        let mut sum = 0u128;

        for block in aad.chunks(n).chain(ciphertext.chunks(n)) {
            let h = self.field.encrypt(&self.cipher, z)?;
            sum ^= self.field.mul(h, self.field.load(block));
            z = ((((z >> half).wrapping_add(1)) & mask) << half) | (z & mask);
        }

        let aad_bits = (aad.len() as u128 * 8) & mask;
        let ct_bits = (ciphertext.len() as u128 * 8) & mask;
        let h = self.field.encrypt(&self.cipher, z)?;
        sum ^= self.field.mul(h, (aad_bits << half) | ct_bits);

        let tag = self.field.encrypt(&self.cipher, sum)?;
        Ok(self.field.store(tag))
    }
}

impl<C: BlockCipher> AeadMode for Mgm<C> {
    fn name(&self) -> &'static str {
        "MGM"
    }

    fn tag_size(&self) -> usize {
        self.tag_size
    }

    fn seal(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        self.check_lengths(aad.len(), plaintext.len())?;
        let mut out = self.crypt(plaintext)?;
        let tag = self.tag(aad, &out)?;
        out.extend_from_slice(&tag[..self.tag_size]);
        Ok(out)
    }

    fn open(&self, sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        if sealed.len() < self.tag_size {
            return Err(Error::AuthenticationFailed { context: "MGM" });
        }
        let (ciphertext, received) = sealed.split_at(sealed.len() - self.tag_size);
        self.check_lengths(aad.len(), ciphertext.len())?;
        let expected = self.tag(aad, ciphertext)?;
        validate::authentication(ct_eq(&expected[..self.tag_size], received), "MGM")?;
        self.crypt(ciphertext)
    }
}
