//! OCB authenticated encryption (RFC 7253)
//!
//! [`Ocb::new`] is RFC 7253 OCB3 for 128-bit block ciphers. [`Ocb::new_ocb3`]
//! additionally accepts 64-bit block ciphers using the parameters the OCB
//! authors give for that width: doubling modulo x^64 + x^4 + x^3 + x + 1,
//! a 5-bit bottom index and a 25-bit stretch shift.
//!
//! ## Constant-Time Guarantees
//!
//! The tag is compared with a constant-time equality check and the recovered
//! plaintext buffer is wiped before an authentication error is returned.

use crate::gf::Field;
use cipherkit_api::{validate, AeadMode, BlockCipher, Error, Result};
use cipherkit_internal::ct_eq;
use zeroize::{Zeroize, Zeroizing};

/// Width-dependent constants for nonce stretching
#[derive(Debug, Clone, Copy)]
struct Stretch {
    bottom_bits: u32,
    shift: u32,
}

impl Stretch {
    fn for_bits(bits: u32) -> Self {
        if bits == 128 {
            Stretch {
                bottom_bits: 6,
                shift: 8,
            }
        } else {
            Stretch {
                bottom_bits: 5,
                shift: 25,
            }
        }
    }
}

/// OCB mode instance bound to one nonce
pub struct Ocb<C: BlockCipher> {
    cipher: C,
    field: Field,
    nonce: Vec<u8>,
    tag_size: usize,
    l_star: Zeroizing<u128>,
    l_dollar: Zeroizing<u128>,
    l_zero: Zeroizing<u128>,
    label: &'static str,
}

impl<C: BlockCipher> Ocb<C> {
    /// RFC 7253 OCB; requires a 128-bit block cipher
    ///
    /// The nonce must be 1 to 15 bytes and the tag 1 to 16 bytes.
    pub fn new(cipher: C, nonce: &[u8], tag_size: usize) -> Result<Self> {
        validate::parameter(
            cipher.block_size() == 16,
            "OCB",
            "requires a 128-bit block cipher",
        )?;
        Self::build(cipher, nonce, tag_size, "OCB")
    }

    /// OCB3 over a 64 or 128-bit block cipher
    ///
    /// The nonce must be shorter than one block.
    pub fn new_ocb3(cipher: C, nonce: &[u8], tag_size: usize) -> Result<Self> {
        Self::build(cipher, nonce, tag_size, "OCB3")
    }

    fn build(cipher: C, nonce: &[u8], tag_size: usize, label: &'static str) -> Result<Self> {
        let n = cipher.block_size();
        let field = Field::for_block_size("OCB", n)?;
        validate::iv_size_range("OCB", nonce.len(), 1, n - 1)?;
        if tag_size == 0 || tag_size > n {
            return Err(Error::parameter(
                "OCB",
                format!("tag size {} must be between 1 and {}", tag_size, n),
            ));
        }

        let l_star = field.encrypt(&cipher, 0)?;
        let l_dollar = field.dbl(l_star);
        let l_zero = field.dbl(l_dollar);

        Ok(Self {
            cipher,
            field,
            nonce: nonce.to_vec(),
            tag_size,
            l_star: Zeroizing::new(l_star),
            l_dollar: Zeroizing::new(l_dollar),
            l_zero: Zeroizing::new(l_zero),
            label,
        })
    }

    /// L_i = dbl^i(L_0)
    fn l_at(&self, i: u32) -> u128 {
        let mut l = *self.l_zero;
        for _ in 0..i {
            l = self.field.dbl(l);
        }
        l
    }

    /// Offset_0 derived from the nonce and tag length
    fn initial_offset(&self) -> Result<u128> {
        let bits = self.field.bits;
        let mask = self.field.mask();
        let stretch = Stretch::for_bits(bits);

        let tag_bits = ((self.tag_size as u128 * 8) % bits as u128) << (bits - 7);
        let nonce_value = tag_bits | (1u128 << (8 * self.nonce.len())) | be_value(&self.nonce);

        let bottom_mask = (1u128 << stretch.bottom_bits) - 1;
        let bottom = (nonce_value & bottom_mask) as u32;
        let ktop = self.field.encrypt(&self.cipher, nonce_value & !bottom_mask & mask)?;

        if bottom == 0 {
            return Ok(ktop);
        }
        let spill = ktop ^ ((ktop << stretch.shift) & mask);
        Ok(((ktop << bottom) & mask) | (spill >> (bits - bottom)))
    }

    /// HASH(K, A)
    fn hash(&self, aad: &[u8]) -> Result<u128> {
        let n = self.field.bytes();
        let mut sum = 0u128;
        let mut offset = 0u128;

        let mut blocks = aad.chunks_exact(n);
        for (i, block) in (1u32..).zip(&mut blocks) {
            offset ^= self.l_at(i.trailing_zeros());
            sum ^= self.field.encrypt(&self.cipher, self.field.load(block) ^ offset)?;
        }
        let rest = blocks.remainder();
        if !rest.is_empty() {
            offset ^= *self.l_star;
            let padded = self.field.load(rest) | pad_bit(&self.field, rest.len());
            sum ^= self.field.encrypt(&self.cipher, padded ^ offset)?;
        }
        Ok(sum)
    }

    /// Runs the core pass; returns the output and the full-width tag
    fn process(&self, input: &[u8], aad: &[u8], decrypting: bool) -> Result<(Vec<u8>, Vec<u8>)> {
        let n = self.field.bytes();
        let mut offset = self.initial_offset()?;
        let mut checksum = 0u128;
        let mut out = Vec::with_capacity(input.len());

        let mut blocks = input.chunks_exact(n);
        for (i, block) in (1u32..).zip(&mut blocks) {
            offset ^= self.l_at(i.trailing_zeros());
            let value = self.field.load(block);
            let result = if decrypting {
                let plain = self.field.decrypt(&self.cipher, value ^ offset)? ^ offset;
                checksum ^= plain;
                plain
            } else {
                checksum ^= value;
                self.field.encrypt(&self.cipher, value ^ offset)? ^ offset
            };
            out.extend_from_slice(&self.field.store(result));
        }

        let rest = blocks.remainder();
        if !rest.is_empty() {
            offset ^= *self.l_star;
            let pad = Zeroizing::new(self.field.store(self.field.encrypt(&self.cipher, offset)?));
            let start = out.len();
            out.extend(rest.iter().zip(pad.iter()).map(|(a, b)| a ^ b));
            let plain = if decrypting { &out[start..] } else { rest };
            checksum ^= self.field.load(plain) | pad_bit(&self.field, plain.len());
        }

        let tag = self
            .field
            .encrypt(&self.cipher, checksum ^ offset ^ *self.l_dollar)?
            ^ self.hash(aad)?;
        checksum.zeroize();
        Ok((out, self.field.store(tag)))
    }
}

/// Value of a big-endian byte string of at most 16 bytes
fn be_value(bytes: &[u8]) -> u128 {
    bytes.iter().fold(0u128, |acc, &b| (acc << 8) | b as u128)
}

/// The 0x80 marker following `len` bytes in a left-aligned block
fn pad_bit(field: &Field, len: usize) -> u128 {
    1u128 << (field.bits as usize - 8 * len - 1)
}

impl<C: BlockCipher> AeadMode for Ocb<C> {
    fn name(&self) -> &'static str {
        self.label
    }

    fn tag_size(&self) -> usize {
        self.tag_size
    }

    fn seal(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        let (mut out, tag) = self.process(plaintext, aad, false)?;
        out.extend_from_slice(&tag[..self.tag_size]);
        Ok(out)
    }

    fn open(&self, sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        if sealed.len() < self.tag_size {
            return Err(Error::AuthenticationFailed { context: "OCB" });
        }
        let (ciphertext, received) = sealed.split_at(sealed.len() - self.tag_size);

        let (mut plaintext, tag) = self.process(ciphertext, aad, true)?;
        if !ct_eq(&tag[..self.tag_size], received) {
            plaintext.zeroize();
            return Err(Error::AuthenticationFailed { context: "OCB" });
        }
        Ok(plaintext)
    }
}
