//! GOST R 34.13-2015 feedback modes with a wide shift register
//!
//! These modes carry an `m`-byte register that may be several blocks long.
//! The leading block of the register drives the cipher and the newest
//! ciphertext (or keystream) block is appended on the right:
//!
//! - [`GostCbc`]: `C_i = E(P_i ^ MSB_n(R))`, `R = LSB_{m-n}(R) || C_i`
//! - [`GostCfb`]: `C_i = P_i ^ MSB_s(E(MSB_n(R)))`, `R = LSB_{m-s}(R) || C_i`
//! - [`GostOfb`]: `Y_i = E(MSB_n(R))`, `C_i = P_i ^ Y_i`, `R = LSB_{m-n}(R) || Y_i`
//!
//! With an IV of exactly one block these reduce to the NIST CBC, CFB and OFB
//! constructions.

use cipherkit_api::{validate, BlockCipher, BlockMode, Error, Result, StreamMode};
use cipherkit_internal::xor_in_place;
use zeroize::Zeroizing;

fn check_register(context: &'static str, iv: &[u8], block_size: usize, whole_blocks: bool) -> Result<()> {
    let ok = iv.len() >= block_size && (!whole_blocks || iv.len() % block_size == 0);
    if !ok {
        return Err(Error::InvalidIvSize {
            context,
            actual: iv.len(),
        });
    }
    Ok(())
}

/// Shift `register` left by `incoming.len()` bytes and append `incoming`
#[inline]
fn shift_in(register: &mut [u8], incoming: &[u8]) {
    let keep = register.len() - incoming.len();
    register.copy_within(incoming.len().., 0);
    register[keep..].copy_from_slice(incoming);
}

/// GOST CBC with an IV of `z` blocks
pub struct GostCbc<C: BlockCipher> {
    cipher: C,
    iv: Vec<u8>,
}

impl<C: BlockCipher> GostCbc<C> {
    /// The IV length must be a positive multiple of the block size
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self> {
        check_register("GOST CBC", iv, cipher.block_size(), true)?;
        Ok(Self {
            cipher,
            iv: iv.to_vec(),
        })
    }
}

impl<C: BlockCipher> BlockMode for GostCbc<C> {
    fn name(&self) -> &'static str {
        "GOST CBC"
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let n = self.cipher.block_size();
        validate::block_aligned("GOST CBC plaintext", plaintext.len(), n)?;

        let mut register = Zeroizing::new(self.iv.clone());
        let mut out = Vec::with_capacity(plaintext.len());
        for chunk in plaintext.chunks(n) {
            let start = out.len();
            out.extend_from_slice(chunk);
            let block = &mut out[start..];
            xor_in_place(block, &register[..n]);
            self.cipher.encrypt_block(block)?;
            shift_in(&mut register, block);
        }
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let n = self.cipher.block_size();
        validate::block_aligned("GOST CBC ciphertext", ciphertext.len(), n)?;

        let mut register = Zeroizing::new(self.iv.clone());
        let mut out = Vec::with_capacity(ciphertext.len());
        for chunk in ciphertext.chunks(n) {
            let start = out.len();
            out.extend_from_slice(chunk);
            let block = &mut out[start..];
            self.cipher.decrypt_block(block)?;
            xor_in_place(block, &register[..n]);
            shift_in(&mut register, chunk);
        }
        Ok(out)
    }
}

/// GOST CFB with an `m`-byte register and `s`-byte segments
pub struct GostCfb<C: BlockCipher> {
    cipher: C,
    iv: Vec<u8>,
    segment: usize,
}

impl<C: BlockCipher> GostCfb<C> {
    /// Full-block segments
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self> {
        let bits = cipher.block_size() * 8;
        Self::with_segment_bits(cipher, iv, bits)
    }

    /// `segment_bits` must be a positive multiple of 8 no wider than the
    /// block; the IV must be at least one block
    pub fn with_segment_bits(cipher: C, iv: &[u8], segment_bits: usize) -> Result<Self> {
        let n = cipher.block_size();
        check_register("GOST CFB", iv, n, false)?;
        if segment_bits == 0 || segment_bits % 8 != 0 || segment_bits > n * 8 {
            return Err(Error::parameter(
                "GOST CFB",
                format!(
                    "segment size {} must be a multiple of 8 between 8 and {}",
                    segment_bits,
                    n * 8
                ),
            ));
        }
        Ok(Self {
            cipher,
            iv: iv.to_vec(),
            segment: segment_bits / 8,
        })
    }

    fn process(&self, data: &[u8], decrypting: bool) -> Result<Vec<u8>> {
        let n = self.cipher.block_size();
        let s = self.segment;
        let mut register = Zeroizing::new(self.iv.clone());
        let mut keystream = Zeroizing::new(vec![0u8; n]);
        let mut out = Vec::with_capacity(data.len());

        for chunk in data.chunks(s) {
            keystream.copy_from_slice(&register[..n]);
            self.cipher.encrypt_block(&mut keystream)?;

            let start = out.len();
            out.extend_from_slice(chunk);
            xor_in_place(&mut out[start..], &keystream);

            if chunk.len() == s {
                let feedback = if decrypting { chunk } else { &out[start..] };
                shift_in(&mut register, feedback);
            }
        }
        Ok(out)
    }
}

impl<C: BlockCipher> StreamMode for GostCfb<C> {
    fn name(&self) -> &'static str {
        "GOST CFB"
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.process(plaintext, false)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.process(ciphertext, true)
    }
}

/// GOST OFB with an IV of `z` blocks
pub struct GostOfb<C: BlockCipher> {
    cipher: C,
    iv: Vec<u8>,
}

impl<C: BlockCipher> GostOfb<C> {
    /// The IV length must be a positive multiple of the block size
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self> {
        check_register("GOST OFB", iv, cipher.block_size(), true)?;
        Ok(Self {
            cipher,
            iv: iv.to_vec(),
        })
    }

    fn process(&self, data: &[u8]) -> Result<Vec<u8>> {
        let n = self.cipher.block_size();
        let mut register = Zeroizing::new(self.iv.clone());
        let mut keystream = Zeroizing::new(vec![0u8; n]);
        let mut out = data.to_vec();

        for chunk in out.chunks_mut(n) {
            keystream.copy_from_slice(&register[..n]);
            self.cipher.encrypt_block(&mut keystream)?;
            xor_in_place(chunk, &keystream);
            shift_in(&mut register, &keystream);
        }
        Ok(out)
    }
}

impl<C: BlockCipher> StreamMode for GostOfb<C> {
    fn name(&self) -> &'static str {
        "GOST OFB"
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.process(plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.process(ciphertext)
    }
}
