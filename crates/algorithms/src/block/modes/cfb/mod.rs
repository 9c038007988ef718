//! Cipher Feedback (CFB) modes
//!
//! [`Cfb`] is the NIST SP 800-38A segment mode: the shift register is
//! encrypted, the leading `s` bits of the result mask one plaintext segment,
//! and the resulting ciphertext segment is shifted into the register. The
//! segment size is any whole number of bytes up to the block size, so
//! CFB-8, CFB-16, CFB-32, CFB-64 and full-block CFB share one type.
//!
//! [`Ncfb`] is the full-block variant that feeds the *plaintext* block back
//! into the register after each complete block.
//!
//! A trailing partial segment is processed with the leading bytes of the
//! keystream, so neither mode needs padding.

use cipherkit_api::{validate, BlockCipher, Error, Result, StreamMode};
use cipherkit_internal::xor_in_place;
use zeroize::Zeroizing;

/// CFB with a configurable segment size
pub struct Cfb<C: BlockCipher> {
    cipher: C,
    iv: Vec<u8>,
    segment: usize,
}

impl<C: BlockCipher> Cfb<C> {
    /// Full-block CFB (segment size equals the block size)
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self> {
        let bits = cipher.block_size() * 8;
        Self::with_segment_bits(cipher, iv, bits)
    }

    /// CFB with an `s`-bit segment
    ///
    /// `segment_bits` must be a positive multiple of 8 no wider than the
    /// block; other values yield `InvalidParameter`.
    pub fn with_segment_bits(cipher: C, iv: &[u8], segment_bits: usize) -> Result<Self> {
        let block_size = cipher.block_size();
        validate::iv_size("CFB", iv.len(), block_size)?;
        if segment_bits == 0 || segment_bits % 8 != 0 {
            return Err(Error::parameter(
                "CFB",
                format!("segment size {} is not a positive multiple of 8 bits", segment_bits),
            ));
        }
        if segment_bits > block_size * 8 {
            return Err(Error::parameter(
                "CFB",
                format!(
                    "segment size {} exceeds the {}-bit block",
                    segment_bits,
                    block_size * 8
                ),
            ));
        }
        Ok(Self {
            cipher,
            iv: iv.to_vec(),
            segment: segment_bits / 8,
        })
    }

    /// Segment size in bits
    pub fn segment_bits(&self) -> usize {
        self.segment * 8
    }

    fn process(&self, data: &[u8], decrypting: bool) -> Result<Vec<u8>> {
        let s = self.segment;
        let block_size = self.iv.len();
        let mut out = Vec::with_capacity(data.len());
        let mut register = Zeroizing::new(self.iv.clone());
        let mut keystream = Zeroizing::new(vec![0u8; block_size]);

        for chunk in data.chunks(s) {
            keystream.copy_from_slice(&register);
            self.cipher.encrypt_block(&mut keystream)?;

            let start = out.len();
            out.extend_from_slice(chunk);
            xor_in_place(&mut out[start..], &keystream);

            if chunk.len() == s {
                let feedback = if decrypting { chunk } else { &out[start..] };
                register.copy_within(s.., 0);
                register[block_size - s..].copy_from_slice(feedback);
            }
        }
        Ok(out)
    }
}

impl<C: BlockCipher> StreamMode for Cfb<C> {
    fn name(&self) -> &'static str {
        "CFB"
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.process(plaintext, false)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.process(ciphertext, true)
    }
}

/// Full-block CFB with plaintext feedback
pub struct Ncfb<C: BlockCipher> {
    cipher: C,
    iv: Vec<u8>,
}

impl<C: BlockCipher> Ncfb<C> {
    /// Creates an NCFB instance; the IV must be one block
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self> {
        validate::iv_size("NCFB", iv.len(), cipher.block_size())?;
        Ok(Self {
            cipher,
            iv: iv.to_vec(),
        })
    }

    fn process(&self, data: &[u8], decrypting: bool) -> Result<Vec<u8>> {
        let block_size = self.iv.len();
        let mut out = Vec::with_capacity(data.len());
        let mut register = Zeroizing::new(self.iv.clone());

        for chunk in data.chunks(block_size) {
            let mut keystream = Zeroizing::new(register.to_vec());
            self.cipher.encrypt_block(&mut keystream)?;

            let start = out.len();
            out.extend_from_slice(chunk);
            xor_in_place(&mut out[start..], &keystream);

            if chunk.len() == block_size {
                let plaintext = if decrypting { &out[start..] } else { chunk };
                register.copy_from_slice(plaintext);
            }
        }
        Ok(out)
    }
}

impl<C: BlockCipher> StreamMode for Ncfb<C> {
    fn name(&self) -> &'static str {
        "NCFB"
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.process(plaintext, false)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.process(ciphertext, true)
    }
}
