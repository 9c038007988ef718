//! Output Feedback (OFB) modes
//!
//! The register is repeatedly encrypted and its leading bytes are used as
//! keystream. With a full-block segment this is NIST SP 800-38A OFB; with an
//! 8-bit segment the register shifts left one byte per step and takes the
//! keystream byte on the right, which is the classic OFB-8 construction.
//! Encryption and decryption are the same operation.

use cipherkit_api::{validate, BlockCipher, Error, Result, StreamMode};
use cipherkit_internal::xor_in_place;
use zeroize::Zeroizing;

/// OFB with a configurable feedback width
pub struct Ofb<C: BlockCipher> {
    cipher: C,
    iv: Vec<u8>,
    segment: usize,
    label: &'static str,
}

/// Block-wide OFB; produces the same output as [`Ofb::new`]
pub type Nofb<C> = Ofb<C>;

impl<C: BlockCipher> Ofb<C> {
    /// Full-block OFB
    pub fn new(cipher: C, iv: &[u8]) -> Result<Self> {
        let bits = cipher.block_size() * 8;
        Self::with_segment_bits(cipher, iv, bits)
    }

    /// OFB with 8-bit feedback
    pub fn ofb8(cipher: C, iv: &[u8]) -> Result<Self> {
        Self::with_segment_bits(cipher, iv, 8)
    }

    /// OFB with an `s`-bit feedback width (a positive multiple of 8, at most
    /// the block width)
    pub fn with_segment_bits(cipher: C, iv: &[u8], segment_bits: usize) -> Result<Self> {
        let block_size = cipher.block_size();
        validate::iv_size("OFB", iv.len(), block_size)?;
        if segment_bits == 0 || segment_bits % 8 != 0 || segment_bits > block_size * 8 {
            return Err(Error::parameter(
                "OFB",
                format!(
                    "feedback width {} must be a multiple of 8 between 8 and {}",
                    segment_bits,
                    block_size * 8
                ),
            ));
        }
        let segment = segment_bits / 8;
        Ok(Self {
            cipher,
            iv: iv.to_vec(),
            segment,
            label: match segment {
                s if s == block_size => "OFB",
                1 => "OFB8",
                _ => "OFB-s",
            },
        })
    }

    fn process(&self, data: &[u8]) -> Result<Vec<u8>> {
        let s = self.segment;
        let block_size = self.iv.len();
        let mut out = data.to_vec();
        let mut register = Zeroizing::new(self.iv.clone());
        let mut keystream = Zeroizing::new(vec![0u8; block_size]);

        for chunk in out.chunks_mut(s) {
            keystream.copy_from_slice(&register);
            self.cipher.encrypt_block(&mut keystream)?;
            xor_in_place(chunk, &keystream[..s]);

            register.copy_within(s.., 0);
            register[block_size - s..].copy_from_slice(&keystream[..s]);
        }
        Ok(out)
    }
}

impl<C: BlockCipher> StreamMode for Ofb<C> {
    fn name(&self) -> &'static str {
        self.label
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.process(plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.process(ciphertext)
    }
}
