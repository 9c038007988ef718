//! EAX authenticated encryption (Bellare, Rogaway and Wagner)
//!
//! EAX composes CTR encryption with three tweaked CMAC computations:
//!
//! ```text
//! N = OMAC^0(nonce)   H = OMAC^1(aad)   C = CTR_N(P)   T = N ^ H ^ OMAC^2(C)
//! ```
//!
//! where `OMAC^t(M) = CMAC([0; n-1] || t || M)`. Any 64 or 128-bit block
//! cipher may be used. The tag is truncated to the configured size.

use crate::block::modes::ctr::apply_keystream;
use crate::mac::Cmac;
use cipherkit_api::{validate, AeadMode, BlockCipher, Error, Result};
use cipherkit_internal::{ct_eq, xor_in_place};

/// EAX mode instance bound to one nonce
pub struct Eax<C: BlockCipher> {
    cmac: Cmac<C>,
    nonce: Vec<u8>,
    tag_size: usize,
}

impl<C: BlockCipher> Eax<C> {
    /// Creates an EAX instance
    ///
    /// The nonce must be between 1 byte and one block; the tag between
    /// 1 byte and one block.
    pub fn new(cipher: C, nonce: &[u8], tag_size: usize) -> Result<Self> {
        let block_size = cipher.block_size();
        validate::iv_size_range("EAX", nonce.len(), 1, block_size)?;
        if tag_size == 0 || tag_size > block_size {
            return Err(Error::parameter(
                "EAX",
                format!("tag size {} must be between 1 and {}", tag_size, block_size),
            ));
        }
        // Subkey derivation encrypts the zero block
        let cmac = Cmac::new(cipher)?;
        Ok(Self {
            cmac,
            nonce: nonce.to_vec(),
            tag_size,
        })
    }

    fn omac(&self, tweak: u8, data: &[u8]) -> Result<Vec<u8>> {
        let n = self.cmac.tag_size();
        let mut message = Vec::with_capacity(n + data.len());
        message.resize(n - 1, 0);
        message.push(tweak);
        message.extend_from_slice(data);
        self.cmac.compute(&message)
    }

    /// Returns `(N, N ^ H)`; the tag is `(N ^ H ^ OMAC^2(C))[..tag_size]`
    fn header_state(&self, aad: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
        let n = self.omac(0, &self.nonce)?;
        let mut partial = self.omac(1, aad)?;
        xor_in_place(&mut partial, &n);
        Ok((n, partial))
    }

    fn tag(&self, partial: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut tag = self.omac(2, ciphertext)?;
        xor_in_place(&mut tag, partial);
        tag.truncate(self.tag_size);
        Ok(tag)
    }
}

impl<C: BlockCipher> AeadMode for Eax<C> {
    fn name(&self) -> &'static str {
        "EAX"
    }

    fn tag_size(&self) -> usize {
        self.tag_size
    }

    fn seal(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        let (counter, partial) = self.header_state(aad)?;
        let mut out = apply_keystream(self.cmac.cipher(), &counter, plaintext)?;
        let tag = self.tag(&partial, &out)?;
        out.extend_from_slice(&tag);
        Ok(out)
    }

    fn open(&self, sealed: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        if sealed.len() < self.tag_size {
            return Err(Error::AuthenticationFailed { context: "EAX" });
        }
        let (ciphertext, received) = sealed.split_at(sealed.len() - self.tag_size);

        let (counter, partial) = self.header_state(aad)?;
        let expected = self.tag(&partial, ciphertext)?;
        validate::authentication(ct_eq(&expected, received), "EAX")?;

        apply_keystream(self.cmac.cipher(), &counter, ciphertext)
    }
}
