//! CMAC (OMAC1) as in NIST SP 800-38B and GOST R 34.13-2015 section 5.6
//!
//! Works over any block cipher with 64 or 128-bit blocks. The tag is the full
//! block; callers truncate as needed. EAX reaches in through
//! [`Cmac::cipher`] to reuse the keyed cipher for its CTR layer.

use crate::gf::Field;
use cipherkit_api::{BlockCipher, Result};
use cipherkit_internal::xor_in_place;
use zeroize::Zeroizing;

/// CMAC over a keyed block cipher
pub struct Cmac<C: BlockCipher> {
    cipher: C,
    k1: Zeroizing<Vec<u8>>,
    k2: Zeroizing<Vec<u8>>,
}

impl<C: BlockCipher> Cmac<C> {
    /// Derive the subkeys K1 = dbl(E(0)) and K2 = dbl(K1)
    pub fn new(cipher: C) -> Result<Self> {
        let field = Field::for_block_size("CMAC", cipher.block_size())?;
        let l = field.encrypt(&cipher, 0)?;
        let k1 = field.dbl(l);
        let k2 = field.dbl(k1);
        Ok(Self {
            cipher,
            k1: Zeroizing::new(field.store(k1)),
            k2: Zeroizing::new(field.store(k2)),
        })
    }

    /// The wrapped cipher
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// Tag length in bytes (one block)
    pub fn tag_size(&self) -> usize {
        self.k1.len()
    }

    /// Compute the CMAC of `message`
    pub fn compute(&self, message: &[u8]) -> Result<Vec<u8>> {
        let n = self.k1.len();
        let last_full = !message.is_empty() && message.len() % n == 0;
        let split = if last_full {
            message.len() - n
        } else {
            message.len() - message.len() % n
        };
        let (body, tail) = message.split_at(split);

        let mut state = vec![0u8; n];
        for block in body.chunks(n) {
            xor_in_place(&mut state, block);
            self.cipher.encrypt_block(&mut state)?;
        }

        let mut last = Zeroizing::new(vec![0u8; n]);
        last[..tail.len()].copy_from_slice(tail);
        if last_full {
            xor_in_place(&mut last, &self.k1);
        } else {
            last[tail.len()] = 0x80;
            xor_in_place(&mut last, &self.k2);
        }
        xor_in_place(&mut state, &last);
        self.cipher.encrypt_block(&mut state)?;
        Ok(state)
    }
}
