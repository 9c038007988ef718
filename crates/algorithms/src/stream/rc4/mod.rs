//! RC4 stream cipher
//!
//! Provided for decrypting legacy data only. RC4 has well-known keystream
//! biases and must not protect new data.

use cipherkit_api::{validate, Result, StreamCipher};
use cipherkit_params::utils::symmetric::{RC4_MAX_KEY_SIZE, RC4_MIN_KEY_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// RC4 keystream generator state
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Rc4 {
    s: [u8; 256],
    i: u8,
    j: u8,
}

impl Rc4 {
    /// Run the key-scheduling algorithm over `key` (1 to 256 bytes)
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::key_size_range("RC4", key.len(), RC4_MIN_KEY_SIZE, RC4_MAX_KEY_SIZE)?;

        let mut s = [0u8; 256];
        for (i, v) in s.iter_mut().enumerate() {
            *v = i as u8;
        }
        let mut j = 0u8;
        for i in 0..256 {
            j = j.wrapping_add(s[i]).wrapping_add(key[i % key.len()]);
            s.swap(i, j as usize);
        }
        Ok(Self { s, i: 0, j: 0 })
    }

    #[inline(always)]
    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.s[self.i as usize]);
        self.s.swap(self.i as usize, self.j as usize);
        let idx = self.s[self.i as usize].wrapping_add(self.s[self.j as usize]);
        self.s[idx as usize]
    }
}

impl StreamCipher for Rc4 {
    fn name(&self) -> &'static str {
        "RC4"
    }

    fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        for byte in data.iter_mut() {
            *byte ^= self.next_byte();
        }
        Ok(())
    }
}
