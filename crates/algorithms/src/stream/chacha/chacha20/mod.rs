//! ChaCha20 stream cipher implementation
//!
//! This module implements the ChaCha20 stream cipher as defined in RFC 8439
//! (32-bit block counter, 96-bit nonce).

use byteorder::{ByteOrder, LittleEndian};
use cipherkit_api::{validate, Result, StreamCipher};
use cipherkit_params::utils::symmetric::{
    CHACHA20_BLOCK_SIZE, CHACHA20_KEY_SIZE, CHACHA20_NONCE_SIZE,
};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// ChaCha20 stream cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ChaCha20 {
    /// Constants, key, initial counter and nonce
    state: [u32; 16],
    /// Keystream buffer
    buffer: [u8; CHACHA20_BLOCK_SIZE],
    /// Current position in the buffer
    position: usize,
    /// Current block counter
    counter: u32,
}

impl ChaCha20 {
    /// Creates a new ChaCha20 instance starting at block `counter`
    pub fn new(key: &[u8], nonce: &[u8], counter: u32) -> Result<Self> {
        validate::key_size("ChaCha20", key.len(), &[CHACHA20_KEY_SIZE])?;
        validate::iv_size("ChaCha20", nonce.len(), CHACHA20_NONCE_SIZE)?;

        let mut state = [0u32; 16];

        // "expand 32-byte k" in little-endian
        state[0] = 0x61707865;
        state[1] = 0x3320646e;
        state[2] = 0x79622d32;
        state[3] = 0x6b206574;

        LittleEndian::read_u32_into(key, &mut state[4..12]);
        state[12] = counter;
        LittleEndian::read_u32_into(nonce, &mut state[13..16]);

        Ok(Self {
            state,
            buffer: [0; CHACHA20_BLOCK_SIZE],
            position: CHACHA20_BLOCK_SIZE,
            counter,
        })
    }

    /// The ChaCha20 quarter round function
    #[inline]
    fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
        state[a] = state[a].wrapping_add(state[b]);
        state[d] ^= state[a];
        state[d] = state[d].rotate_left(16);

        state[c] = state[c].wrapping_add(state[d]);
        state[b] ^= state[c];
        state[b] = state[b].rotate_left(12);

        state[a] = state[a].wrapping_add(state[b]);
        state[d] ^= state[a];
        state[d] = state[d].rotate_left(8);

        state[c] = state[c].wrapping_add(state[d]);
        state[b] ^= state[c];
        state[b] = state[b].rotate_left(7);
    }

    /// Generate a block of keystream
    fn generate_keystream(&mut self) {
        let mut input = Zeroizing::new(self.state);
        input[12] = self.counter;
        let mut working = Zeroizing::new(*input);

        // 10 column rounds, 10 diagonal rounds
        for _ in 0..10 {
            Self::quarter_round(&mut working, 0, 4, 8, 12);
            Self::quarter_round(&mut working, 1, 5, 9, 13);
            Self::quarter_round(&mut working, 2, 6, 10, 14);
            Self::quarter_round(&mut working, 3, 7, 11, 15);

            Self::quarter_round(&mut working, 0, 5, 10, 15);
            Self::quarter_round(&mut working, 1, 6, 11, 12);
            Self::quarter_round(&mut working, 2, 7, 8, 13);
            Self::quarter_round(&mut working, 3, 4, 9, 14);
        }

        for i in 0..16 {
            let word = working[i].wrapping_add(input[i]);
            LittleEndian::write_u32(&mut self.buffer[i * 4..], word);
        }

        self.position = 0;
        self.counter = self.counter.wrapping_add(1);
    }

    /// Encrypt or decrypt data in place
    pub fn process(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            if self.position >= CHACHA20_BLOCK_SIZE {
                self.generate_keystream();
            }
            *byte ^= self.buffer[self.position];
            self.position += 1;
        }
    }

    /// Seek to the start of block `block`
    pub fn seek(&mut self, block: u32) {
        self.counter = block;
        self.position = CHACHA20_BLOCK_SIZE;
        self.buffer.zeroize();
    }

    /// Rewind to the initial counter with the same key and nonce
    pub fn reset(&mut self) {
        self.seek(self.state[12]);
    }
}

impl StreamCipher for ChaCha20 {
    fn name(&self) -> &'static str {
        "ChaCha20"
    }

    fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        self.process(data);
        Ok(())
    }
}
