//! Catalog of valid algorithm combinations
//!
//! Property tests iterate this list instead of hard-coding selections, so a
//! mode added to the default registry only needs one more line here.

use cipherkit_symmetric::{default_registry, Crypto, Error, Mode, Multiple, Padding};

/// How a combination consumes its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Block mode; input is padded to the block size
    Block,
    /// Block cipher driven as a keystream; any input length
    Stream,
    /// Authenticated mode; output carries a tag
    Aead,
    /// Native stream cipher; mode and padding are not used
    StreamCipher,
}

/// One selection plus the material it needs
#[derive(Debug, Clone, Copy)]
pub struct Combo {
    pub multiple: Multiple,
    pub mode: Option<Mode>,
    pub padding: Option<Padding>,
    pub kind: Kind,
    pub key_len: usize,
    pub iv_len: usize,
    /// Cipher block size, 1 for stream ciphers
    pub block_size: usize,
}

/// Longest IV any combination asks for
pub const MAX_IV_LEN: usize = 32;

const BLOCK_CIPHERS: &[(Multiple, usize, usize)] = &[
    (Multiple::AES, 16, 16),
    (Multiple::KUZNYECHIK, 32, 16),
    (Multiple::MAGMA, 32, 8),
    (Multiple::SM4, 16, 16),
    (Multiple::DES, 8, 8),
    (Multiple::TRIPLE_DES, 24, 8),
];

impl Combo {
    fn block(multiple: Multiple, key_len: usize, block_size: usize, mode: Mode) -> Option<Self> {
        let n = block_size;
        let (kind, iv_len) = match mode {
            Mode::ECB => (Kind::Block, 0),
            Mode::CBC => (Kind::Block, n),
            Mode::GOST_CBC => (Kind::Block, 2 * n),
            Mode::CFB128 if n != 16 => return None,
            Mode::CFB
            | Mode::CFB8
            | Mode::CFB16
            | Mode::CFB32
            | Mode::CFB64
            | Mode::CFB128
            | Mode::CFBN
            | Mode::OFB
            | Mode::OFB8
            | Mode::NOFB
            | Mode::NCFB
            | Mode::CTR => (Kind::Stream, n),
            Mode::GOFB if n == 8 => (Kind::Stream, 8),
            Mode::GOST_CFB | Mode::GOST_OFB => (Kind::Stream, 2 * n),
            Mode::EAX | Mode::MGM => (Kind::Aead, n),
            Mode::OCB if n == 16 => (Kind::Aead, 12),
            Mode::OCB3 => (Kind::Aead, n - 1),
            _ => return None,
        };
        let padding = match kind {
            Kind::Block => Padding::PKCS7,
            _ => Padding::NONE,
        };
        Some(Self {
            multiple,
            mode: Some(mode),
            padding: Some(padding),
            kind,
            key_len,
            iv_len,
            block_size,
        })
    }

    fn stream_cipher(multiple: Multiple, key_len: usize, iv_len: usize) -> Self {
        Self {
            multiple,
            mode: None,
            padding: None,
            kind: Kind::StreamCipher,
            key_len,
            iv_len,
            block_size: 1,
        }
    }

    /// Human-readable label from the default registry names
    pub fn label(&self) -> String {
        let registry = default_registry();
        let name = |r: Result<String, Error>| r.unwrap_or_else(|_| "?".to_string());
        let mut label = name(registry.multiple_name(self.multiple));
        if let Some(mode) = self.mode {
            label.push('/');
            label.push_str(&name(registry.mode_name(mode)));
        }
        if let Some(padding) = self.padding {
            label.push('/');
            label.push_str(&name(registry.padding_name(padding)));
        }
        label
    }

    /// First `iv_len` bytes of `seed`, adjusted to satisfy the mode's rules
    pub fn nonce(&self, seed: &[u8; MAX_IV_LEN]) -> Vec<u8> {
        let mut iv = seed[..self.iv_len].to_vec();
        if self.mode == Some(Mode::MGM) {
            iv[0] &= 0x7F;
        }
        iv
    }

    /// Builder preloaded with this selection, the key and the IV
    pub fn crypto(&self, data: &[u8], key: &[u8], iv_seed: &[u8; MAX_IV_LEN]) -> Crypto {
        let mut crypto = Crypto::from_bytes(data)
            .with_key(&key[..self.key_len])
            .multiple(self.multiple);
        if self.iv_len > 0 {
            crypto = crypto.with_iv(self.nonce(iv_seed));
        }
        if let Some(mode) = self.mode {
            crypto = crypto.mode(mode);
        }
        if let Some(padding) = self.padding {
            crypto = crypto.padding(padding);
        }
        crypto
    }
}

/// Every valid combination of the built-in algorithms
pub fn all() -> Vec<Combo> {
    let modes = default_registry().modes();
    let mut combos: Vec<Combo> = BLOCK_CIPHERS
        .iter()
        .flat_map(|&(multiple, key_len, block_size)| {
            modes
                .iter()
                .filter_map(move |&mode| Combo::block(multiple, key_len, block_size, mode))
        })
        .collect();
    combos.push(Combo::stream_cipher(Multiple::CHACHA20, 32, 12));
    combos.push(Combo::stream_cipher(Multiple::RC4, 16, 0));
    combos
}

/// Combinations of a given kind
pub fn of_kind(kind: Kind) -> Vec<Combo> {
    all().into_iter().filter(|c| c.kind == kind).collect()
}
