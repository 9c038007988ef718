//! Fluent entry point
//!
//! [`Crypto`] collects the input, key, IV, configuration and algorithm
//! selection, then runs the [`Engine`] once per `encrypt`/`decrypt` call.
//! The first failure anywhere in the chain (a bad hex string, a mistyped
//! config value) is remembered and returned by the final call as an
//! [`Output`] error.
//!
//! ```ignore
//! let sealed = Crypto::from_string("test-pass")
//!     .with_key_string("dfertf12dfertf12")
//!     .with_iv_string("dfertf12dfertf12")
//!     .aes()
//!     .cfb()
//!     .pkcs7_padding()
//!     .encrypt()
//!     .to_base64_string();
//! ```

use crate::encoding::{decode_base64, decode_hex};
use crate::engine::{Engine, Selection};
use crate::options::{ConfigValue, Options};
use crate::output::Output;
use crate::registry::{default_registry, Mode, Multiple, Padding, Registry};
use cipherkit_algorithms::Pkcs1BlockType;
use cipherkit_api::{Error, Result};
use std::sync::Arc;
use zeroize::Zeroizing;

/// Generates one selection shortcut per built-in token
macro_rules! shortcuts {
    ($field:ident: $token:ident { $( $(#[$meta:meta])* $method:ident => $konst:ident ),* $(,)? }) => {
        $(
            $(#[$meta])*
            pub fn $method(mut self) -> Self {
                self.$field = Some($token::$konst);
                self
            }
        )*
    };
}

/// Fluent encrypt/decrypt builder
#[derive(Clone, Default)]
pub struct Crypto {
    data: Zeroizing<Vec<u8>>,
    options: Options,
    multiple: Option<Multiple>,
    mode: Option<Mode>,
    padding: Option<Padding>,
    registry: Option<Arc<Registry>>,
    error: Option<Error>,
}

impl Crypto {
    /// Start from raw bytes
    pub fn from_bytes(data: impl AsRef<[u8]>) -> Self {
        Self {
            data: Zeroizing::new(data.as_ref().to_vec()),
            ..Self::default()
        }
    }

    /// Start from UTF-8 text
    pub fn from_string(data: &str) -> Self {
        Self::from_bytes(data.as_bytes())
    }

    /// Start from a hex string
    pub fn from_hex_string(data: &str) -> Self {
        Self::from_decoded(decode_hex(data))
    }

    /// Start from a standard base64 string
    pub fn from_base64_string(data: &str) -> Self {
        Self::from_decoded(decode_base64(data))
    }

    fn from_decoded(decoded: Result<Vec<u8>>) -> Self {
        match decoded {
            Ok(bytes) => Self::from_bytes(bytes),
            Err(err) => Self::default().fail(err),
        }
    }

    fn fail(mut self, err: Error) -> Self {
        if self.error.is_none() {
            self.error = Some(err);
        }
        self
    }

    /// Set the key from raw bytes
    pub fn with_key(mut self, key: impl AsRef<[u8]>) -> Self {
        self.options.set_key(key);
        self
    }

    /// Set the key from UTF-8 text
    pub fn with_key_string(self, key: &str) -> Self {
        self.with_key(key.as_bytes())
    }

    /// Set the key from a hex string
    pub fn with_key_hex(self, key: &str) -> Self {
        match decode_hex(key) {
            Ok(bytes) => self.with_key(Zeroizing::new(bytes).as_slice()),
            Err(err) => self.fail(err),
        }
    }

    /// Set the IV or nonce from raw bytes
    pub fn with_iv(mut self, iv: impl AsRef<[u8]>) -> Self {
        self.options.set_iv(iv);
        self
    }

    /// Set the IV or nonce from UTF-8 text
    pub fn with_iv_string(self, iv: &str) -> Self {
        self.with_iv(iv.as_bytes())
    }

    /// Set the IV or nonce from a hex string
    pub fn with_iv_hex(self, iv: &str) -> Self {
        match decode_hex(iv) {
            Ok(bytes) => self.with_iv(bytes),
            Err(err) => self.fail(err),
        }
    }

    /// Associated data for AEAD modes
    pub fn with_additional(mut self, aad: impl AsRef<[u8]>) -> Self {
        self.options.config_mut().additional = Some(aad.as_ref().to_vec());
        self
    }

    /// AEAD tag length in bytes
    pub fn with_tag_size(mut self, tag_size: usize) -> Self {
        self.options.config_mut().tag_size = Some(tag_size);
        self
    }

    /// Segment width in bits for CFB-N and GOST CFB
    pub fn with_bit_block_size(mut self, bits: usize) -> Self {
        self.options.config_mut().bit_block_size = Some(bits);
        self
    }

    /// PKCS#1 block type
    pub fn with_pkcs1_block_type(mut self, block_type: Pkcs1BlockType) -> Self {
        self.options.config_mut().pkcs1_block_type = Some(block_type);
        self
    }

    /// Set any config key; see [`Config::set`](crate::options::Config::set)
    pub fn with_config(mut self, key: &str, value: impl Into<ConfigValue>) -> Self {
        match self.options.config_mut().set(key, value) {
            Ok(()) => self,
            Err(err) => self.fail(err),
        }
    }

    /// Replace key, IV and configuration at once
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Resolve tokens against `registry` instead of the process default
    pub fn with_registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Select a cipher family
    pub fn multiple(mut self, multiple: Multiple) -> Self {
        self.multiple = Some(multiple);
        self
    }

    /// Select a mode
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Select a padding
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    shortcuts!(multiple: Multiple {
        /// AES
        aes => AES,
        /// Kuznyechik
        kuznyechik => KUZNYECHIK,
        /// Magma
        magma => MAGMA,
        /// SM4
        sm4 => SM4,
        /// DES
        des => DES,
        /// Triple-DES
        triple_des => TRIPLE_DES,
        /// ChaCha20
        chacha20 => CHACHA20,
        /// RC4
        rc4 => RC4,
    });

    shortcuts!(mode: Mode {
        /// ECB
        ecb => ECB,
        /// CBC
        cbc => CBC,
        /// Full-block CFB
        cfb => CFB,
        /// CFB-8
        cfb8 => CFB8,
        /// CFB-16
        cfb16 => CFB16,
        /// CFB-32
        cfb32 => CFB32,
        /// CFB-64
        cfb64 => CFB64,
        /// CFB-128
        cfb128 => CFB128,
        /// CFB with the segment width from `bit_block_size`
        cfbn => CFBN,
        /// Full-block OFB
        ofb => OFB,
        /// OFB-8
        ofb8 => OFB8,
        /// n-bit OFB
        nofb => NOFB,
        /// n-bit CFB with plaintext feedback
        ncfb => NCFB,
        /// CTR
        ctr => CTR,
        /// GOST 28147-89 gamma
        gofb => GOFB,
        /// GOST R 34.13-2015 CBC
        gost_cbc => GOST_CBC,
        /// GOST R 34.13-2015 CFB
        gost_cfb => GOST_CFB,
        /// GOST R 34.13-2015 OFB
        gost_ofb => GOST_OFB,
        /// EAX
        eax => EAX,
        /// OCB
        ocb => OCB,
        /// OCB3
        ocb3 => OCB3,
        /// MGM
        mgm => MGM,
    });

    shortcuts!(padding: Padding {
        /// No padding
        no_padding => NONE,
        /// Zero padding
        zero_padding => ZERO,
        /// PKCS#1 block-type padding
        pkcs1_padding => PKCS1,
        /// PKCS#5
        pkcs5_padding => PKCS5,
        /// PKCS#7
        pkcs7_padding => PKCS7,
        /// ANSI X9.23
        x923_padding => X923,
        /// ISO 10126
        iso10126_padding => ISO10126,
        /// ISO/IEC 7816-4
        iso7816_4_padding => ISO7816_4,
    });

    /// Current key, IV and configuration
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Encrypt the input
    pub fn encrypt(&self) -> Output {
        self.run(|engine, selection| engine.encrypt(selection, &self.data, &self.options))
    }

    /// Decrypt the input
    pub fn decrypt(&self) -> Output {
        self.run(|engine, selection| engine.decrypt(selection, &self.data, &self.options))
    }

    fn run<F>(&self, op: F) -> Output
    where
        F: FnOnce(&Engine, &Selection) -> Result<Vec<u8>>,
    {
        if let Some(err) = &self.error {
            return Output::failure(err.clone());
        }
        let result = self.selection().and_then(|selection| {
            let registry = self.registry.clone().unwrap_or_else(default_registry);
            op(&Engine::new(registry), &selection)
        });
        Output::from(result)
    }

    fn selection(&self) -> Result<Selection> {
        let multiple = self
            .multiple
            .ok_or_else(|| Error::parameter("Crypto", "no cipher selected"))?;
        Ok(Selection {
            multiple,
            mode: self.mode,
            padding: self.padding,
        })
    }
}
