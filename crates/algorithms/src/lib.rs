//! Symmetric primitives for the cipherkit engine
//!
//! This crate provides the building blocks the composition engine combines
//! at runtime:
//!
//! - [`block`]: AES, Kuznyechik, Magma, SM4, DES and Triple-DES, plus the
//!   classic and GOST modes of operation in [`block::modes`]
//! - [`stream`]: ChaCha20 and RC4
//! - [`aead`]: EAX, OCB/OCB3 and MGM over any 64 or 128-bit block cipher
//! - [`mac`]: CMAC
//! - [`padding`]: PKCS#7/#5, PKCS#1, zero, ANSI X9.23, ISO 10126, ISO 7816-4
//!
//! # Security Features
//!
//! - Key schedules and keystream scratch are zeroized on drop
//! - Table-free S-boxes for AES; bitwise GF(2^n) arithmetic for CMAC, OCB
//!   and MGM
//! - Tags and padding are checked with constant-time comparisons

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod aead;
pub mod block;
pub mod mac;
pub mod padding;
pub mod stream;

pub(crate) mod gf;

pub use block::modes;

pub use aead::{Eax, Mgm, Ocb};
pub use block::modes::{
    Cbc, Cfb, Ctr, Ecb, Gofb, GostCbc, GostCfb, GostOfb, Ncfb, Nofb, Ofb,
};
pub use block::{Aes, Des, Kuznyechik, Magma, Sm4, TripleDes};
pub use mac::Cmac;
pub use padding::{
    AnsiX923, Iso10126, Iso7816, NoPadding, Pkcs1, Pkcs1BlockType, Pkcs5, Pkcs7, ZeroPadding,
};
pub use stream::{ChaCha20, Rc4};

pub use cipherkit_api::{
    AeadMode, BlockCipher, BlockMode, CipherAlgorithm, Error, KeyInit, PaddingScheme, Result,
    StreamCipher, StreamMode,
};
