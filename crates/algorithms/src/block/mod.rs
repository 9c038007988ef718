//! Block cipher primitives and their classic modes of operation
//!
//! Every cipher implements [`BlockCipher`](cipherkit_api::BlockCipher),
//! [`CipherAlgorithm`](cipherkit_api::CipherAlgorithm) and
//! [`KeyInit`](cipherkit_api::KeyInit).

pub mod aes;
pub mod des;
pub mod kuznyechik;
pub mod magma;
pub mod modes;
pub mod sm4;

pub use aes::Aes;
pub use des::{Des, TripleDes};
pub use kuznyechik::Kuznyechik;
pub use magma::Magma;
pub use sm4::Sm4;
