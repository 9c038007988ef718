//! Block cipher modes of operation
//!
//! Every mode wraps one [`BlockCipher`](cipherkit_api::BlockCipher) and one
//! IV. Calls are independent: each `encrypt`/`decrypt` starts again from the
//! stored IV, so a mode value can be reused for several messages under the
//! caller's nonce discipline.
//!
//! | Mode                 | Trait        | IV                          |
//! |----------------------|--------------|-----------------------------|
//! | [`Ecb`]              | `BlockMode`  | none                        |
//! | [`Cbc`]              | `BlockMode`  | one block                   |
//! | [`GostCbc`]          | `BlockMode`  | multiple of the block size  |
//! | [`Cfb`], [`Ncfb`]    | `StreamMode` | one block                   |
//! | [`Ofb`]              | `StreamMode` | one block                   |
//! | [`Ctr`]              | `StreamMode` | one block                   |
//! | [`Gofb`]             | `StreamMode` | 8 bytes, 64-bit ciphers     |
//! | [`GostCfb`]          | `StreamMode` | at least one block          |
//! | [`GostOfb`]          | `StreamMode` | multiple of the block size  |

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod gofb;
pub mod gost3413;
pub mod ofb;

pub use cbc::Cbc;
pub use cfb::{Cfb, Ncfb};
pub use ctr::Ctr;
pub use ecb::Ecb;
pub use gofb::Gofb;
pub use gost3413::{GostCbc, GostCfb, GostOfb};
pub use ofb::{Nofb, Ofb};
