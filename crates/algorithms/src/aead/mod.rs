//! Authenticated encryption modes over generic block ciphers
//!
//! Every mode here appends its tag to the ciphertext and verifies it in
//! constant time before returning plaintext.

pub mod eax;
pub mod mgm;
pub mod ocb;

pub use eax::Eax;
pub use mgm::Mgm;
pub use ocb::Ocb;
