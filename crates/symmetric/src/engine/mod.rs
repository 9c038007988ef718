//! Pipeline execution
//!
//! [`Engine::encrypt`] resolves the selected cipher, mode and padding from
//! its registry and runs them in a fixed order:
//!
//! 1. the cipher factory validates the key
//! 2. the mode factory validates the IV or nonce
//! 3. block and stream modes pad the plaintext (AEAD modes never pad; a
//!    stream mode skips the step when the padding is `NONE`)
//! 4. the mode encrypts
//!
//! Decryption runs the same resolution and then reverses steps 3 and 4.
//! A stream-cipher family bypasses modes and paddings entirely.

use crate::options::Options;
use crate::registry::{
    default_registry, Mode, ModeInstance, Multiple, MultipleEntry, Padding, Registry,
};
use cipherkit_api::{PaddingScheme, Result};
use std::sync::Arc;
use tracing::{debug, warn};
use zeroize::Zeroizing;

/// A cipher family plus optional mode and padding overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Cipher family
    pub multiple: Multiple,
    /// Mode; the family default when `None`
    pub mode: Option<Mode>,
    /// Padding; the family default when `None`
    pub padding: Option<Padding>,
}

impl Selection {
    /// Select a cipher family with its default mode and padding
    pub fn new(multiple: Multiple) -> Self {
        Self {
            multiple,
            mode: None,
            padding: None,
        }
    }

    /// Override the mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Override the padding
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }
}

impl From<Multiple> for Selection {
    fn from(multiple: Multiple) -> Self {
        Selection::new(multiple)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}

/// Runs selections against a registry
#[derive(Debug, Clone)]
pub struct Engine {
    registry: Arc<Registry>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(default_registry())
    }
}

impl Engine {
    /// Engine bound to `registry`
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// The registry this engine resolves tokens against
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Encrypt `data`; AEAD modes return `ciphertext || tag`
    pub fn encrypt(&self, selection: &Selection, data: &[u8], options: &Options) -> Result<Vec<u8>> {
        self.run(selection, data, options, Direction::Encrypt)
    }

    /// Decrypt `data`; AEAD modes verify the tag before returning plaintext
    pub fn decrypt(&self, selection: &Selection, data: &[u8], options: &Options) -> Result<Vec<u8>> {
        self.run(selection, data, options, Direction::Decrypt)
    }

    fn run(
        &self,
        selection: &Selection,
        data: &[u8],
        options: &Options,
        direction: Direction,
    ) -> Result<Vec<u8>> {
        let entry = self.registry.multiple(selection.multiple)?;
        let cipher_name = self.registry.multiple_name(selection.multiple)?;

        let (factory, default_mode, default_padding) = match entry {
            MultipleEntry::Stream { factory } => {
                debug!(
                    cipher = %cipher_name,
                    direction = direction.as_str(),
                    len = data.len(),
                    "applying stream cipher"
                );
                let mut cipher = factory(options)?;
                let mut out = data.to_vec();
                cipher.apply_keystream(&mut out)?;
                return Ok(out);
            }
            MultipleEntry::Block {
                factory,
                default_mode,
                default_padding,
            } => (factory, *default_mode, *default_padding),
        };

        let mode_token = selection.mode.unwrap_or(default_mode);
        let padding_token = selection.padding.unwrap_or(default_padding);

        let cipher = factory(options)?;
        let block_size = cipher.block_size();
        let mode = (self.registry.mode(mode_token)?)(cipher, options)?;

        debug!(
            cipher = %cipher_name,
            mode = mode.name(),
            direction = direction.as_str(),
            block_size,
            len = data.len(),
            "resolved pipeline"
        );

        match mode {
            ModeInstance::Aead(mode) => {
                let aad = options.config().additional_or_empty();
                match direction {
                    Direction::Encrypt => mode.seal(data, aad),
                    Direction::Decrypt => mode.open(data, aad).map_err(|err| {
                        if err.is_authentication_failure() {
                            warn!(cipher = %cipher_name, mode = mode.name(), "tag verification failed");
                        }
                        err
                    }),
                }
            }
            ModeInstance::Block(mode) => {
                let padding = self.padding(padding_token, options)?;
                padded_run(
                    direction,
                    data,
                    Some((padding.as_ref(), block_size)),
                    |input| mode.encrypt(input),
                    |input| mode.decrypt(input),
                )
            }
            ModeInstance::Stream(mode) => {
                let padding = match padding_token {
                    Padding::NONE => None,
                    token => Some(self.padding(token, options)?),
                };
                padded_run(
                    direction,
                    data,
                    padding.as_deref().map(|padding| (padding, block_size)),
                    |input| mode.encrypt(input),
                    |input| mode.decrypt(input),
                )
            }
        }
    }

    fn padding(&self, token: Padding, options: &Options) -> Result<Box<dyn PaddingScheme>> {
        (self.registry.padding(token)?)(options)
    }
}

/// Pad then encrypt, or decrypt then unpad
fn padded_run<E, D>(
    direction: Direction,
    data: &[u8],
    padding: Option<(&dyn PaddingScheme, usize)>,
    encrypt: E,
    decrypt: D,
) -> Result<Vec<u8>>
where
    E: FnOnce(&[u8]) -> Result<Vec<u8>>,
    D: FnOnce(&[u8]) -> Result<Vec<u8>>,
{
    match (direction, padding) {
        (Direction::Encrypt, None) => encrypt(data),
        (Direction::Decrypt, None) => decrypt(data),
        (Direction::Encrypt, Some((padding, block_size))) => {
            let padded = Zeroizing::new(padding.pad(data, block_size)?);
            debug!(padding = padding.name(), padded_len = padded.len(), "padded");
            encrypt(padded.as_slice())
        }
        (Direction::Decrypt, Some((padding, block_size))) => {
            let padded = Zeroizing::new(decrypt(data)?);
            padding.unpad(padded.as_slice(), block_size)
        }
    }
}
