//! Identity registry
//!
//! Maps each [`Multiple`], [`Mode`] and [`Padding`] token to a display-name
//! supplier and to the factory that builds the implementation for one call.
//!
//! Registration happens on a [`RegistryBuilder`], whose tables sit behind a
//! `RwLock` so several threads may register at once; [`RegistryBuilder::build`]
//! freezes the tables into an immutable [`Registry`] that is shared through
//! `Arc`. Registering a token twice keeps the last entry.
//!
//! ```ignore
//! let token = Mode::generate();
//! let registry = default_registry().with_overrides(|builder| {
//!     builder.add_mode(token, || "MY-MODE".to_string(), my_factory);
//! });
//! ```

mod tokens;

pub use tokens::{Mode, Multiple, Padding};

use crate::defaults::register_defaults;
use crate::options::Options;
use cipherkit_api::{
    AeadMode, BlockCipher, BlockMode, Error, PaddingScheme, Result, StreamCipher, StreamMode,
};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Supplies the display name of an algorithm
pub type NameFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Builds a keyed block cipher from the call options
pub type BlockCipherFactory = Arc<dyn Fn(&Options) -> Result<Box<dyn BlockCipher>> + Send + Sync>;

/// Builds a keyed stream cipher from the call options
pub type StreamCipherFactory =
    Arc<dyn Fn(&Options) -> Result<Box<dyn StreamCipher>> + Send + Sync>;

/// Wraps a keyed block cipher in a mode of operation
pub type ModeFactory =
    Arc<dyn Fn(Box<dyn BlockCipher>, &Options) -> Result<ModeInstance> + Send + Sync>;

/// Builds a padding scheme from the call options
pub type PaddingFactory = Arc<dyn Fn(&Options) -> Result<Box<dyn PaddingScheme>> + Send + Sync>;

/// A mode ready to run, tagged with the capability it implements
pub enum ModeInstance {
    /// Requires block-aligned input; padding applies
    Block(Box<dyn BlockMode>),
    /// Accepts any input length
    Stream(Box<dyn StreamMode>),
    /// Authenticated; never padded
    Aead(Box<dyn AeadMode>),
}

impl ModeInstance {
    /// Display name reported by the mode itself
    pub fn name(&self) -> &'static str {
        match self {
            ModeInstance::Block(mode) => mode.name(),
            ModeInstance::Stream(mode) => mode.name(),
            ModeInstance::Aead(mode) => mode.name(),
        }
    }
}

impl fmt::Debug for ModeInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ModeInstance::Block(_) => "Block",
            ModeInstance::Stream(_) => "Stream",
            ModeInstance::Aead(_) => "Aead",
        };
        write!(f, "ModeInstance::{}({})", kind, self.name())
    }
}

/// Construction logic for a cipher family
#[derive(Clone)]
pub enum MultipleEntry {
    /// Block cipher driven through a mode and a padding
    Block {
        /// Keyed cipher factory
        factory: BlockCipherFactory,
        /// Mode used when the caller selects none
        default_mode: Mode,
        /// Padding used when the caller selects none
        default_padding: Padding,
    },
    /// Stream cipher applied directly; modes and paddings are ignored
    Stream {
        /// Keyed keystream factory
        factory: StreamCipherFactory,
    },
}

impl MultipleEntry {
    /// Block cipher entry defaulting to ECB with PKCS#7
    pub fn block<F>(factory: F) -> Self
    where
        F: Fn(&Options) -> Result<Box<dyn BlockCipher>> + Send + Sync + 'static,
    {
        MultipleEntry::Block {
            factory: Arc::new(factory),
            default_mode: Mode::ECB,
            default_padding: Padding::PKCS7,
        }
    }

    /// Stream cipher entry
    pub fn stream<F>(factory: F) -> Self
    where
        F: Fn(&Options) -> Result<Box<dyn StreamCipher>> + Send + Sync + 'static,
    {
        MultipleEntry::Stream {
            factory: Arc::new(factory),
        }
    }

    /// Replace the default mode and padding of a block entry
    ///
    /// Stream entries are returned unchanged.
    pub fn with_defaults(self, mode: Mode, padding: Padding) -> Self {
        match self {
            MultipleEntry::Block { factory, .. } => MultipleEntry::Block {
                factory,
                default_mode: mode,
                default_padding: padding,
            },
            stream => stream,
        }
    }
}

/// Names and factories for one token kind, kept as two maps
struct Table<K, V> {
    names: HashMap<K, NameFn>,
    entries: HashMap<K, V>,
}

impl<K, V: Clone> Clone for Table<K, V>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            names: self.names.clone(),
            entries: self.entries.clone(),
        }
    }
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            names: HashMap::new(),
            entries: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash + Ord, V> Table<K, V> {
    fn insert(&mut self, token: K, name: NameFn, entry: V) {
        self.names.insert(token, name);
        self.entries.insert(token, entry);
    }

    fn name(&self, token: K) -> Option<String> {
        self.names.get(&token).map(|name| name())
    }

    fn find(&self, name: &str) -> Option<K> {
        self.names
            .iter()
            .filter(|(_, supplier)| supplier().eq_ignore_ascii_case(name))
            .map(|(token, _)| *token)
            .min()
    }

    fn tokens(&self) -> Vec<K> {
        let mut tokens: Vec<K> = self.entries.keys().copied().collect();
        tokens.sort();
        tokens
    }
}

#[derive(Clone, Default)]
struct Tables {
    multiples: Table<Multiple, MultipleEntry>,
    modes: Table<Mode, ModeFactory>,
    paddings: Table<Padding, PaddingFactory>,
}

/// Mutable registration surface, safe to share between threads
#[derive(Default)]
pub struct RegistryBuilder {
    tables: RwLock<Tables>,
}

impl RegistryBuilder {
    /// Empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-populated with every built-in algorithm
    pub fn with_defaults() -> Self {
        let builder = Self::new();
        register_defaults(&builder);
        builder
    }

    fn from_registry(registry: &Registry) -> Self {
        Self {
            tables: RwLock::new(registry.tables.clone()),
        }
    }

    /// Register a cipher family
    pub fn add_multiple<N>(&self, token: Multiple, name: N, entry: MultipleEntry) -> &Self
    where
        N: Fn() -> String + Send + Sync + 'static,
    {
        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .multiples
            .insert(token, Arc::new(name), entry);
        self
    }

    /// Register a mode of operation
    pub fn add_mode<N, F>(&self, token: Mode, name: N, factory: F) -> &Self
    where
        N: Fn() -> String + Send + Sync + 'static,
        F: Fn(Box<dyn BlockCipher>, &Options) -> Result<ModeInstance> + Send + Sync + 'static,
    {
        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .modes
            .insert(token, Arc::new(name), Arc::new(factory));
        self
    }

    /// Register a padding scheme
    pub fn add_padding<N, F>(&self, token: Padding, name: N, factory: F) -> &Self
    where
        N: Fn() -> String + Send + Sync + 'static,
        F: Fn(&Options) -> Result<Box<dyn PaddingScheme>> + Send + Sync + 'static,
    {
        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .paddings
            .insert(token, Arc::new(name), Arc::new(factory));
        self
    }

    /// Freeze the current tables into an immutable registry
    pub fn build(&self) -> Registry {
        let tables = self
            .tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        Registry { tables }
    }
}

/// Immutable token lookup shared by every pipeline call
#[derive(Clone)]
pub struct Registry {
    tables: Tables,
}

impl Registry {
    /// A new registry equal to this one plus whatever `register` adds
    ///
    /// `self` is left untouched, so the process default stays as it was.
    pub fn with_overrides<F>(&self, register: F) -> Registry
    where
        F: FnOnce(&RegistryBuilder),
    {
        let builder = RegistryBuilder::from_registry(self);
        register(&builder);
        builder.build()
    }

    /// Construction entry for a cipher family
    pub fn multiple(&self, token: Multiple) -> Result<&MultipleEntry> {
        self.tables
            .multiples
            .entries
            .get(&token)
            .ok_or(Error::UnknownAlgorithm {
                kind: Multiple::KIND,
                token: token.id(),
            })
    }

    /// Factory for a mode of operation
    pub fn mode(&self, token: Mode) -> Result<&ModeFactory> {
        self.tables
            .modes
            .entries
            .get(&token)
            .ok_or(Error::UnknownAlgorithm {
                kind: Mode::KIND,
                token: token.id(),
            })
    }

    /// Factory for a padding scheme
    pub fn padding(&self, token: Padding) -> Result<&PaddingFactory> {
        self.tables
            .paddings
            .entries
            .get(&token)
            .ok_or(Error::UnknownAlgorithm {
                kind: Padding::KIND,
                token: token.id(),
            })
    }

    /// Display name of a cipher family
    pub fn multiple_name(&self, token: Multiple) -> Result<String> {
        self.tables
            .multiples
            .name(token)
            .ok_or(Error::UnknownAlgorithm {
                kind: Multiple::KIND,
                token: token.id(),
            })
    }

    /// Display name of a mode
    pub fn mode_name(&self, token: Mode) -> Result<String> {
        self.tables.modes.name(token).ok_or(Error::UnknownAlgorithm {
            kind: Mode::KIND,
            token: token.id(),
        })
    }

    /// Display name of a padding scheme
    pub fn padding_name(&self, token: Padding) -> Result<String> {
        self.tables
            .paddings
            .name(token)
            .ok_or(Error::UnknownAlgorithm {
                kind: Padding::KIND,
                token: token.id(),
            })
    }

    /// Resolve a cipher family from its display name, ignoring ASCII case
    pub fn find_multiple_by_name(&self, name: &str) -> Option<Multiple> {
        self.tables.multiples.find(name)
    }

    /// Resolve a mode from its display name, ignoring ASCII case
    pub fn find_mode_by_name(&self, name: &str) -> Option<Mode> {
        self.tables.modes.find(name)
    }

    /// Resolve a padding from its display name, ignoring ASCII case
    pub fn find_padding_by_name(&self, name: &str) -> Option<Padding> {
        self.tables.paddings.find(name)
    }

    /// Registered cipher families in token order
    pub fn multiples(&self) -> Vec<Multiple> {
        self.tables.multiples.tokens()
    }

    /// Registered modes in token order
    pub fn modes(&self) -> Vec<Mode> {
        self.tables.modes.tokens()
    }

    /// Registered paddings in token order
    pub fn paddings(&self) -> Vec<Padding> {
        self.tables.paddings.tokens()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("multiples", &self.tables.multiples.entries.len())
            .field("modes", &self.tables.modes.entries.len())
            .field("paddings", &self.tables.paddings.entries.len())
            .finish()
    }
}

static DEFAULT_REGISTRY: OnceLock<Arc<Registry>> = OnceLock::new();

/// Process-wide registry holding the built-in algorithms
///
/// Created on first use and never mutated afterwards.
pub fn default_registry() -> Arc<Registry> {
    DEFAULT_REGISTRY
        .get_or_init(|| Arc::new(RegistryBuilder::with_defaults().build()))
        .clone()
}
