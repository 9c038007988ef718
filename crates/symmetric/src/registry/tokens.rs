//! Algorithm identity tokens
//!
//! Tokens are small `Copy` handles. Built-in algorithms use the associated
//! constants; plugins call `generate()` to obtain an identity that cannot
//! collide with a built-in or with any other generated token.

use core::sync::atomic::{AtomicU32, Ordering};

/// First value handed out by `generate()`; built-ins stay below it
const FIRST_GENERATED: u32 = 1000;

static NEXT_TOKEN: AtomicU32 = AtomicU32::new(FIRST_GENERATED);

fn next_id() -> u32 {
    NEXT_TOKEN.fetch_add(1, Ordering::Relaxed)
}

macro_rules! define_token {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$cmeta:meta])* $konst:ident = $value:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            $( $(#[$cmeta])* pub const $konst: $name = $name($value); )*

            pub(crate) const KIND: &'static str = $kind;

            /// Allocate a fresh, process-wide unique token
            pub fn generate() -> Self {
                $name(next_id())
            }

            /// Raw numeric identity
            pub const fn id(self) -> u32 {
                self.0
            }
        }
    };
}

define_token! {
    /// Cipher family (block or stream cipher)
    Multiple, "multiple" {
        /// AES-128/192/256
        AES = 1,
        /// GOST R 34.12-2015 128-bit cipher
        KUZNYECHIK = 2,
        /// GOST R 34.12-2015 64-bit cipher
        MAGMA = 3,
        /// SM4
        SM4 = 4,
        /// Single DES
        DES = 5,
        /// Triple-DES (EDE)
        TRIPLE_DES = 6,
        /// ChaCha20 stream cipher
        CHACHA20 = 7,
        /// RC4 stream cipher
        RC4 = 8,
    }
}

define_token! {
    /// Mode of operation
    Mode, "mode" {
        /// Electronic codebook
        ECB = 1,
        /// Cipher block chaining
        CBC = 2,
        /// Full-block cipher feedback
        CFB = 3,
        /// CFB with 8-bit segments
        CFB8 = 4,
        /// CFB with 16-bit segments
        CFB16 = 5,
        /// CFB with 32-bit segments
        CFB32 = 6,
        /// CFB with 64-bit segments
        CFB64 = 7,
        /// CFB with 128-bit segments
        CFB128 = 8,
        /// CFB with the segment width taken from `bit_block_size`
        CFBN = 9,
        /// Full-block output feedback
        OFB = 10,
        /// OFB with an 8-bit feedback register
        OFB8 = 11,
        /// n-bit OFB
        NOFB = 12,
        /// n-bit CFB with plaintext feedback
        NCFB = 13,
        /// Counter mode
        CTR = 14,
        /// GOST 28147-89 gamma mode
        GOFB = 15,
        /// GOST R 34.13-2015 CBC
        GOST_CBC = 16,
        /// GOST R 34.13-2015 CFB
        GOST_CFB = 17,
        /// GOST R 34.13-2015 OFB
        GOST_OFB = 18,
        /// EAX authenticated mode
        EAX = 19,
        /// OCB (RFC 7253), 128-bit ciphers
        OCB = 20,
        /// OCB3 for 64 and 128-bit ciphers
        OCB3 = 21,
        /// Multilinear Galois mode
        MGM = 22,
    }
}

define_token! {
    /// Padding scheme
    Padding, "padding" {
        /// No padding; input must be block aligned
        NONE = 1,
        /// Zero bytes up to the block boundary
        ZERO = 2,
        /// `00 || BT || PS || 00 || D`
        PKCS1 = 3,
        /// Alias of PKCS#7
        PKCS5 = 4,
        /// PKCS#7
        PKCS7 = 5,
        /// ANSI X9.23
        X923 = 6,
        /// ISO 10126
        ISO10126 = 7,
        /// ISO/IEC 7816-4
        ISO7816_4 = 8,
    }
}
