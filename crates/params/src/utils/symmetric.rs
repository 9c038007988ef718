//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Kuznyechik (GOST R 34.12-2015, 128-bit) key size in bytes
pub const KUZNYECHIK_KEY_SIZE: usize = 32;

/// Kuznyechik block size in bytes
pub const KUZNYECHIK_BLOCK_SIZE: usize = 16;

/// Magma (GOST R 34.12-2015, 64-bit) key size in bytes
pub const MAGMA_KEY_SIZE: usize = 32;

/// Magma block size in bytes
pub const MAGMA_BLOCK_SIZE: usize = 8;

/// SM4 key size in bytes
pub const SM4_KEY_SIZE: usize = 16;

/// SM4 block size in bytes
pub const SM4_BLOCK_SIZE: usize = 16;

/// DES key size in bytes (parity bits included)
pub const DES_KEY_SIZE: usize = 8;

/// DES block size in bytes
pub const DES_BLOCK_SIZE: usize = 8;

/// Two-key Triple-DES key size in bytes
pub const TDES_EDE2_KEY_SIZE: usize = 16;

/// Three-key Triple-DES key size in bytes
pub const TDES_EDE3_KEY_SIZE: usize = 24;

/// ChaCha20 key size in bytes
pub const CHACHA20_KEY_SIZE: usize = 32;

/// ChaCha20 nonce size in bytes
pub const CHACHA20_NONCE_SIZE: usize = 12;

/// ChaCha20 block size in bytes
pub const CHACHA20_BLOCK_SIZE: usize = 64;

/// Smallest RC4 key in bytes
pub const RC4_MIN_KEY_SIZE: usize = 1;

/// Largest RC4 key in bytes
pub const RC4_MAX_KEY_SIZE: usize = 256;

