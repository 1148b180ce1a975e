//! Constants for hash functions

/// Output size of Keccak-256 in bytes
pub const KECCAK256_OUTPUT_SIZE: usize = 32;

/// Output size of Keccak-512 in bytes
pub const KECCAK512_OUTPUT_SIZE: usize = 64;

/// Internal block size of Keccak-256 in bytes
pub const KECCAK256_BLOCK_SIZE: usize = 136;

/// Internal block size of Keccak-512 in bytes
pub const KECCAK512_BLOCK_SIZE: usize = 72;
