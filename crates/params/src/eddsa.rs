//! Constants for the Keccak-based Ed25519 signature scheme

/// Size of the random seed used to bootstrap key generation, in bytes
pub const SEED_SIZE: usize = 32;

/// Size of a decoded private key, in bytes
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Length of a private key in its hexadecimal text form
pub const PRIVATE_KEY_HEX_LEN: usize = 2 * PRIVATE_KEY_SIZE;

/// Size of an encoded public key point, in bytes
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Length of a public key in its hexadecimal text form
pub const PUBLIC_KEY_HEX_LEN: usize = 2 * PUBLIC_KEY_SIZE;

/// Size of a signature (`R || S`), in bytes
pub const SIGNATURE_SIZE: usize = 64;

/// Size of the expanded key (the Keccak-512 digest of the private key), in bytes
pub const EXPANDED_KEY_SIZE: usize = 64;

/// Size of a curve scalar, in bytes
pub const SCALAR_SIZE: usize = 32;
