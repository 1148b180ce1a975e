//! Hex-encoded content digest
//!
//! A Keccak-256 helper independent of the signing flow, used by callers that
//! need a textual content or address hash. Keccak here is the original
//! padding, not the FIPS SHA-3 variant.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

use sha3::{Digest, Keccak256};

use crate::encoding;

/// Hex encoding of the Keccak-256 digest of `input`
///
/// Stateless and infallible for any input, including empty.
pub fn keccak256_hex(input: &[u8]) -> String {
    let digest = Keccak256::digest(input);
    encoding::encode(&digest)
}
