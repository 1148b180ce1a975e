//! # xemcrypt
//!
//! A Keccak-based Ed25519 signing core for NEM-compatible clients.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! xemcrypt = "0.2"
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `alloc`: Allocation support without `std`
//! - `serde`: Serde derives on public (non-secret) value types
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`api`]: Error types, `SecretBytes`, and the signature traits
//! - [`params`]: Size constants shared across the workspace
//! - [`sign`]: The Keccak-Ed25519 scheme, hex codec, and digest helper
//!
//! ## Example
//!
//! ```
//! use xemcrypt::prelude::*;
//! use rand::rngs::OsRng;
//!
//! # fn main() -> xemcrypt::api::Result<()> {
//! let mut rng = OsRng;
//! let (public_key, secret_key) = KeccakEd25519::keypair(&mut rng)?;
//!
//! let message = b"an arbitrary message";
//! let signature = KeccakEd25519::sign(message, &public_key, &secret_key)?;
//! assert_eq!(signature.to_bytes().len(), 64);
//! assert_eq!(signature.to_hex(), hex::encode(signature.to_bytes()));
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use xemcrypt_api as api;
pub use xemcrypt_params as params;
pub use xemcrypt_sign as sign;

/// Common imports for xemcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Signature, SignatureDerive};

    // Re-export security types
    pub use crate::api::SecretBytes;

    // Re-export the scheme and its value types
    pub use crate::sign::{
        KeccakEd25519, KeccakEd25519PublicKey, KeccakEd25519SecretKey, KeccakEd25519Signature,
    };

    // Re-export the helpers used alongside the scheme
    pub use crate::sign::encoding::{self, ByteOrder};
    pub use crate::sign::{clamp_scalar_bytes, keccak256_hex};
}
