//! Keccak-based Ed25519 signing
//!
//! This crate implements the signature scheme used by NEM-compatible
//! clients: the standard Ed25519 construction with Keccak-512 substituted
//! for SHA-512, together with the byte-order conventions those clients use
//! for key material in transit.
//!
//! The curve arithmetic is delegated to `curve25519-dalek` and the hash
//! primitives to `sha3`; this crate owns the protocol-level composition
//! only.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error!("xemcrypt-sign requires either the `std` or `alloc` feature");

pub mod digest;
pub mod encoding;
pub mod keccak_ed25519;

// Re-exports for the common path
pub use digest::keccak256_hex;
pub use keccak_ed25519::{
    clamp_scalar_bytes, KeccakEd25519, KeccakEd25519PublicKey, KeccakEd25519SecretKey,
    KeccakEd25519Signature,
};
