//! Digital signature traits for xemcrypt
//!
//! This module defines the traits that signature schemes in this workspace
//! implement. The design prioritizes security by not requiring mutable access
//! to secret keys.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for digital signature schemes
///
/// This trait defines the minimal interface a signing scheme must implement.
/// It intentionally does not require `AsRef` or `AsMut` implementations for
/// secret keys to prevent accidental key corruption.
///
/// Unlike RFC-8032-style APIs, `sign` takes the paired public key as an
/// explicit input: the schemes in this workspace bind the public key into the
/// challenge hash and accept it from the caller instead of recomputing it on
/// every call.
///
/// # Type Safety
///
/// Secret keys are opaque types that cannot be directly manipulated as bytes.
/// This prevents common security vulnerabilities where keys are accidentally
/// modified or exposed.
pub trait Signature {
    /// Public key type for this scheme
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    ///
    /// # Security Note
    ///
    /// This type should not implement `AsMut<[u8]>` to prevent corruption
    /// of key material. Use explicit serialization methods if needed.
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type (typically a tuple of public and secret keys)
    type KeyPair;

    /// Returns the name of this signature scheme
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    ///
    /// # Security Requirements
    ///
    /// Implementations must use the provided cryptographically secure RNG
    /// for all random number generation and must fail rather than fall back
    /// to a weak or fixed seed.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a message with the given secret key and its paired public key
    ///
    /// # Security Requirements
    ///
    /// - Implementations should be deterministic when possible
    /// - Must not leak information about the secret key through timing
    /// - The public key must be the one derived from `secret_key`; a
    ///   mismatched pair produces a signature that will never verify
    fn sign(
        message: &[u8],
        public_key: &Self::PublicKey,
        secret_key: &Self::SecretKey,
    ) -> Result<Self::SignatureData>;
}

/// Optional trait for signature schemes that support key derivation
///
/// This trait is for schemes that can derive keys from seed material
/// in a deterministic way.
pub trait SignatureDerive: Signature {
    /// Minimum seed size in bytes
    const MIN_SEED_SIZE: usize;

    /// Derive a key pair from seed material
    ///
    /// # Security Requirements
    ///
    /// - The seed must have sufficient entropy
    /// - Derivation must be deterministic
    /// - Same seed must always produce same key pair
    ///
    /// # Errors
    ///
    /// Returns an error if the seed is too short or invalid
    fn derive_keypair(seed: &[u8]) -> Result<Self::KeyPair>;

    /// Derive the public key from a secret key
    ///
    /// This is useful when you have a secret key and need to
    /// recover the corresponding public key.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret key is invalid
    fn derive_public_key(secret_key: &Self::SecretKey) -> Result<Self::PublicKey>;
}
