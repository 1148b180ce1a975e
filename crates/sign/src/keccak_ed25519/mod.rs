//! Keccak-based Ed25519 signature scheme
//!
//! The Ed25519 construction with Keccak-512 substituted for SHA-512, as used
//! by NEM-compatible clients. Key material crosses the API boundary as hex
//! text: private keys are written big-endian on the wire and reversed into
//! the little-endian order the curve arithmetic expects, while public keys
//! are written in curve-native order without reversal. Signatures are raw
//! `R || S` bytes.
//!
//! The expanded key (the Keccak-512 digest of the private key) is recomputed
//! inside every derivation and signing call and zeroed on return; no
//! long-lived secret-bearing state exists beyond the private key itself.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{format, string::String};

use rand::{CryptoRng, RngCore};
use sha3::{Digest, Keccak512};
use xemcrypt_api::{
    Error as ApiError, Result as ApiResult, SecretBytes, Signature as SignatureTrait,
    SignatureDerive,
};
use xemcrypt_params::{
    EXPANDED_KEY_SIZE, PRIVATE_KEY_HEX_LEN, PRIVATE_KEY_SIZE, PUBLIC_KEY_HEX_LEN, PUBLIC_KEY_SIZE,
    SCALAR_SIZE, SEED_SIZE, SIGNATURE_SIZE,
};
use zeroize::{Zeroize, Zeroizing};

mod operations;

pub use operations::clamp_scalar_bytes;

use crate::encoding::{self, ByteOrder};

/// Keccak-based Ed25519 signature scheme
///
/// # Security Considerations
///
/// - Always use a cryptographically secure RNG for key generation
/// - Protect private key text the same way as the raw key bytes; the hex
///   form is the key
/// - `sign` takes the paired public key as an explicit input and binds it
///   into the challenge hash; a mismatched pair produces a signature that
///   will never verify
pub struct KeccakEd25519;

/// Public key: a 32-byte compressed curve point
///
/// The hex form is the point encoding in curve-native order, without the
/// byte reversal applied to private key text.
#[derive(Clone, Zeroize, PartialEq, Eq)]
pub struct KeccakEd25519PublicKey(pub [u8; PUBLIC_KEY_SIZE]);

impl core::fmt::Debug for KeccakEd25519PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeccakEd25519PublicKey")
            .field("algorithm", &"Ed25519-Keccak")
            .finish()
    }
}

/// Secret key, held in the little-endian order the curve arithmetic expects
///
/// # Security
///
/// - Cleared from memory on drop
/// - Compared in constant time
/// - Never logged or displayed; `Debug` redacts the key material
///
/// The canonical external form is 64 lowercase hex characters in big-endian
/// (wire) order; [`from_hex`](Self::from_hex) and [`to_hex`](Self::to_hex)
/// apply the byte reversal in both directions.
#[derive(Clone, Zeroize, PartialEq, Eq)]
pub struct KeccakEd25519SecretKey {
    k: SecretBytes<PRIVATE_KEY_SIZE>,
}

impl core::fmt::Debug for KeccakEd25519SecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeccakEd25519SecretKey")
            .field("algorithm", &"Ed25519-Keccak")
            .finish()
    }
}

/// Signature (64 bytes: `R || S`)
///
/// `R` is a compressed curve point and `S` a little-endian scalar. The raw
/// bytes are the canonical form; [`to_hex`](Self::to_hex) is provided for
/// callers that transport signatures as text.
#[derive(Clone, Zeroize, PartialEq, Eq)]
pub struct KeccakEd25519Signature(pub [u8; SIGNATURE_SIZE]);

impl core::fmt::Debug for KeccakEd25519Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeccakEd25519Signature")
            .field("length", &self.0.len())
            .finish()
    }
}

impl KeccakEd25519PublicKey {
    /// Create a public key from its 32 raw point bytes
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(ApiError::InvalidLength {
                context: "KeccakEd25519PublicKey::from_bytes",
                expected: PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut key = [0u8; PUBLIC_KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(KeccakEd25519PublicKey(key))
    }

    /// Parse a public key from its 64-character hex form
    pub fn from_hex(text: &str) -> ApiResult<Self> {
        let key = encoding::decode_fixed::<PUBLIC_KEY_SIZE>(text, ByteOrder::AsIs)
            .map_err(|e| e.with_context("KeccakEd25519PublicKey::from_hex"))?;
        Ok(KeccakEd25519PublicKey(key))
    }

    /// Convert the public key to raw point bytes
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }

    /// Hex form of the public key: always [`PUBLIC_KEY_HEX_LEN`] characters
    pub fn to_hex(&self) -> String {
        encoding::encode(&self.0)
    }
}

impl KeccakEd25519SecretKey {
    /// Parse a secret key from its 64-character big-endian hex form
    ///
    /// The text is reversed into little-endian internal order on decode. A
    /// wrong length or a non-hex character is a decode error.
    pub fn from_hex(text: &str) -> ApiResult<Self> {
        let k = encoding::decode_fixed::<PRIVATE_KEY_SIZE>(text, ByteOrder::Reversed)
            .map_err(|e| e.with_context("KeccakEd25519SecretKey::from_hex"))?;
        Ok(KeccakEd25519SecretKey {
            k: SecretBytes::new(k),
        })
    }

    /// Export the key as 64 lowercase hex characters in wire order
    ///
    /// This is the externally visible private key. The returned buffer is
    /// zeroed when dropped; callers that persist it take over that duty.
    pub fn to_hex(&self) -> Zeroizing<String> {
        let mut wire = Zeroizing::new(*self.k.as_bytes());
        wire.reverse();
        Zeroizing::new(encoding::encode(wire.as_ref()))
    }

    /// Derive the public key paired with this secret key
    ///
    /// Recomputes the expanded key and clamps its scalar half on every call;
    /// the result is deterministic.
    pub fn public_key(&self) -> ApiResult<KeccakEd25519PublicKey> {
        let expanded = expand_key(self.k.as_bytes());

        let mut scalar = Zeroizing::new([0u8; SCALAR_SIZE]);
        scalar.copy_from_slice(&expanded[..SCALAR_SIZE]);
        let scalar = Zeroizing::new(operations::clamp_scalar_bytes(*scalar));

        Ok(KeccakEd25519PublicKey(operations::scalar_mult_base(
            &scalar,
        )))
    }
}

impl KeccakEd25519Signature {
    /// Create a signature from its 64 raw bytes
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.len() != SIGNATURE_SIZE {
            return Err(ApiError::InvalidLength {
                context: "KeccakEd25519Signature::from_bytes",
                expected: SIGNATURE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut sig = [0u8; SIGNATURE_SIZE];
        sig.copy_from_slice(bytes);
        Ok(KeccakEd25519Signature(sig))
    }

    /// Convert the signature to raw bytes
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        self.0
    }

    /// Hex form of the raw signature bytes
    pub fn to_hex(&self) -> String {
        encoding::encode(&self.0)
    }
}

/// Recompute the expanded key from the little-endian private key bytes
///
/// The caller gets a scoped buffer that zeroes itself on every exit path.
fn expand_key(k: &[u8; PRIVATE_KEY_SIZE]) -> Zeroizing<[u8; EXPANDED_KEY_SIZE]> {
    let mut hasher = Keccak512::new();
    hasher.update(k);
    let mut expanded = Zeroizing::new([0u8; EXPANDED_KEY_SIZE]);
    expanded.copy_from_slice(hasher.finalize().as_slice());
    expanded
}

impl SignatureTrait for KeccakEd25519 {
    type PublicKey = KeccakEd25519PublicKey;
    type SecretKey = KeccakEd25519SecretKey;
    type SignatureData = KeccakEd25519Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "Ed25519-Keccak"
    }

    /// Generate a key pair from fresh entropy
    ///
    /// 1. Draw a 32-byte random seed
    /// 2. Hash the seed with Keccak-512
    /// 3. Keep the first 32 bytes of the digest as the private key; the
    ///    second half is discarded and never used again
    /// 4. Derive the public key from the private key
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        // Step 1: the seed exists only for the duration of this call
        let seed = SecretBytes::<SEED_SIZE>::random(rng);

        // Step 2: hash the seed
        let mut hasher = Keccak512::new();
        hasher.update(seed.as_ref());
        let mut digest = Zeroizing::new([0u8; EXPANDED_KEY_SIZE]);
        digest.copy_from_slice(hasher.finalize().as_slice());

        // Step 3: the first half of the digest, hex-encoded big-endian, is
        // the exported private key; internally it is held reversed
        let mut k = [0u8; PRIVATE_KEY_SIZE];
        k.copy_from_slice(&digest[..PRIVATE_KEY_SIZE]);
        k.reverse();
        let secret = KeccakEd25519SecretKey {
            k: SecretBytes::new(k),
        };
        k.zeroize();

        // Step 4
        let public = secret.public_key()?;
        Ok((public, secret))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    /// Sign a message
    ///
    /// 1. `expanded = Keccak-512(k)`, split into a scalar half and a nonce
    ///    half
    /// 2. `r = Keccak-512(nonce half || message) mod L`
    /// 3. `R = [r]B`
    /// 4. `hram = Keccak-512(R || A || message) mod L`
    /// 5. `S = (hram * clamp(scalar half) + r) mod L`
    /// 6. Return `R || S`
    ///
    /// Deterministic: the same message and key pair always produce the same
    /// signature.
    fn sign(
        message: &[u8],
        public_key: &Self::PublicKey,
        secret_key: &Self::SecretKey,
    ) -> ApiResult<Self::SignatureData> {
        // Step 1: recompute the expanded key for this call only
        let expanded = expand_key(secret_key.k.as_bytes());

        // Step 2: deterministic per-message nonce, seeded by the second half
        // of the expanded key
        let mut hasher = Keccak512::new();
        hasher.update(&expanded[PRIVATE_KEY_SIZE..]);
        hasher.update(message);
        let mut r_hash = Zeroizing::new([0u8; EXPANDED_KEY_SIZE]);
        r_hash.copy_from_slice(hasher.finalize().as_slice());
        let r = Zeroizing::new(operations::reduce_wide(&r_hash));

        // Step 3
        let r_point = operations::scalar_mult_base(&r);

        // Step 4: the challenge binds R, the public key, and the message
        let mut hasher = Keccak512::new();
        hasher.update(&r_point);
        hasher.update(&public_key.0);
        hasher.update(message);
        let mut hram_hash = [0u8; EXPANDED_KEY_SIZE];
        hram_hash.copy_from_slice(hasher.finalize().as_slice());
        let hram = operations::reduce_wide(&hram_hash);

        // Step 5: clamp the scalar half exactly as public key derivation
        // does, or the signature will not verify against the derived key
        let mut scalar = Zeroizing::new([0u8; SCALAR_SIZE]);
        scalar.copy_from_slice(&expanded[..SCALAR_SIZE]);
        let scalar = Zeroizing::new(operations::clamp_scalar_bytes(*scalar));
        let s = operations::mul_add(&hram, &scalar, &r);

        // Step 6
        let mut signature = [0u8; SIGNATURE_SIZE];
        signature[..PUBLIC_KEY_SIZE].copy_from_slice(&r_point);
        signature[PUBLIC_KEY_SIZE..].copy_from_slice(&s);
        Ok(KeccakEd25519Signature(signature))
    }
}

impl SignatureDerive for KeccakEd25519 {
    const MIN_SEED_SIZE: usize = SEED_SIZE;

    /// Derive a key pair from caller-supplied seed material
    ///
    /// Follows the same path as [`keypair`](KeccakEd25519::keypair) with the
    /// first [`SEED_SIZE`] bytes of `seed` in place of the RNG draw.
    fn derive_keypair(seed: &[u8]) -> ApiResult<Self::KeyPair> {
        if seed.len() < Self::MIN_SEED_SIZE {
            return Err(ApiError::InvalidParameter {
                context: "KeccakEd25519::derive_keypair",
                message: format!("seed too short: minimum {} bytes required", Self::MIN_SEED_SIZE),
            });
        }

        let mut hasher = Keccak512::new();
        hasher.update(&seed[..SEED_SIZE]);
        let mut digest = Zeroizing::new([0u8; EXPANDED_KEY_SIZE]);
        digest.copy_from_slice(hasher.finalize().as_slice());

        let mut k = [0u8; PRIVATE_KEY_SIZE];
        k.copy_from_slice(&digest[..PRIVATE_KEY_SIZE]);
        k.reverse();
        let secret = KeccakEd25519SecretKey {
            k: SecretBytes::new(k),
        };
        k.zeroize();

        let public = secret.public_key()?;
        Ok((public, secret))
    }

    fn derive_public_key(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        secret_key.public_key()
    }
}

// Text forms only: the hex strings are the interoperable representations,
// so serde round-trips go through them rather than raw byte tuples.
#[cfg(feature = "serde")]
impl serde::Serialize for KeccakEd25519PublicKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for KeccakEd25519PublicKey {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for KeccakEd25519Signature {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for KeccakEd25519Signature {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> core::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let bytes = encoding::decode_fixed::<SIGNATURE_SIZE>(&text, ByteOrder::AsIs)
            .map_err(serde::de::Error::custom)?;
        Ok(KeccakEd25519Signature(bytes))
    }
}

// Compile-time check that the hex lengths stay in step with the byte widths
const _: () = assert!(PRIVATE_KEY_HEX_LEN == 2 * PRIVATE_KEY_SIZE);
const _: () = assert!(PUBLIC_KEY_HEX_LEN == 2 * PUBLIC_KEY_SIZE);
