//! Curve arithmetic seam
//!
//! Thin named wrappers over the `curve25519-dalek` group operations the
//! scheme relies on. Everything crosses this boundary as fixed-size byte
//! buffers; scalar and point types stay internal to this module.

use curve25519_dalek::constants::ED25519_BASEPOINT_TABLE;
use curve25519_dalek::scalar::Scalar;

use xemcrypt_params::{KECCAK512_OUTPUT_SIZE, PUBLIC_KEY_SIZE, SCALAR_SIZE};

/// Apply the curve25519 cofactor-clearing bit mask to a 32-byte scalar
///
/// Clears the low 3 bits of byte 0, clears the high bit of byte 31, and sets
/// bit 6 of byte 31. Idempotent.
pub fn clamp_scalar_bytes(mut scalar: [u8; SCALAR_SIZE]) -> [u8; SCALAR_SIZE] {
    scalar[0] &= 248;
    scalar[31] &= 127;
    scalar[31] |= 64;
    scalar
}

/// Multiply the base point by a scalar and return the compressed point
pub fn scalar_mult_base(scalar_bytes: &[u8; SCALAR_SIZE]) -> [u8; PUBLIC_KEY_SIZE] {
    let scalar = Scalar::from_bytes_mod_order(*scalar_bytes);
    (ED25519_BASEPOINT_TABLE * &scalar).compress().to_bytes()
}

/// Reduce a 512-bit hash output to a scalar mod the group order
pub fn reduce_wide(hash: &[u8; KECCAK512_OUTPUT_SIZE]) -> [u8; SCALAR_SIZE] {
    Scalar::from_bytes_mod_order_wide(hash).to_bytes()
}

/// Compute `(a * b + c) mod L`
pub fn mul_add(
    a: &[u8; SCALAR_SIZE],
    b: &[u8; SCALAR_SIZE],
    c: &[u8; SCALAR_SIZE],
) -> [u8; SCALAR_SIZE] {
    let a = Scalar::from_bytes_mod_order(*a);
    let b = Scalar::from_bytes_mod_order(*b);
    let c = Scalar::from_bytes_mod_order(*c);
    (a * b + c).to_bytes()
}
