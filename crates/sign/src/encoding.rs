//! Hexadecimal text codec for key material
//!
//! Key material moves between NEM-compatible clients as fixed-width lowercase
//! hex text. Private keys are written big-endian on the wire while the curve
//! and hash collaborators consume little-endian buffers, so decoding takes an
//! explicit byte-order mode. Keeping the reversal behind [`ByteOrder`] makes
//! it a single auditable decision point instead of scattered byte swaps.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

use xemcrypt_api::{Error, Result};
use zeroize::Zeroizing;

/// Byte order of a hex text relative to the buffer it decodes into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Byte `i` of the output is decoded from character pair `i`
    AsIs,
    /// Byte `i` of the output is decoded from character pair `n - 1 - i`
    Reversed,
}

/// Encode a byte buffer as lowercase hex, most significant nibble first
///
/// Output length is twice the input length. The buffer is emitted in input
/// order; reversal only ever happens on the decode side.
pub fn encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a fixed-width hex text into an `N`-byte buffer
///
/// The text must be exactly `2 * N` hex digits. A wrong length or a non-hex
/// character is a decode error; the input is never truncated or zero-filled.
pub fn decode_fixed<const N: usize>(text: &str, order: ByteOrder) -> Result<[u8; N]> {
    if text.len() != 2 * N {
        return Err(Error::InvalidLength {
            context: "hex decode",
            expected: 2 * N,
            actual: text.len(),
        });
    }

    let decoded = Zeroizing::new(hex::decode(text).map_err(|_| Error::InvalidEncoding {
        context: "hex decode",
        message: String::from("input contains a non-hex character"),
    })?);

    let mut out = [0u8; N];
    match order {
        ByteOrder::AsIs => out.copy_from_slice(&decoded),
        ByteOrder::Reversed => {
            for (i, byte) in decoded.iter().rev().enumerate() {
                out[i] = *byte;
            }
        }
    }
    Ok(out)
}
