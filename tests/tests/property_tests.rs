//! Property-based tests for the hex codec, clamping, and signing invariants

use proptest::prelude::*;
use xemcrypt::prelude::*;
use xemcrypt_tests::satisfies_group_equation;

proptest! {
    #[test]
    fn hex_encode_decode_as_is_roundtrip(bytes in any::<[u8; 32]>()) {
        let text = encoding::encode(&bytes);
        prop_assert_eq!(text.len(), 64);

        let decoded: [u8; 32] = encoding::decode_fixed(&text, ByteOrder::AsIs).unwrap();
        prop_assert_eq!(decoded, bytes);
    }

    #[test]
    fn hex_decode_reversed_is_byte_reversal(bytes in any::<[u8; 32]>()) {
        let text = encoding::encode(&bytes);
        let decoded: [u8; 32] = encoding::decode_fixed(&text, ByteOrder::Reversed).unwrap();

        let mut reversed = bytes;
        reversed.reverse();
        prop_assert_eq!(decoded, reversed);
    }

    #[test]
    fn hex_encode_length_law(bytes in prop::collection::vec(any::<u8>(), 0..=128)) {
        let text = encoding::encode(&bytes);
        prop_assert_eq!(text.len(), 2 * bytes.len());
        prop_assert!(text.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn hex_decode_rejects_wrong_length(len in 0usize..128) {
        // any length other than 64 characters must fail for a 32-byte target
        prop_assume!(len != 64);
        let text: String = core::iter::repeat('a').take(len).collect();
        prop_assert!(encoding::decode_fixed::<32>(&text, ByteOrder::AsIs).is_err());
    }

    #[test]
    fn hex_decode_rejects_non_hex(position in 0usize..64) {
        let mut text = "ab".repeat(32);
        text.replace_range(position..position + 1, "g");
        prop_assert!(encoding::decode_fixed::<32>(&text, ByteOrder::AsIs).is_err());
    }

    #[test]
    fn clamp_is_idempotent(scalar in any::<[u8; 32]>()) {
        let once = clamp_scalar_bytes(scalar);
        prop_assert_eq!(clamp_scalar_bytes(once), once);
    }

    #[test]
    fn clamp_fixes_the_mask_bits(scalar in any::<[u8; 32]>()) {
        let clamped = clamp_scalar_bytes(scalar);
        prop_assert_eq!(clamped[0] & 7, 0);
        prop_assert_eq!(clamped[31] & 128, 0);
        prop_assert_eq!(clamped[31] & 64, 64);
    }

    #[test]
    fn derivation_and_signing_invariants(
        seed in any::<[u8; 32]>(),
        message in prop::collection::vec(any::<u8>(), 0..=256),
    ) {
        let (public_key, secret_key) = KeccakEd25519::derive_keypair(&seed).unwrap();
        prop_assert_eq!(secret_key.to_hex().len(), 64);
        prop_assert_eq!(public_key.to_hex().len(), 64);

        let sig1 = KeccakEd25519::sign(&message, &public_key, &secret_key).unwrap();
        let sig2 = KeccakEd25519::sign(&message, &public_key, &secret_key).unwrap();
        prop_assert_eq!(sig1.to_bytes(), sig2.to_bytes());
        prop_assert_eq!(sig1.to_bytes().len(), 64);

        prop_assert!(satisfies_group_equation(&message, &sig1, &public_key));
    }

    #[test]
    fn key_texts_survive_a_parse_cycle(seed in any::<[u8; 32]>()) {
        let (public_key, secret_key) = KeccakEd25519::derive_keypair(&seed).unwrap();

        let reloaded = KeccakEd25519SecretKey::from_hex(&secret_key.to_hex()).unwrap();
        let reloaded_hex = reloaded.to_hex();
        let secret_hex = secret_key.to_hex();
        prop_assert_eq!(reloaded_hex.as_str(), secret_hex.as_str());
        prop_assert_eq!(reloaded.public_key().unwrap(), public_key);
    }
}
