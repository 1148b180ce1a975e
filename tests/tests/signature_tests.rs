//! Integration tests for the Keccak-based Ed25519 signature scheme

use rand::rngs::OsRng;
use xemcrypt::prelude::*;
use xemcrypt_tests::satisfies_group_equation;

#[test]
fn test_keccak_ed25519_signature() {
    let mut rng = OsRng;

    // Generate keypair
    let (public_key, secret_key) = KeccakEd25519::keypair(&mut rng).unwrap();

    // Message to sign
    let message = b"Test message for Keccak-Ed25519 signature";

    // Sign the message
    let signature = KeccakEd25519::sign(message, &public_key, &secret_key).unwrap();

    // The signature must satisfy the group equation against the derived key
    assert!(satisfies_group_equation(message, &signature, &public_key));

    // A modified message must not
    let modified_message = b"Modified message that should not verify";
    assert!(!satisfies_group_equation(
        modified_message,
        &signature,
        &public_key
    ));
}

#[test]
fn test_round_trip_through_hex_texts() {
    let mut rng = OsRng;
    let (public_key, secret_key) = KeccakEd25519::keypair(&mut rng).unwrap();

    // Export both keys as text and load them back, as a wallet would
    let secret_text = secret_key.to_hex();
    let public_text = public_key.to_hex();

    let loaded_secret = KeccakEd25519SecretKey::from_hex(&secret_text).unwrap();
    let loaded_public = KeccakEd25519PublicKey::from_hex(&public_text).unwrap();
    assert_eq!(loaded_public, public_key);
    assert_eq!(loaded_secret.public_key().unwrap(), public_key);

    let message = b"signed after a text round trip";
    let signature = KeccakEd25519::sign(message, &loaded_public, &loaded_secret).unwrap();
    assert!(satisfies_group_equation(message, &signature, &loaded_public));
}

#[test]
fn test_signing_is_deterministic_across_loads() {
    let seed = [13u8; 32];
    let (public1, secret1) = KeccakEd25519::derive_keypair(&seed).unwrap();
    let (public2, secret2) = KeccakEd25519::derive_keypair(&seed).unwrap();
    assert_eq!(public1, public2);

    let message = b"same seed, same signature";
    let sig1 = KeccakEd25519::sign(message, &public1, &secret1).unwrap();
    let sig2 = KeccakEd25519::sign(message, &public2, &secret2).unwrap();
    assert_eq!(sig1.to_bytes(), sig2.to_bytes());
}

#[test]
fn test_keypair_reproducible_under_fixed_rng() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng1 = ChaCha20Rng::from_seed([42u8; 32]);
    let mut rng2 = ChaCha20Rng::from_seed([42u8; 32]);

    let (public1, secret1) = KeccakEd25519::keypair(&mut rng1).unwrap();
    let (public2, secret2) = KeccakEd25519::keypair(&mut rng2).unwrap();

    assert_eq!(public1, public2);
    assert_eq!(secret1.to_hex().as_str(), secret2.to_hex().as_str());
}

#[test]
fn test_zero_seed_reference_vector() {
    let (public_key, secret_key) = KeccakEd25519::derive_keypair(&[0u8; 32]).unwrap();

    assert_eq!(
        secret_key.to_hex().as_str(),
        "0f6f7226432c21d4dfa2a1538a1fdc72ee1faf405a60e5f408b344a2f5aab2dd"
    );
    assert_eq!(
        public_key.to_hex(),
        "81e0fd0cbfeb6109af858eaced36a3baa2306cc3dc0567039e5b99f5a7fb9a29"
    );

    let signature = KeccakEd25519::sign(b"", &public_key, &secret_key).unwrap();
    assert_eq!(signature.to_bytes().len(), 64);
    assert_eq!(
        hex::encode(signature.to_bytes()),
        "42782cd56d0aade4b09ca525b27182be14f329c623daf73033a34f141bdd6ec0\
         15d8edefea1507e281ccbeb8a1147ed6e8188f850c72cc2e58a70f459abc4e09"
    );
    assert!(satisfies_group_equation(b"", &signature, &public_key));
}

#[test]
fn test_signatures_bind_the_public_key() {
    let mut rng = OsRng;
    let (public_key, secret_key) = KeccakEd25519::keypair(&mut rng).unwrap();
    let (other_public, _) = KeccakEd25519::keypair(&mut rng).unwrap();

    let message = b"binding check";
    let signature = KeccakEd25519::sign(message, &public_key, &secret_key).unwrap();
    assert!(!satisfies_group_equation(message, &signature, &other_public));

    // Signing against a mismatched public key bakes the wrong key into the
    // challenge; the result verifies against neither key
    let mismatched = KeccakEd25519::sign(message, &other_public, &secret_key).unwrap();
    assert!(!satisfies_group_equation(message, &mismatched, &public_key));
    assert!(!satisfies_group_equation(message, &mismatched, &other_public));
}

#[test]
fn test_content_digest_utility() {
    // Keccak-256, not SHA3-256: the empty-input digests differ
    assert_eq!(
        keccak256_hex(b""),
        "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
    );
    assert_eq!(keccak256_hex(b"arbitrary content").len(), 64);
}

#[test]
fn test_malformed_key_texts_are_rejected() {
    // 63 characters
    assert!(KeccakEd25519SecretKey::from_hex(
        "575dbb3062267eff57c970a336ebbc8fbcfe12c5bd3ed7bc11eb0481d7704ce"
    )
    .is_err());

    // non-hex character
    assert!(KeccakEd25519PublicKey::from_hex(
        "x5f54ba980fcbb657dbaaa42700539b207873e134d2375efeab5f1ab52f87844"
    )
    .is_err());
}
