//! Integration tests for the iiotstack crypto module.

use iiotstack::crypto::{
    derive_key, generate_nonce, generate_salt, open, seal, DerivedKey, KEY_LEN, NONCE_LEN, TAG_LEN,
};
use iiotstack::errors::StackError;

// ---------------------------------------------------------------------------
// Seal / open round-trip
// ---------------------------------------------------------------------------

#[test]
fn seal_open_roundtrip() {
    let key = DerivedKey::new([0xABu8; KEY_LEN]);
    let nonce = generate_nonce().expect("nonce");
    let plaintext = br#"{"instances":[{"app_id":"postgres","instance_name":"db"}]}"#;

    let sealed = seal(&key, &nonce, plaintext).expect("seal should succeed");

    // Ciphertext carries the 16-byte tag on top of the plaintext.
    assert_eq!(sealed.len(), plaintext.len() + TAG_LEN);

    let recovered = open(&key, &nonce, &sealed).expect("open should succeed");
    assert_eq!(recovered, plaintext);
}

#[test]
fn open_with_wrong_key_fails() {
    let key = DerivedKey::new([0x11u8; KEY_LEN]);
    let wrong_key = DerivedKey::new([0x22u8; KEY_LEN]);
    let nonce = [9u8; NONCE_LEN];

    let sealed = seal(&key, &nonce, b"TOP_SECRET").expect("seal");
    let result = open(&wrong_key, &nonce, &sealed);

    assert!(matches!(result, Err(StackError::AuthenticationFailure)));
}

#[test]
fn every_flipped_bit_is_detected() {
    let key = DerivedKey::new([0xBBu8; KEY_LEN]);
    let nonce = [3u8; NONCE_LEN];
    let sealed = seal(&key, &nonce, b"VALUE=abc").expect("seal");

    for byte in 0..sealed.len() {
        for bit in 0..8 {
            let mut tampered = sealed.clone();
            tampered[byte] ^= 1 << bit;
            assert!(
                matches!(open(&key, &nonce, &tampered), Err(StackError::AuthenticationFailure)),
                "flip of bit {bit} in byte {byte} went undetected"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Key derivation (PBKDF2-HMAC-SHA256)
// ---------------------------------------------------------------------------

#[test]
fn derive_key_same_inputs_same_output() {
    let salt = generate_salt().expect("salt");

    let key1 = derive_key(b"my-secure-passphrase", &salt);
    let key2 = derive_key(b"my-secure-passphrase", &salt);

    assert_eq!(key1, key2, "same password + salt must produce the same key");
}

#[test]
fn derive_key_different_salts_different_keys() {
    let key1 = derive_key(b"same-password", &generate_salt().expect("salt 1"));
    let key2 = derive_key(b"same-password", &generate_salt().expect("salt 2"));

    assert_ne!(key1, key2, "different salts must produce different keys");
}

#[test]
fn derive_key_different_passwords_different_keys() {
    let salt = generate_salt().expect("salt");

    let key1 = derive_key(b"password-one", &salt);
    let key2 = derive_key(b"password-two", &salt);

    assert_ne!(key1, key2, "different passwords must produce different keys");
}

// ---------------------------------------------------------------------------
// End-to-end: password -> key -> seal/open
// ---------------------------------------------------------------------------

#[test]
fn full_crypto_pipeline() {
    let salt = generate_salt().expect("salt");
    let nonce = generate_nonce().expect("nonce");

    let sealed = {
        let key = derive_key(b"correct-horse-battery", &salt);
        seal(&key, &nonce, b"payload").expect("seal")
    };

    // A fresh derivation from the same inputs opens it.
    let key = derive_key(b"correct-horse-battery", &salt);
    assert_eq!(open(&key, &nonce, &sealed).expect("open"), b"payload");
}
