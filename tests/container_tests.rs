//! Integration tests for the stack container codec.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use iiotstack::container::{decode, encode, encode_with, inspect, MIN_CONTAINER_LEN};
use iiotstack::crypto::{NONCE_LEN, SALT_LEN, TAG_LEN};
use iiotstack::errors::StackError;

const PASSWORD: &[u8] = b"correct-horse-battery";

#[test]
fn roundtrip_recovers_exact_bytes() {
    let plaintext = br#"{"instances":[],"global_settings":{"timezone":"UTC"}}"#;

    let text = encode(plaintext, PASSWORD).expect("encode");
    let recovered = decode(&text, PASSWORD).expect("decode");

    assert_eq!(recovered, plaintext);
}

#[test]
fn same_input_encodes_differently_each_time() {
    let a = encode(b"same", PASSWORD).expect("encode a");
    let b = encode(b"same", PASSWORD).expect("encode b");
    assert_ne!(a, b, "fresh salt and nonce must change the container");

    let la = inspect(&a).unwrap();
    let lb = inspect(&b).unwrap();
    assert_ne!(la.salt, lb.salt);
    assert_ne!(la.nonce, lb.nonce);
}

#[test]
fn container_length_matches_layout() {
    let text = encode(b"0123456789", PASSWORD).expect("encode");
    let bytes = BASE64.decode(&text).expect("standard base64");
    assert_eq!(bytes.len(), SALT_LEN + NONCE_LEN + 10 + TAG_LEN);
}

#[test]
fn encode_with_places_salt_then_nonce() {
    let salt = [0x42u8; SALT_LEN];
    let nonce = [0x24u8; NONCE_LEN];

    let text = encode_with(b"test payload", b"password", &salt, &nonce).expect("encode");
    let bytes = BASE64.decode(&text).unwrap();

    assert_eq!(&bytes[..SALT_LEN], &salt);
    assert_eq!(&bytes[SALT_LEN..MIN_CONTAINER_LEN], &nonce);
    assert_eq!(decode(&text, b"password").unwrap(), b"test payload");
}

#[test]
fn wrong_password_fails_closed() {
    let text = encode(b"{\"instances\":[]}", PASSWORD).expect("encode");

    let attempts: [&[u8]; 4] = [
        b"wrong-password",
        b"",
        b"correct-horse-batter",
        b"correct-horse-battery ",
    ];
    for wrong in attempts {
        assert!(matches!(
            decode(&text, wrong),
            Err(StackError::AuthenticationFailure)
        ));
    }
}

#[test]
fn any_flipped_bit_is_authentication_failure() {
    let text = encode(b"{\"instances\":[]}", PASSWORD).expect("encode");
    let bytes = BASE64.decode(&text).unwrap();

    // One bit per byte keeps the PBKDF2 cost reasonable while touching
    // salt, nonce, ciphertext and tag.
    for byte in 0..bytes.len() {
        let mut tampered = bytes.clone();
        tampered[byte] ^= 1 << (byte % 8);
        let result = decode(&BASE64.encode(&tampered), PASSWORD);
        assert!(
            matches!(result, Err(StackError::AuthenticationFailure)),
            "tampering byte {byte} was not detected"
        );
    }
}

#[test]
fn truncated_container_is_malformed() {
    let short = BASE64.encode([0u8; MIN_CONTAINER_LEN - 1]);
    assert!(matches!(
        decode(&short, PASSWORD),
        Err(StackError::MalformedContainer(_))
    ));
}

#[test]
fn truncated_tag_fails_authentication() {
    let text = encode(b"data", PASSWORD).expect("encode");
    let mut bytes = BASE64.decode(&text).unwrap();
    bytes.truncate(bytes.len() - 1);

    assert!(matches!(
        decode(&BASE64.encode(&bytes), PASSWORD),
        Err(StackError::AuthenticationFailure)
    ));
}

#[test]
fn non_base64_is_malformed() {
    assert!(matches!(
        decode("this is not a stack file!", PASSWORD),
        Err(StackError::MalformedContainer(_))
    ));
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let text = encode(b"payload", PASSWORD).expect("encode");
    let padded = format!("  {text}\r\n");
    assert_eq!(decode(&padded, PASSWORD).unwrap(), b"payload");
}

#[test]
fn inspect_reports_sections_without_password() {
    let text = encode(b"12345", PASSWORD).expect("encode");
    let layout = inspect(&text).expect("inspect");
    assert_eq!(layout.sealed.len(), 5 + TAG_LEN);
}
