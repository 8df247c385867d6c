//! Known-vector test against the real native cipher.
//!
//! Needs the shared library on disk, so it is ignored by default:
//!
//! ```text
//! LEITA_CIPHER_LIB=./libaes.so cargo test -p leita-cipher -- --ignored
//! ```

use leita_cipher::{BlockCipher, Key, SharedLibCipher};

const KEY_HEX: &str = "00112233445566778899aabbccddeeff";
const PLAINTEXT: &[u8] = b"This is a test";
const EXPECTED_CIPHERTEXT_HEX: &str = "3c86e7ec17bb967b9da2f2242d94a634";

#[test]
#[ignore = "requires the native cipher library via LEITA_CIPHER_LIB"]
fn known_vector_matches() {
    let lib_path =
        std::env::var("LEITA_CIPHER_LIB").expect("set LEITA_CIPHER_LIB to the cipher library path");
    let cipher = SharedLibCipher::load(&lib_path).unwrap();

    let key = Key::from_hex(KEY_HEX).unwrap();
    let ciphertext = cipher.encrypt(&key, PLAINTEXT).unwrap();

    assert_eq!(hex::encode(ciphertext), EXPECTED_CIPHERTEXT_HEX);
}

#[test]
#[ignore = "requires the native cipher library via LEITA_CIPHER_LIB"]
fn native_cipher_is_deterministic() {
    let lib_path =
        std::env::var("LEITA_CIPHER_LIB").expect("set LEITA_CIPHER_LIB to the cipher library path");
    let cipher = SharedLibCipher::load(&lib_path).unwrap();

    let key = Key::from_hex(KEY_HEX).unwrap();
    let first = cipher.encrypt(&key, PLAINTEXT).unwrap();
    let second = cipher.encrypt(&key, PLAINTEXT).unwrap();

    assert_eq!(first, second);
}
