//! Key, block, and the cipher trait.

use std::fmt;

use crate::error::{CipherError, CipherResult};

/// Block and key length in bytes. Both sides of the FFI boundary are fixed
/// to this size; the caller owns the sizing of every buffer.
pub const BLOCK_LEN: usize = 16;

/// A 128-bit cipher key.
///
/// Immutable once constructed. Externally keys are 32-character
/// hexadecimal text; internally a fixed 16-byte array.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Key([u8; BLOCK_LEN]);

impl Key {
    /// Parse a key from 32 hexadecimal characters.
    pub fn from_hex(text: &str) -> CipherResult<Self> {
        let bytes = hex::decode(text)?;
        Self::from_bytes(&bytes)
    }

    /// Construct a key from exactly 16 bytes.
    pub fn from_bytes(bytes: &[u8]) -> CipherResult<Self> {
        let array: [u8; BLOCK_LEN] = bytes
            .try_into()
            .map_err(|_| CipherError::InvalidKeyLength { got: bytes.len() })?;
        Ok(Self(array))
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
        &self.0
    }

    /// Hexadecimal rendering of the key.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Key {
    // Keys are secrets; never include the material in debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key").field("bytes", &"[REDACTED]").finish()
    }
}

/// Zero-pad a plaintext to one block.
///
/// Rejects plaintexts longer than [`BLOCK_LEN`]; shorter input is
/// right-padded with zero bytes.
pub fn pad_block(plaintext: &[u8]) -> CipherResult<[u8; BLOCK_LEN]> {
    if plaintext.len() > BLOCK_LEN {
        return Err(CipherError::PlaintextTooLong {
            got: plaintext.len(),
        });
    }
    let mut block = [0u8; BLOCK_LEN];
    block[..plaintext.len()].copy_from_slice(plaintext);
    Ok(block)
}

/// A fixed-size block cipher.
///
/// Implementations must be pure: identical inputs always produce identical
/// output, with no side effects beyond the call itself.
pub trait BlockCipher: Send + Sync {
    /// Encrypt one full block under `key`.
    fn encrypt_block(&self, key: &Key, block: &[u8; BLOCK_LEN]) -> CipherResult<[u8; BLOCK_LEN]>;

    /// Encrypt a plaintext of at most one block, zero-padding as needed.
    fn encrypt(&self, key: &Key, plaintext: &[u8]) -> CipherResult<[u8; BLOCK_LEN]> {
        let block = pad_block(plaintext)?;
        self.encrypt_block(key, &block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic in-crate stand-in for the native cipher.
    struct XorCipher;

    impl BlockCipher for XorCipher {
        fn encrypt_block(
            &self,
            key: &Key,
            block: &[u8; BLOCK_LEN],
        ) -> CipherResult<[u8; BLOCK_LEN]> {
            let mut out = [0u8; BLOCK_LEN];
            for i in 0..BLOCK_LEN {
                out[i] = key.as_bytes()[i] ^ block[i].rotate_left(3);
            }
            Ok(out)
        }
    }

    const KEY_HEX: &str = "00112233445566778899aabbccddeeff";

    #[test]
    fn test_key_from_hex() {
        let key = Key::from_hex(KEY_HEX).unwrap();
        assert_eq!(key.as_bytes()[0], 0x00);
        assert_eq!(key.as_bytes()[15], 0xff);
        assert_eq!(key.to_hex(), KEY_HEX);
    }

    #[test]
    fn test_key_rejects_wrong_length() {
        assert!(matches!(
            Key::from_hex("0011"),
            Err(CipherError::InvalidKeyLength { got: 2 })
        ));
        assert!(matches!(
            Key::from_hex(&"00".repeat(17)),
            Err(CipherError::InvalidKeyLength { got: 17 })
        ));
    }

    #[test]
    fn test_key_rejects_bad_hex() {
        assert!(matches!(
            Key::from_hex("zz112233445566778899aabbccddeeff"),
            Err(CipherError::KeyParse(_))
        ));
    }

    #[test]
    fn test_key_debug_redacted() {
        let key = Key::from_hex(KEY_HEX).unwrap();
        assert!(!format!("{key:?}").contains("ff"));
    }

    #[test]
    fn test_pad_block() {
        let block = pad_block(b"This is a test").unwrap();
        assert_eq!(&block[..14], b"This is a test");
        assert_eq!(&block[14..], &[0u8, 0u8]);

        assert!(matches!(
            pad_block(&[0u8; 17]),
            Err(CipherError::PlaintextTooLong { got: 17 })
        ));
    }

    #[test]
    fn test_encrypt_is_deterministic() {
        let key = Key::from_hex(KEY_HEX).unwrap();
        let a = XorCipher.encrypt(&key, b"This is a test").unwrap();
        let b = XorCipher.encrypt(&key, b"This is a test").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encrypt_pads_like_encrypt_block() {
        let key = Key::from_hex(KEY_HEX).unwrap();
        let via_encrypt = XorCipher.encrypt(&key, b"short").unwrap();
        let via_block = XorCipher
            .encrypt_block(&key, &pad_block(b"short").unwrap())
            .unwrap();
        assert_eq!(via_encrypt, via_block);
    }

    #[test]
    fn test_encrypt_rejects_long_plaintext() {
        let key = Key::from_hex(KEY_HEX).unwrap();
        let result = XorCipher.encrypt(&key, b"This plaintext is too long");
        assert!(matches!(
            result,
            Err(CipherError::PlaintextTooLong { got: 26 })
        ));
    }
}
