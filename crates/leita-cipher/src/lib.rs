//! Block-cipher foreign-function adapter.
//!
//! The search target of a known-plaintext attack is defined by an external
//! block cipher: 16-byte key plus 16-byte plaintext block in, 16-byte
//! ciphertext block out. The cipher itself is an opaque collaborator — a
//! native routine in a shared library — so this crate only owns the
//! statically typed boundary around it:
//!
//! - [`Key`] and block handling (hex parsing, zero-padding, length checks)
//! - the [`BlockCipher`] trait, the seam the rest of the stack programs to
//! - [`SharedLibCipher`], which loads the named native routine at runtime
//!
//! ```no_run
//! use leita_cipher::{BlockCipher, Key, SharedLibCipher};
//!
//! let cipher = SharedLibCipher::load("./libaes.so")?;
//! let key = Key::from_hex("00112233445566778899aabbccddeeff")?;
//! let ciphertext = cipher.encrypt(&key, b"This is a test")?;
//! # Ok::<(), leita_cipher::CipherError>(())
//! ```

mod cipher;
mod error;
mod shared_lib;

pub use cipher::{BLOCK_LEN, BlockCipher, Key, pad_block};
pub use error::{CipherError, CipherResult};
pub use shared_lib::SharedLibCipher;
