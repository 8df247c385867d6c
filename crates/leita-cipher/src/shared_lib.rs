//! Runtime loading of the native cipher routine.

use std::path::{Path, PathBuf};

use libloading::Library;
use tracing::debug;

use crate::cipher::{BLOCK_LEN, BlockCipher, Key};
use crate::error::{CipherError, CipherResult};

/// Name of the routine looked up in the shared library by default.
pub const DEFAULT_SYMBOL: &str = "encrypt";

/// C signature of the native routine: three fixed-size byte buffers by
/// pointer (key, plaintext, output ciphertext), no return value.
type EncryptFn = unsafe extern "C" fn(*const u8, *const u8, *mut u8);

/// A [`BlockCipher`] backed by a routine in a shared library.
///
/// The library is loaded once at construction; the symbol is resolved
/// eagerly so a missing routine fails at load time, not on first use.
pub struct SharedLibCipher {
    library: Library,
    symbol: String,
    path: PathBuf,
}

impl SharedLibCipher {
    /// Load a cipher library and resolve the default `encrypt` routine.
    pub fn load(path: impl AsRef<Path>) -> CipherResult<Self> {
        Self::with_symbol(path, DEFAULT_SYMBOL)
    }

    /// Load a cipher library and resolve a routine by name.
    pub fn with_symbol(path: impl AsRef<Path>, symbol: impl Into<String>) -> CipherResult<Self> {
        let path = path.as_ref().to_path_buf();
        let symbol = symbol.into();

        // SAFETY: loading a shared object runs its initializers; the
        // caller vouches for the library being the cipher it claims.
        let library = unsafe {
            Library::new(&path).map_err(|e| CipherError::LibraryLoad {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        };

        // Resolve once now so a bad library is rejected up front.
        // SAFETY: only the signature is assumed, no call happens here.
        unsafe {
            library
                .get::<EncryptFn>(symbol.as_bytes())
                .map_err(|e| CipherError::MissingSymbol {
                    symbol: symbol.clone(),
                    message: e.to_string(),
                })?;
        }

        debug!("loaded cipher routine '{}' from {}", symbol, path.display());

        Ok(Self {
            library,
            symbol,
            path,
        })
    }

    /// Path of the loaded library.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlockCipher for SharedLibCipher {
    fn encrypt_block(&self, key: &Key, block: &[u8; BLOCK_LEN]) -> CipherResult<[u8; BLOCK_LEN]> {
        // SAFETY: the symbol was validated at load time against the fixed
        // three-pointer signature, and all three buffers are exactly
        // BLOCK_LEN bytes and live for the duration of the call.
        let f = unsafe {
            self.library
                .get::<EncryptFn>(self.symbol.as_bytes())
                .map_err(|e| CipherError::MissingSymbol {
                    symbol: self.symbol.clone(),
                    message: e.to_string(),
                })?
        };

        let mut ciphertext = [0u8; BLOCK_LEN];
        // SAFETY: see above; the routine writes exactly BLOCK_LEN bytes
        // into the output buffer and reads nothing else.
        unsafe {
            f(key.as_bytes().as_ptr(), block.as_ptr(), ciphertext.as_mut_ptr());
        }
        Ok(ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_library() {
        let result = SharedLibCipher::load("/nonexistent/libcipher.so");
        match result {
            Err(CipherError::LibraryLoad { path, .. }) => {
                assert!(path.contains("nonexistent"));
            }
            other => panic!("unexpected: {:?}", other.err()),
        }
    }
}
