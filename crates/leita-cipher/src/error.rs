//! Error types for the cipher adapter.

use thiserror::Error;

/// Errors that can occur at the cipher boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CipherError {
    /// Key is not exactly 16 bytes.
    #[error("Key must be 16 bytes (32 hex characters), got {got} bytes")]
    InvalidKeyLength {
        /// Actual key length in bytes.
        got: usize,
    },

    /// Key text is not valid hexadecimal.
    #[error("Key is not valid hexadecimal: {0}")]
    KeyParse(#[from] hex::FromHexError),

    /// Plaintext exceeds one block.
    #[error("Plaintext must be at most 16 bytes, got {got} bytes")]
    PlaintextTooLong {
        /// Actual plaintext length in bytes.
        got: usize,
    },

    /// Shared library could not be loaded.
    #[error("Failed to load cipher library '{path}': {message}")]
    LibraryLoad {
        /// Path that was attempted.
        path: String,
        /// Loader error message.
        message: String,
    },

    /// Named routine is missing from the loaded library.
    #[error("Cipher library has no '{symbol}' routine: {message}")]
    MissingSymbol {
        /// Symbol that was looked up.
        symbol: String,
        /// Loader error message.
        message: String,
    },
}

/// Result type for cipher operations.
pub type CipherResult<T> = Result<T, CipherError>;
