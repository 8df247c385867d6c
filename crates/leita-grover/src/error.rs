//! Error types for the Grover circuit builders.

use leita_ir::IrError;
use thiserror::Error;

/// Errors that can occur while building search circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GroverError {
    /// Target pattern has no bits.
    #[error("Target pattern is empty")]
    EmptyPattern,

    /// Target pattern contains a character other than '0' or '1'.
    #[error("Invalid character '{ch}' at position {position} in bit pattern")]
    InvalidPatternChar {
        /// The offending character.
        ch: char,
        /// Zero-based position in the input string.
        position: usize,
    },

    /// Pattern length does not match the data register width.
    #[error("Pattern has {got} bits but the data register has {expected} qubits")]
    PatternLengthMismatch {
        /// Number of data qubits.
        expected: usize,
        /// Number of pattern bits.
        got: usize,
    },

    /// More bits requested than the source bytes contain.
    #[error("Requested {requested} bits but only {available} are available")]
    NotEnoughBits {
        /// Bits requested.
        requested: usize,
        /// Bits available in the source.
        available: usize,
    },

    /// Underlying circuit construction failed.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for Grover circuit construction.
pub type GroverResult<T> = Result<T, GroverError>;
