//! Error types for QASM emission.

use thiserror::Error;

/// Errors that can occur while emitting QASM.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EmitError {
    /// Instruction has no QASM 3.0 representation.
    #[error("Instruction '{0}' cannot be represented in OpenQASM 3.0")]
    UnsupportedInstruction(String),

    /// Instruction operands are malformed.
    #[error("Malformed instruction '{name}': {reason}")]
    MalformedInstruction {
        /// Instruction name.
        name: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// Result type for QASM emission.
pub type EmitResult<T> = Result<T, EmitError>;
