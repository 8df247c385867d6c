//! Error types for the IBM Quantum adapter.

use thiserror::Error;

/// Result type for IBM operations.
pub type IbmResult<T> = Result<T, IbmError>;

/// Errors that can occur when using IBM Quantum.
#[derive(Debug, Error)]
pub enum IbmError {
    /// Credential token could not be used to build a client.
    #[error("Invalid IBM Quantum API token")]
    InvalidToken,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error.
    #[error("IBM Quantum API error: {message}")]
    Api {
        /// Error code from the API.
        code: Option<String>,
        /// Error message.
        message: String,
    },

    /// Job not found.
    #[error("Job not found: {0}")]
    JobNotFound(String),

    /// Job failed on the remote side.
    #[error("Job failed: {0}")]
    JobFailed(String),

    /// Circuit could not be serialized for submission.
    #[error("Circuit conversion error: {0}")]
    CircuitError(String),

    /// Named backend not available.
    #[error("Backend not available: {0}")]
    BackendUnavailable(String),

    /// No device satisfies the minimum-qubit requirement.
    #[error("No operational hardware backend with at least {min_qubits} qubits")]
    NoBackendAvailable {
        /// Qubits the circuit needs.
        min_qubits: usize,
    },

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<IbmError> for leita_hal::HalError {
    fn from(e: IbmError) -> Self {
        match e {
            IbmError::InvalidToken => leita_hal::HalError::AuthenticationFailed(e.to_string()),
            IbmError::JobNotFound(id) => leita_hal::HalError::JobNotFound(id),
            IbmError::JobFailed(msg) => leita_hal::HalError::JobFailed(msg),
            IbmError::BackendUnavailable(msg) => leita_hal::HalError::BackendUnavailable(msg),
            IbmError::NoBackendAvailable { .. } => {
                leita_hal::HalError::BackendUnavailable(e.to_string())
            }
            IbmError::CircuitError(msg) => leita_hal::HalError::InvalidCircuit(msg),
            _ => leita_hal::HalError::Backend(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_backend_available_display() {
        let err = IbmError::NoBackendAvailable { min_qubits: 129 };
        assert!(err.to_string().contains("129"));
    }

    #[test]
    fn test_job_not_found_to_hal() {
        let hal: leita_hal::HalError = IbmError::JobNotFound("j1".into()).into();
        assert!(matches!(hal, leita_hal::HalError::JobNotFound(id) if id == "j1"));
    }

    #[test]
    fn test_no_backend_to_hal_unavailable() {
        let hal: leita_hal::HalError = IbmError::NoBackendAvailable { min_qubits: 5 }.into();
        assert!(matches!(hal, leita_hal::HalError::BackendUnavailable(_)));
    }

    #[test]
    fn test_invalid_token_to_hal_auth() {
        let hal: leita_hal::HalError = IbmError::InvalidToken.into();
        assert!(matches!(hal, leita_hal::HalError::AuthenticationFailed(_)));
    }

    #[test]
    fn test_circuit_error_to_hal_invalid_circuit() {
        let hal: leita_hal::HalError = IbmError::CircuitError("bad gate".into()).into();
        assert!(matches!(hal, leita_hal::HalError::InvalidCircuit(_)));
    }
}
