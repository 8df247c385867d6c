//! Leita IBM Quantum backend
//!
//! Submits circuits to IBM Quantum hardware over the Qiskit Runtime REST
//! API. The credential is resolved through `leita-hal`'s auth module: the
//! `LEITA_IBM_TOKEN` environment variable first, then the token file
//! written by the `save-token` binary.
//!
//! Hardware execution is subject to queueing delay, cost, and availability
//! entirely outside this crate's control; failures propagate to the caller
//! without retries.
//!
//! # Example
//!
//! ```ignore
//! use leita_adapter_ibm::IbmBackend;
//! use leita_hal::Backend;
//!
//! // Pick the least-busy operational device with at least 5 qubits.
//! let backend = IbmBackend::least_busy(5).await?;
//! let job_id = backend.submit(&circuit, 1024).await?;
//! let result = backend.wait(&job_id).await?;
//! ```

mod api;
mod backend;
mod error;

pub use api::{BackendInfo, IbmClient};
pub use backend::IbmBackend;
pub use error::{IbmError, IbmResult};
