//! Leita Hardware Abstraction Layer
//!
//! This crate provides a unified interface for executing circuits on
//! quantum backends, so the same search circuit runs unchanged on the
//! local statevector simulator and on cloud hardware.
//!
//! # Overview
//!
//! - A common [`Backend`] trait for job submission and management
//! - [`Capabilities`] to describe backend features and constraints
//! - Credential handling for the hardware path ([`auth`])
//! - Unified result handling via [`ExecutionResult`] and [`Counts`]
//!
//! # Supported Backends
//!
//! | Backend | Crate | Authentication |
//! |---------|-------|----------------|
//! | Local Simulator | `leita-adapter-sim` | None |
//! | IBM Quantum | `leita-adapter-ibm` | `LEITA_IBM_TOKEN` env var or saved token file |
//!
//! # Example: Running a Circuit
//!
//! ```ignore
//! use leita_hal::Backend;
//! use leita_adapter_sim::SimulatorBackend;
//! use leita_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let circuit = Circuit::bell()?;
//!     let backend = SimulatorBackend::new();
//!
//!     let job_id = backend.submit(&circuit, 1024).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     if let Some((bitstring, count)) = result.counts.most_frequent() {
//!         println!("Most frequent: {} ({} times)", bitstring, count);
//!     }
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod backend;
pub mod capability;
pub mod error;
pub mod job;
pub mod registry;
pub mod result;

pub use auth::{EnvTokenProvider, StoredToken, StoredTokenProvider, TokenProvider};
pub use backend::{Backend, BackendAvailability, BackendConfig, BackendFactory, ValidationResult};
pub use capability::{Capabilities, GateSet};
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use registry::BackendRegistry;
pub use result::{Counts, ExecutionResult};
