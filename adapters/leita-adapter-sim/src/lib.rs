//! Leita Local Statevector Simulator
//!
//! This crate provides a local quantum simulator for testing, development,
//! and small-scale searches. It uses statevector simulation, which gives
//! exact amplitudes but is limited to roughly 20-25 qubits by memory.
//!
//! # Features
//!
//! - **Exact simulation**: full statevector representation
//! - **Whole gate set**: every gate `leita-ir` can express, including the
//!   variable-arity multi-controlled NOT
//! - **Measurement sampling**: probabilistic sampling over the measured
//!   classical bits with configurable shots
//!
//! # Example
//!
//! ```ignore
//! use leita_adapter_sim::SimulatorBackend;
//! use leita_hal::Backend;
//! use leita_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SimulatorBackend::new();
//!
//!     let circuit = Circuit::bell()?;
//!     let job_id = backend.submit(&circuit, 1024).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     // Expect ~50% |00⟩ and ~50% |11⟩
//!     println!("Results: {:?}", result.counts);
//!     Ok(())
//! }
//! ```
//!
//! The [`Statevector`] engine is exported directly so circuit-level tests
//! can assert on amplitudes instead of sampled counts.

mod simulator;
mod statevector;

pub use simulator::SimulatorBackend;
pub use statevector::Statevector;
