//! Grover search circuit builders.
//!
//! Grover's algorithm finds a marked item in an unstructured space of
//! N = 2^n candidates with O(sqrt(N)) oracle queries, against O(N)
//! classically. This crate builds the three pieces as reusable circuit
//! fragments over [`leita_ir::Circuit`]:
//!
//! - [`oracle::apply_oracle`] — phase-flips the amplitude of exactly the
//!   basis state matching a target [`BitPattern`]
//! - [`diffuser::apply_diffuser`] — reflection about the mean amplitude
//! - [`search::search_circuit`] — superposition, the fixed number of
//!   (oracle, diffuser) rounds, and measurement
//!
//! The assembled circuit is backend-agnostic: the same object runs on the
//! local statevector simulator and, via QASM emission, on cloud hardware.
//!
//! # Example
//!
//! ```
//! use leita_grover::{BitPattern, search::{optimal_iterations, search_circuit}};
//!
//! let target: BitPattern = "1111".parse().unwrap();
//! let circuit = search_circuit(&target).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 5);          // 4 data + 1 ancilla
//! assert_eq!(circuit.num_clbits(), 4);          // data qubits only
//! assert_eq!(optimal_iterations(4), 3);         // floor(pi/4 * sqrt(16))
//! ```

pub mod diffuser;
pub mod error;
pub mod oracle;
pub mod pattern;
pub mod search;

pub use error::{GroverError, GroverResult};
pub use pattern::BitPattern;
