//! OpenQASM 3.0 emission for Leita circuits.
//!
//! Remote backends accept circuits as OpenQASM 3.0 source text. This crate
//! serializes a [`leita_ir::Circuit`] into that form; there is no parser,
//! because nothing in the stack consumes QASM.
//!
//! ```
//! use leita_ir::Circuit;
//! use leita_qasm3::emit;
//!
//! let circuit = Circuit::bell().unwrap();
//! let qasm = emit(&circuit).unwrap();
//! assert!(qasm.starts_with("OPENQASM 3.0;"));
//! ```

mod emitter;
mod error;

pub use emitter::emit;
pub use error::{EmitError, EmitResult};
