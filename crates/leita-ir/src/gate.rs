//! Quantum gate types.
//!
//! Amplitude amplification circuits only ever need a discrete gate set, so
//! there are no symbolic rotation parameters here. The one variable-arity
//! member is [`Gate::Mcx`], the multi-controlled NOT that phase oracles and
//! diffusers are built from.

use serde::{Deserialize, Serialize};

/// A quantum gate with known semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Y gate.
    CY,
    /// Controlled-Z gate.
    CZ,
    /// SWAP gate.
    Swap,
    /// Toffoli gate (CCX).
    CCX,
    /// Multi-controlled NOT: `controls` control qubits, one target.
    ///
    /// Operand order is controls first, target last. `Mcx { controls: 2 }`
    /// is equivalent to [`Gate::CCX`]; the dedicated variants are kept for
    /// the common fixed arities.
    Mcx {
        /// Number of control qubits (at least 1).
        controls: u32,
    },
}

impl Gate {
    /// Get the OpenQASM-style name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::I => "id",
            Gate::X => "x",
            Gate::Y => "y",
            Gate::Z => "z",
            Gate::H => "h",
            Gate::S => "s",
            Gate::Sdg => "sdg",
            Gate::T => "t",
            Gate::Tdg => "tdg",
            Gate::CX => "cx",
            Gate::CY => "cy",
            Gate::CZ => "cz",
            Gate::Swap => "swap",
            Gate::CCX => "ccx",
            Gate::Mcx { .. } => "mcx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::I
            | Gate::X
            | Gate::Y
            | Gate::Z
            | Gate::H
            | Gate::S
            | Gate::Sdg
            | Gate::T
            | Gate::Tdg => 1,

            Gate::CX | Gate::CY | Gate::CZ | Gate::Swap => 2,

            Gate::CCX => 3,

            Gate::Mcx { controls } => controls + 1,
        }
    }

    /// Number of control qubits, if this is a controlled gate.
    pub fn num_controls(&self) -> u32 {
        match self {
            Gate::CX | Gate::CY | Gate::CZ => 1,
            Gate::CCX => 2,
            Gate::Mcx { controls } => *controls,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_arity() {
        assert_eq!(Gate::H.num_qubits(), 1);
        assert_eq!(Gate::CX.num_qubits(), 2);
        assert_eq!(Gate::CCX.num_qubits(), 3);
        assert_eq!(Gate::Mcx { controls: 4 }.num_qubits(), 5);
    }

    #[test]
    fn test_gate_names() {
        assert_eq!(Gate::H.name(), "h");
        assert_eq!(Gate::Mcx { controls: 7 }.name(), "mcx");
    }

    #[test]
    fn test_num_controls() {
        assert_eq!(Gate::H.num_controls(), 0);
        assert_eq!(Gate::CZ.num_controls(), 1);
        assert_eq!(Gate::CCX.num_controls(), 2);
        assert_eq!(Gate::Mcx { controls: 9 }.num_controls(), 9);
    }
}
