//! Backend capability introspection.
//!
//! Describes what a backend can do: qubit count, supported gates, shot
//! limits, and whether it is a simulator. Executors use this to reject
//! circuits before submission; the demos use it for routing messages.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Hardware capabilities of a quantum backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the backend.
    pub name: String,
    /// Number of qubits available.
    pub num_qubits: u32,
    /// Supported gate set (OpenQASM 3 naming convention).
    pub gate_set: GateSet,
    /// Maximum number of shots per job.
    pub max_shots: u32,
    /// Whether this is a simulator (`true`) vs real hardware (`false`).
    pub is_simulator: bool,
}

impl Capabilities {
    /// Create capabilities for a local statevector simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            name: "simulator".into(),
            num_qubits,
            gate_set: GateSet::universal(),
            max_shots: 100_000,
            is_simulator: true,
        }
    }

    /// Create capabilities for a remote device that accepts OpenQASM 3.0
    /// and transpiles server-side.
    pub fn remote_device(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            gate_set: GateSet::universal(),
            max_shots: 100_000,
            is_simulator: false,
        }
    }
}

/// Set of supported gate names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateSet {
    gates: FxHashSet<String>,
}

impl GateSet {
    /// Create an empty gate set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate set accepting every gate the IR can express.
    pub fn universal() -> Self {
        Self::from_names([
            "id", "x", "y", "z", "h", "s", "sdg", "t", "tdg", "cx", "cy", "cz", "swap", "ccx",
            "mcx",
        ])
    }

    /// Create a gate set from gate names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            gates: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a gate name is supported.
    pub fn contains(&self, name: &str) -> bool {
        self.gates.contains(name)
    }

    /// Number of supported gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the gate set is empty.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universal_gate_set() {
        let gates = GateSet::universal();
        assert!(gates.contains("h"));
        assert!(gates.contains("mcx"));
        assert!(!gates.contains("rz"));
    }

    #[test]
    fn test_simulator_capabilities() {
        let caps = Capabilities::simulator(24);
        assert!(caps.is_simulator);
        assert_eq!(caps.num_qubits, 24);
        assert!(caps.gate_set.contains("ccx"));
    }

    #[test]
    fn test_remote_device_capabilities() {
        let caps = Capabilities::remote_device("ibm_torino", 133);
        assert!(!caps.is_simulator);
        assert_eq!(caps.name, "ibm_torino");
    }
}
