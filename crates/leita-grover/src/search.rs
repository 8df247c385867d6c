//! Full search circuit assembly.

use std::f64::consts::PI;

use leita_ir::{Circuit, ClbitId, QubitId};

use crate::diffuser::apply_diffuser;
use crate::error::{GroverError, GroverResult};
use crate::oracle::apply_oracle;
use crate::pattern::BitPattern;

/// Number of (oracle, diffuser) rounds for an `n`-qubit search.
///
/// K = floor(pi/4 * sqrt(2^n)), fixed at assembly time; there is no
/// adaptive re-estimation and no early termination.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn optimal_iterations(num_qubits: usize) -> u64 {
    let space = 2f64.powi(num_qubits as i32);
    (PI / 4.0 * space.sqrt()).floor() as u64
}

/// Assemble the complete Grover search circuit for `target`.
///
/// The circuit uses n data qubits plus one ancilla and n classical bits:
///
/// 1. H on every data qubit (uniform superposition)
/// 2. X on the ancilla (the |1⟩ phase-kickback state the oracle expects)
/// 3. K = [`optimal_iterations`] rounds of (oracle, diffuser)
/// 4. Measurement of the data qubits into the classical bits
///
/// The ancilla is never measured. Construction cost scales with K: a
/// 128-bit target is accepted but yields ~10^19 rounds, so assembling it
/// is as intractable as executing it.
pub fn search_circuit(target: &BitPattern) -> GroverResult<Circuit> {
    let n = target.len();
    if n == 0 {
        return Err(GroverError::EmptyPattern);
    }

    #[allow(clippy::cast_possible_truncation)]
    let mut circuit = Circuit::with_size("grover_search", (n + 1) as u32, n as u32);
    let data: Vec<QubitId> = (0..n).map(QubitId::from).collect();
    let ancilla = QubitId::from(n);

    for &qubit in &data {
        circuit.h(qubit)?;
    }
    circuit.x(ancilla)?;

    for _ in 0..optimal_iterations(n) {
        apply_oracle(&mut circuit, &data, ancilla, target)?;
        apply_diffuser(&mut circuit, &data)?;
    }

    for i in 0..n {
        circuit.measure(QubitId::from(i), ClbitId::from(i))?;
    }

    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimal_iterations() {
        assert_eq!(optimal_iterations(2), 1); // floor(pi/4 * 2)    = 1
        assert_eq!(optimal_iterations(3), 2); // floor(pi/4 * 2.83) = 2
        assert_eq!(optimal_iterations(4), 3); // floor(pi/4 * 4)    = 3
        assert_eq!(optimal_iterations(6), 6); // floor(pi/4 * 8)    = 6
    }

    #[test]
    fn test_search_circuit_shape() {
        let target: BitPattern = "1111".parse().unwrap();
        let circuit = search_circuit(&target).unwrap();

        assert_eq!(circuit.num_qubits(), 5); // 4 data + 1 ancilla
        assert_eq!(circuit.num_clbits(), 4);
        assert!(circuit.depth() > 0);
        circuit.dag().verify_integrity().unwrap();
    }

    #[test]
    fn test_search_circuit_round_count() {
        let target: BitPattern = "111".parse().unwrap();
        let circuit = search_circuit(&target).unwrap();

        // Every round contains exactly one multi-controlled NOT in the
        // oracle; the diffuser on 3 qubits adds another.
        let mcx_count = circuit
            .dag()
            .topological_ops()
            .filter(|(_, inst)| inst.name() == "mcx")
            .count() as u64;
        assert_eq!(mcx_count, 2 * optimal_iterations(3));
    }

    #[test]
    fn test_search_rejects_empty_target() {
        let result = BitPattern::from_bytes(&[], 0).and_then(|t| search_circuit(&t));
        assert!(result.is_err());
    }
}
