//! Phase oracle construction.

use leita_ir::{Circuit, QubitId};

use crate::error::{GroverError, GroverResult};
use crate::pattern::BitPattern;

/// Append the phase oracle for `target` to `circuit`.
///
/// The oracle marks the basis state equal to `target` by multiplying its
/// amplitude by −1, leaving every other basis state unchanged:
///
/// 1. X on every data qubit whose target bit is 0, so the marked state
///    becomes all-ones.
/// 2. H on the ancilla, a multi-controlled NOT from all data qubits onto
///    the ancilla, H on the ancilla — a multi-controlled Z in disguise.
/// 3. Undo the X masks.
///
/// The ancilla must be in |1⟩ on entry; the oracle returns it to |1⟩
/// unentangled, so the same fragment can be appended once per iteration.
pub fn apply_oracle(
    circuit: &mut Circuit,
    data: &[QubitId],
    ancilla: QubitId,
    target: &BitPattern,
) -> GroverResult<()> {
    if target.len() != data.len() {
        return Err(GroverError::PatternLengthMismatch {
            expected: data.len(),
            got: target.len(),
        });
    }

    for (i, &qubit) in data.iter().enumerate() {
        if !target.bit(i) {
            circuit.x(qubit)?;
        }
    }

    circuit.h(ancilla)?;
    circuit.mcx(data, ancilla)?;
    circuit.h(ancilla)?;

    for (i, &qubit) in data.iter().enumerate() {
        if !target.bit(i) {
            circuit.x(qubit)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_qubits(n: usize) -> Vec<QubitId> {
        (0..n).map(QubitId::from).collect()
    }

    #[test]
    fn test_oracle_gate_counts() {
        let target: BitPattern = "101".parse().unwrap();
        let mut circuit = Circuit::with_size("oracle", 4, 0);
        apply_oracle(&mut circuit, &data_qubits(3), QubitId(3), &target).unwrap();

        // One X mask pair around the middle qubit, two H on the ancilla,
        // one MCX.
        assert_eq!(circuit.dag().num_ops(), 5);
    }

    #[test]
    fn test_all_ones_target_needs_no_masks() {
        let target: BitPattern = "111".parse().unwrap();
        let mut circuit = Circuit::with_size("oracle", 4, 0);
        apply_oracle(&mut circuit, &data_qubits(3), QubitId(3), &target).unwrap();

        assert_eq!(circuit.dag().num_ops(), 3); // H, MCX, H
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let target: BitPattern = "10".parse().unwrap();
        let mut circuit = Circuit::with_size("oracle", 4, 0);
        let result = apply_oracle(&mut circuit, &data_qubits(3), QubitId(3), &target);
        assert!(matches!(
            result,
            Err(GroverError::PatternLengthMismatch {
                expected: 3,
                got: 2
            })
        ));
    }
}
