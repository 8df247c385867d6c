//! Diffuser (inversion about the mean) construction.

use leita_ir::{Circuit, QubitId};

use crate::error::GroverResult;

/// Append the diffusion operator over `data` to `circuit`.
///
/// Implements reflection about the uniform-superposition mean amplitude
/// (2|s⟩⟨s| − I up to global phase):
///
/// 1. H on all data qubits
/// 2. X on all data qubits
/// 3. controlled phase flip of the all-ones state
/// 4. X on all data qubits
/// 5. H on all data qubits
pub fn apply_diffuser(circuit: &mut Circuit, data: &[QubitId]) -> GroverResult<()> {
    for &qubit in data {
        circuit.h(qubit)?;
    }
    for &qubit in data {
        circuit.x(qubit)?;
    }

    apply_phase_flip(circuit, data)?;

    for &qubit in data {
        circuit.x(qubit)?;
    }
    for &qubit in data {
        circuit.h(qubit)?;
    }

    Ok(())
}

/// Flip the sign of the all-ones basis state over `qubits`.
///
/// Dispatches on width: Z for one qubit, CZ for two, and for three or more
/// the H · (n−1)-controlled-NOT · H sandwich on the last qubit.
fn apply_phase_flip(circuit: &mut Circuit, qubits: &[QubitId]) -> GroverResult<()> {
    match qubits {
        [] => {}
        [only] => {
            circuit.z(*only)?;
        }
        [control, target] => {
            circuit.cz(*control, *target)?;
        }
        [controls @ .., target] => {
            circuit.h(*target)?;
            circuit.mcx(controls, *target)?;
            circuit.h(*target)?;
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
    fn test_diffuser_gate_counts() {
        let mut circuit = Circuit::with_size("diffuser", 4, 0);
        apply_diffuser(&mut circuit, &data_qubits(4)).unwrap();

        // 4 H + 4 X + (H, MCX, H) + 4 X + 4 H
        assert_eq!(circuit.dag().num_ops(), 19);
    }

    #[test]
    fn test_diffuser_two_qubits_uses_cz() {
        let mut circuit = Circuit::with_size("diffuser", 2, 0);
        apply_diffuser(&mut circuit, &data_qubits(2)).unwrap();

        let has_cz = circuit
            .dag()
            .topological_ops()
            .any(|(_, inst)| inst.name() == "cz");
        assert!(has_cz);
    }

    #[test]
    fn test_diffuser_single_qubit_uses_z() {
        let mut circuit = Circuit::with_size("diffuser", 1, 0);
        apply_diffuser(&mut circuit, &data_qubits(1)).unwrap();

        let has_z = circuit
            .dag()
            .topological_ops()
            .any(|(_, inst)| inst.name() == "z");
        assert!(has_z);
    }
}
