//! QASM3 emitter for serializing circuits.

use leita_ir::{Circuit, Gate, Instruction, InstructionKind, QubitId};

use crate::error::{EmitError, EmitResult};

/// Emit a circuit as QASM3 source code.
pub fn emit(circuit: &Circuit) -> EmitResult<String> {
    let mut emitter = Emitter::new();
    emitter.emit_circuit(circuit)
}

/// QASM3 emitter.
struct Emitter {
    output: String,
}

impl Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_circuit(&mut self, circuit: &Circuit) -> EmitResult<String> {
        self.writeln("OPENQASM 3.0;");
        self.writeln("");

        let num_qubits = circuit.num_qubits();
        if num_qubits > 0 {
            self.writeln(&format!("qubit[{num_qubits}] q;"));
        }

        let num_clbits = circuit.num_clbits();
        if num_clbits > 0 {
            self.writeln(&format!("bit[{num_clbits}] c;"));
        }

        if num_qubits > 0 || num_clbits > 0 {
            self.writeln("");
        }

        for (_, instruction) in circuit.dag().topological_ops() {
            self.emit_instruction(instruction)?;
        }

        Ok(self.output.clone())
    }

    fn emit_instruction(&mut self, instruction: &Instruction) -> EmitResult<()> {
        match &instruction.kind {
            InstructionKind::Gate(gate) => self.emit_gate(*gate, &instruction.qubits),

            InstructionKind::Measure => {
                if instruction.qubits.len() != instruction.clbits.len() {
                    return Err(EmitError::MalformedInstruction {
                        name: "measure".into(),
                        reason: format!(
                            "{} qubits but {} classical bits",
                            instruction.qubits.len(),
                            instruction.clbits.len()
                        ),
                    });
                }
                for (q, c) in instruction.qubits.iter().zip(instruction.clbits.iter()) {
                    self.writeln(&format!("c[{}] = measure q[{}];", c.0, q.0));
                }
                Ok(())
            }
        }
    }

    fn emit_gate(&mut self, gate: Gate, qubits: &[QubitId]) -> EmitResult<()> {
        let operands = Self::format_qubits(qubits);
        match gate {
            // stdgates.inc covers the fixed-arity set directly.
            Gate::I
            | Gate::X
            | Gate::Y
            | Gate::Z
            | Gate::H
            | Gate::S
            | Gate::Sdg
            | Gate::T
            | Gate::Tdg
            | Gate::CX
            | Gate::CY
            | Gate::CZ
            | Gate::Swap
            | Gate::CCX => {
                self.writeln(&format!("{} {operands};", gate.name()));
                Ok(())
            }

            // Variable-arity multi-controlled NOT uses the ctrl modifier.
            Gate::Mcx { controls } => {
                if qubits.len() != (controls + 1) as usize {
                    return Err(EmitError::MalformedInstruction {
                        name: "mcx".into(),
                        reason: format!(
                            "{controls} controls declared but {} operands",
                            qubits.len()
                        ),
                    });
                }
                self.writeln(&format!("ctrl({controls}) @ x {operands};"));
                Ok(())
            }
        }
    }

    fn format_qubits(qubits: &[QubitId]) -> String {
        qubits
            .iter()
            .map(|q| format!("q[{}]", q.0))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leita_ir::QubitId;

    #[test]
    fn test_emit_bell() {
        let circuit = Circuit::bell().unwrap();
        let qasm = emit(&circuit).unwrap();

        assert!(qasm.starts_with("OPENQASM 3.0;"));
        assert!(qasm.contains("qubit[2] q;"));
        assert!(qasm.contains("bit[2] c;"));
        assert!(qasm.contains("h q[0];"));
        assert!(qasm.contains("cx q[0], q[1];"));
        assert!(qasm.contains("c[0] = measure q[0];"));
        assert!(qasm.contains("c[1] = measure q[1];"));
    }

    #[test]
    fn test_emit_mcx_ctrl_modifier() {
        let mut circuit = Circuit::with_size("mcx", 4, 0);
        let controls: Vec<_> = (0..3).map(QubitId).collect();
        circuit.mcx(&controls, QubitId(3)).unwrap();

        let qasm = emit(&circuit).unwrap();
        assert!(qasm.contains("ctrl(3) @ x q[0], q[1], q[2], q[3];"));
    }

    #[test]
    fn test_emit_broadcast_measure() {
        let mut circuit = Circuit::with_size("m", 3, 3);
        circuit.h(QubitId(0)).unwrap();
        circuit.measure_all().unwrap();

        let qasm = emit(&circuit).unwrap();
        for i in 0..3 {
            assert!(qasm.contains(&format!("c[{i}] = measure q[{i}];")));
        }
    }

    #[test]
    fn test_emit_empty_circuit() {
        let circuit = Circuit::new("empty");
        let qasm = emit(&circuit).unwrap();
        assert!(qasm.starts_with("OPENQASM 3.0;"));
        assert!(!qasm.contains("qubit["));
    }
}
