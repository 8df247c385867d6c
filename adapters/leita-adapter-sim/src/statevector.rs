//! Statevector simulation engine.

use num_complex::Complex64;
use std::f64::consts::PI;

use leita_ir::{Gate, Instruction, InstructionKind};

/// A statevector representing a quantum state.
///
/// Amplitude index bit `i` corresponds to qubit `i`.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Amplitude of basis state `index`.
    pub fn amplitude(&self, index: usize) -> Complex64 {
        self.amplitudes[index]
    }

    /// All amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Apply an instruction to the statevector.
    ///
    /// Measurements do not collapse the state here; sampling happens once
    /// per shot over the final amplitudes.
    pub fn apply(&mut self, instruction: &Instruction) {
        match &instruction.kind {
            InstructionKind::Gate(gate) => {
                let qubits: Vec<_> = instruction.qubits.iter().map(|q| q.index()).collect();
                self.apply_gate(*gate, &qubits);
            }
            InstructionKind::Measure => {}
        }
    }

    fn apply_gate(&mut self, gate: Gate, qubits: &[usize]) {
        match gate {
            Gate::I => {}
            Gate::X => self.apply_x(qubits[0]),
            Gate::Y => self.apply_y(qubits[0]),
            Gate::Z => self.apply_z(qubits[0]),
            Gate::H => self.apply_h(qubits[0]),
            Gate::S => self.apply_phase(qubits[0], PI / 2.0),
            Gate::Sdg => self.apply_phase(qubits[0], -PI / 2.0),
            Gate::T => self.apply_phase(qubits[0], PI / 4.0),
            Gate::Tdg => self.apply_phase(qubits[0], -PI / 4.0),
            Gate::CX => self.apply_cx(qubits[0], qubits[1]),
            Gate::CY => self.apply_cy(qubits[0], qubits[1]),
            Gate::CZ => self.apply_cz(qubits[0], qubits[1]),
            Gate::Swap => self.apply_swap(qubits[0], qubits[1]),
            Gate::CCX => {
                let (controls, target) = qubits.split_at(2);
                self.apply_mcx(controls, target[0]);
            }
            Gate::Mcx { controls } => {
                let (controls, target) = qubits.split_at(controls as usize);
                self.apply_mcx(controls, target[0]);
            }
        }
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] *= phase;
            }
        }
    }

    // =========================================================================
    // Multi-qubit gate implementations
    // =========================================================================

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_cy(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_cz(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..(1 << self.num_qubits) {
            let b1 = (i & mask1) != 0;
            let b2 = (i & mask2) != 0;
            if b1 && !b2 {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// NOT on `target` conditioned on every qubit in `controls` being 1.
    fn apply_mcx(&mut self, controls: &[usize], target: usize) {
        let ctrl_mask: usize = controls.iter().map(|&c| 1usize << c).sum();
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask == ctrl_mask) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    // =========================================================================
    // Sampling
    // =========================================================================

    /// Sample a measurement outcome over the full register.
    pub fn sample(&self) -> usize {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }

        // Fallback (shouldn't happen with normalized states)
        self.amplitudes.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leita_ir::QubitId;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitude(0), Complex64::new(1.0, 0.0)));
        for i in 1..4 {
            assert!(approx_eq(sv.amplitude(i), Complex64::new(0.0, 0.0)));
        }
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply_h(0);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitude(0), Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitude(1), Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_bell_state() {
        let mut sv = Statevector::new(2);
        sv.apply_h(0);
        sv.apply_cx(0, 1);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitude(0), Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitude(1), Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitude(2), Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitude(3), Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_mcx_flips_only_when_all_controls_set() {
        // Prepare |0111⟩ (controls 0,1,2 set, target 3 clear)
        let mut sv = Statevector::new(4);
        sv.apply_x(0);
        sv.apply_x(1);
        sv.apply_x(2);
        sv.apply_mcx(&[0, 1, 2], 3);
        assert!(approx_eq(sv.amplitude(0b1111), Complex64::new(1.0, 0.0)));

        // One control clear: no flip
        let mut sv = Statevector::new(4);
        sv.apply_x(0);
        sv.apply_x(1);
        sv.apply_mcx(&[0, 1, 2], 3);
        assert!(approx_eq(sv.amplitude(0b0011), Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_ccx_matches_mcx() {
        let mut a = Statevector::new(3);
        a.apply_x(0);
        a.apply_x(1);
        a.apply(&Instruction::gate(
            Gate::CCX,
            [QubitId(0), QubitId(1), QubitId(2)],
        ));

        let mut b = Statevector::new(3);
        b.apply_x(0);
        b.apply_x(1);
        b.apply(&Instruction::gate(
            Gate::Mcx { controls: 2 },
            [QubitId(0), QubitId(1), QubitId(2)],
        ));

        for i in 0..8 {
            assert!(approx_eq(a.amplitude(i), b.amplitude(i)));
        }
    }

    #[test]
    fn test_s_t_phases() {
        // S then Sdg is identity on |1⟩
        let mut sv = Statevector::new(1);
        sv.apply_x(0);
        sv.apply_phase(0, PI / 2.0);
        sv.apply_phase(0, -PI / 2.0);
        assert!(approx_eq(sv.amplitude(1), Complex64::new(1.0, 0.0)));

        // T^2 = S: phase i on |1⟩
        let mut sv = Statevector::new(1);
        sv.apply_x(0);
        sv.apply_phase(0, PI / 4.0);
        sv.apply_phase(0, PI / 4.0);
        assert!(approx_eq(sv.amplitude(1), Complex64::new(0.0, 1.0)));
    }

    #[test]
    fn test_sample_deterministic() {
        // |1⟩ state should always sample to 1
        let mut sv = Statevector::new(1);
        sv.apply_x(0);

        for _ in 0..100 {
            assert_eq!(sv.sample(), 1);
        }
    }
}
