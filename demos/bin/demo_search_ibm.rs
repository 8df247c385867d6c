//! Grover key search against IBM Quantum hardware.
//!
//! Defaults to the full 128-bit key: a 129-qubit circuit whose iteration
//! count (~10^19) is intractable to even assemble. That configuration
//! exists to illustrate the algorithm's asymptotic promise; pass a small
//! `-n` to actually submit a job. Hardware runs queue behind other users
//! and can take hours.

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;

use leita_adapter_ibm::IbmBackend;
use leita_cipher::{Key, SharedLibCipher};
use leita_demos::{
    KNOWN_CIPHERTEXT_HEX, KNOWN_KEY_HEX, KNOWN_PLAINTEXT, init_tracing, print_header, print_info,
    print_outcome_table, print_result, print_section, print_success, verify_cipher,
};
use leita_grover::BitPattern;
use leita_grover::search::{optimal_iterations, search_circuit};
use leita_hal::{Backend, ValidationResult};

/// Above this iteration count the circuit is not worth assembling, let
/// alone queueing.
const MAX_TRACTABLE_ITERATIONS: u64 = 1 << 20;

#[derive(Parser, Debug)]
#[command(name = "demo-search-ibm")]
#[command(about = "Grover key search on IBM Quantum hardware")]
struct Args {
    /// Number of key bits to search (data qubits)
    #[arg(short = 'n', long, default_value = "128")]
    qubits: usize,

    /// Cipher key as 32 hex characters
    #[arg(long, default_value = KNOWN_KEY_HEX)]
    key: String,

    /// Known plaintext (at most 16 bytes, zero-padded)
    #[arg(long, default_value = KNOWN_PLAINTEXT)]
    plaintext: String,

    /// Expected ciphertext as hex
    #[arg(long, default_value = KNOWN_CIPHERTEXT_HEX)]
    expected_ciphertext: String,

    /// Path to the native cipher library; enables the known-pair check
    #[arg(long, env = "LEITA_CIPHER_LIB")]
    cipher_lib: Option<PathBuf>,

    /// Number of measurement shots
    #[arg(short, long, default_value = "1024")]
    shots: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    print_header("Grover Key Search — IBM Quantum Hardware");
    print_info("hardware time is queued, metered, and shared; jobs can wait for hours");

    let key = Key::from_hex(&args.key)?;

    print_section("Cipher Verification");
    match &args.cipher_lib {
        Some(path) => {
            let cipher = SharedLibCipher::load(path)?;
            verify_cipher(
                &cipher,
                &key,
                args.plaintext.as_bytes(),
                &args.expected_ciphertext,
            )?;
        }
        None => {
            print_info("no cipher library supplied; skipping known-pair verification");
        }
    }

    let pattern = BitPattern::from_bytes(key.as_bytes(), args.qubits)?;
    let n = pattern.len();
    let iterations = optimal_iterations(n);

    print_section("Problem Setup");
    print_result("Data qubits", n);
    print_result("Qubit requirement", n + 1);
    print_result("Search space size", format!("2^{n}"));
    print_result("Grover iterations", iterations);

    print_section("Hardware Selection");
    let backend = IbmBackend::least_busy(n + 1).await?;
    print_result("Selected device", backend.target());
    print_result("Device qubits", backend.capabilities().num_qubits);

    if iterations > MAX_TRACTABLE_ITERATIONS {
        print_section("Asymptotic Illustration");
        println!("  Assembling this circuit means {iterations} sequential");
        println!("  (oracle, diffuser) rounds — no machine finishes that, and no");
        println!("  queue accepts it. The full-key search is here to make the");
        println!("  scaling argument concrete:");
        println!();
        println!("  Classical brute force: O(2^{n}) cipher calls");
        println!("  Grover search:         O(2^{}) oracle calls", n / 2);
        println!();
        print_info("re-run with a smaller -n (e.g. -n 5) to submit a real job");
        return Ok(());
    }

    print_section("Circuit Assembly");
    let circuit = search_circuit(&pattern)?;
    print_result("Qubits", circuit.num_qubits());
    print_result("Circuit depth", circuit.depth());

    if let ValidationResult::Invalid { reasons } = backend.validate(&circuit).await? {
        bail!("circuit rejected by {}: {}", backend.target(), reasons.join("; "));
    }

    print_section("Execution");
    let job_id = backend.submit(&circuit, args.shots).await?;
    print_result("Job", &job_id);
    print_info("waiting for the remote queue; this blocks until the job finishes");

    let result = backend.wait(&job_id).await?;

    print_section("Measurement Outcomes");
    print_outcome_table(&result.counts);

    println!();
    match result.counts.most_frequent() {
        Some((winner, count)) if winner == pattern.to_string() => {
            print_success(&format!("recovered {winner} with {count} shots"));
        }
        Some((winner, count)) => {
            // Hardware noise routinely smears small searches; report
            // rather than fail.
            print_info(&format!(
                "top outcome {winner} ({count} shots) differs from {pattern}; hardware noise dominates small amplitudes"
            ));
        }
        None => bail!("no outcomes recorded"),
    }

    Ok(())
}
