//! Grover key search on the local statevector simulator.
//!
//! Recovers the leading n bits of a cipher key from a known
//! plaintext/ciphertext pair, by building the search circuit for the
//! target pattern and sampling it.

use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;

use leita_adapter_sim::SimulatorBackend;
use leita_cipher::{Key, SharedLibCipher};
use leita_demos::{
    KNOWN_CIPHERTEXT_HEX, KNOWN_KEY_HEX, KNOWN_PLAINTEXT, init_tracing, print_header, print_info,
    print_outcome_table, print_result, print_section, print_success, verify_cipher,
};
use leita_grover::BitPattern;
use leita_grover::search::{optimal_iterations, search_circuit};
use leita_hal::{Backend, BackendConfig, BackendRegistry, ValidationResult};

#[derive(Parser, Debug)]
#[command(name = "demo-search-sim")]
#[command(about = "Grover key search on the local statevector simulator")]
struct Args {
    /// Number of key bits to search (data qubits)
    #[arg(short = 'n', long, default_value = "4")]
    qubits: usize,

    /// Explicit target bit pattern; defaults to the key's leading bits
    #[arg(short, long)]
    target: Option<String>,

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

    print_header("Grover Key Search — Local Simulator");

    let key = Key::from_hex(&args.key)?;

    print_section("Cipher Verification");
    match &args.cipher_lib {
        Some(path) => {
            // A mismatch is a diagnostic, not a hard failure; the search
            // proceeds either way.
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

    let pattern: BitPattern = match &args.target {
        Some(target) => target.parse()?,
        None => BitPattern::from_bytes(key.as_bytes(), args.qubits)?,
    };
    let n = pattern.len();

    print_section("Problem Setup");
    print_result("Data qubits", n);
    print_result("Search space size", 1u64 << n);
    print_result("Marked pattern", &pattern);
    print_result("Grover iterations", optimal_iterations(n));
    print_result("Shots", args.shots);

    print_section("Circuit Assembly");
    let circuit = search_circuit(&pattern)?;
    print_result("Qubits", circuit.num_qubits());
    print_result("Classical bits", circuit.num_clbits());
    print_result("Circuit depth", circuit.depth());

    let mut registry = BackendRegistry::new();
    registry.register::<SimulatorBackend>("sim");
    let backend = registry.create("sim", BackendConfig::new("sim"))?;

    if let ValidationResult::Invalid { reasons } = backend.validate(&circuit).await? {
        bail!("circuit rejected by simulator: {}", reasons.join("; "));
    }

    print_section("Execution");
    let job_id = backend.submit(&circuit, args.shots).await?;
    print_result("Job", &job_id);
    let result = backend.wait(&job_id).await?;
    if let Some(millis) = result.execution_time_ms {
        print_result("Simulation time", format!("{millis} ms"));
    }

    print_section("Measurement Outcomes");
    print_outcome_table(&result.counts);

    println!();
    match result.counts.most_frequent() {
        Some((winner, count)) if winner == pattern.to_string() => {
            print_success(&format!(
                "recovered {winner} with {count}/{} shots",
                args.shots
            ));
        }
        Some((winner, count)) => {
            bail!("search peaked on {winner} ({count} shots) instead of {pattern}");
        }
        None => bail!("no outcomes recorded"),
    }

    Ok(())
}
