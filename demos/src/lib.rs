//! Leita demo suite
//!
//! Shared plumbing for the key-search binaries:
//!
//! - `demo-search-sim` — recover the leading bits of a cipher key on the
//!   local statevector simulator
//! - `demo-search-ibm` — the same search against IBM Quantum hardware,
//!   defaulting to the (intentionally aspirational) full 128-bit key
//! - `save-token` — persist the hardware credential token
//!
//! The known plaintext/ciphertext pair shipped here matches the cipher
//! library's reference vector, so a mismatch at startup means the library
//! on disk is not the cipher the search assumes.

use console::style;

use leita_cipher::{BlockCipher, CipherResult, Key};
use leita_hal::Counts;

/// Reference key for the known-pair verification.
pub const KNOWN_KEY_HEX: &str = "00112233445566778899aabbccddeeff";

/// Reference plaintext (zero-padded to one block by the adapter).
pub const KNOWN_PLAINTEXT: &str = "This is a test";

/// Ciphertext the cipher must produce for the reference pair.
pub const KNOWN_CIPHERTEXT_HEX: &str = "3c86e7ec17bb967b9da2f2242d94a634";

/// Initialize tracing from `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}

/// Print an error diagnostic without aborting.
pub fn print_error(message: &str) {
    println!("{} {}", style("✗").red().bold(), message);
}

/// Check the cipher against an expected plaintext/ciphertext pair.
///
/// A mismatch is reported as a diagnostic only; the caller continues to
/// the quantum search step regardless. Returns whether the pair matched.
pub fn verify_cipher(
    cipher: &dyn BlockCipher,
    key: &Key,
    plaintext: &[u8],
    expected_ciphertext_hex: &str,
) -> CipherResult<bool> {
    let ciphertext = cipher.encrypt(key, plaintext)?;
    let produced = hex::encode(ciphertext);

    if produced.eq_ignore_ascii_case(expected_ciphertext_hex) {
        print_success("cipher produced the expected ciphertext");
        Ok(true)
    } else {
        print_error(&format!(
            "cipher did not produce the expected ciphertext (got {produced}, expected {expected_ciphertext_hex})"
        ));
        Ok(false)
    }
}

/// Print an outcome table sorted by descending count, with scaled bars.
pub fn print_outcome_table(counts: &Counts) {
    const MAX_ROWS: usize = 16;
    const BAR_WIDTH: u64 = 40;

    let sorted = counts.sorted_desc();
    let Some(&(_, max_count)) = sorted.first() else {
        print_info("no outcomes recorded");
        return;
    };

    for &(bitstring, count) in sorted.iter().take(MAX_ROWS) {
        let bar_len = (count * BAR_WIDTH / max_count.max(1)) as usize;
        println!(
            "  {}  {:>6}  {}",
            style(bitstring).bold(),
            count,
            style("█".repeat(bar_len)).cyan()
        );
    }

    if sorted.len() > MAX_ROWS {
        println!(
            "  {}",
            style(format!("… and {} more outcomes", sorted.len() - MAX_ROWS)).dim()
        );
    }
}
