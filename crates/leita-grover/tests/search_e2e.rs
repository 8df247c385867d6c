//! End-to-end searches on the local simulator.

use leita_adapter_sim::SimulatorBackend;
use leita_grover::BitPattern;
use leita_grover::search::search_circuit;
use leita_hal::Backend;

async fn run_search(target: &str, shots: u32) -> leita_hal::ExecutionResult {
    let pattern: BitPattern = target.parse().unwrap();
    let circuit = search_circuit(&pattern).unwrap();

    let backend = SimulatorBackend::new();
    let job_id = backend.submit(&circuit, shots).await.unwrap();
    backend.wait(&job_id).await.unwrap()
}

#[tokio::test]
async fn four_qubit_search_amplifies_the_marked_state() {
    let result = run_search("1111", 1024).await;

    assert_eq!(result.counts.total_shots(), 1024);

    let (winner, count) = result.counts.most_frequent().unwrap();
    assert_eq!(winner, "1111");

    // A uniform distribution would give 1024/16 = 64 per outcome; after
    // 3 rounds the marked state carries ~96% of the probability.
    assert!(count > 512, "marked state only observed {count} times");
}

#[tokio::test]
async fn search_works_for_arbitrary_patterns() {
    let result = run_search("0110", 1024).await;

    let (winner, count) = result.counts.most_frequent().unwrap();
    assert_eq!(winner, "0110");
    assert!(count > 512, "marked state only observed {count} times");
}

#[tokio::test]
async fn outcome_strings_cover_data_qubits_only() {
    let result = run_search("101", 256).await;

    // 3 data qubits measured; the ancilla must not appear.
    for (bitstring, _) in result.counts.iter() {
        assert_eq!(bitstring.len(), 3);
    }
}
