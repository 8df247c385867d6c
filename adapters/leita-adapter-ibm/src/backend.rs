//! IBM Quantum backend implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use leita_hal::{
    Backend, BackendAvailability, Capabilities, Counts, ExecutionResult, HalError, HalResult,
    JobId, JobStatus, ValidationResult, auth,
};
use leita_ir::Circuit;
use leita_qasm3::emit;

use crate::api::{DEFAULT_ENDPOINT, IbmClient, JobResultResponse};
use crate::error::{IbmError, IbmResult};

/// IBM Quantum backend adapter.
///
/// Bound to one target device chosen at construction time, either
/// explicitly ([`IbmBackend::connect`]) or by queue depth
/// ([`IbmBackend::least_busy`]).
pub struct IbmBackend {
    /// API client.
    client: Arc<IbmClient>,
    /// Target device name.
    target: String,
    /// Cached capabilities (sync introspection).
    capabilities: Capabilities,
}

impl IbmBackend {
    /// Connect to a named IBM Quantum device.
    ///
    /// The credential is resolved via `LEITA_IBM_TOKEN` or the saved token
    /// file.
    pub async fn connect(target: impl Into<String>) -> IbmResult<Self> {
        let target = target.into();
        let client = Self::client().await?;

        let info = client.get_backend(&target).await?;

        Ok(Self {
            client: Arc::new(client),
            capabilities: Capabilities::remote_device(&info.name, info.num_qubits as u32),
            target,
        })
    }

    /// Connect to the least-busy operational hardware device with at least
    /// `min_qubits` qubits.
    ///
    /// Simulated devices are excluded. Fails with
    /// [`IbmError::NoBackendAvailable`] when nothing qualifies.
    pub async fn least_busy(min_qubits: usize) -> IbmResult<Self> {
        let client = Self::client().await?;

        let chosen = client
            .list_backends()
            .await?
            .into_iter()
            .filter(|b| b.status.operational && !b.simulator && b.num_qubits >= min_qubits)
            .min_by_key(|b| b.status.pending_jobs.unwrap_or(u32::MAX))
            .ok_or(IbmError::NoBackendAvailable { min_qubits })?;

        info!(
            "selected {} ({} qubits, {} pending jobs)",
            chosen.name,
            chosen.num_qubits,
            chosen
                .status
                .pending_jobs
                .map_or("unknown".to_string(), |n| n.to_string())
        );

        Ok(Self {
            client: Arc::new(client),
            capabilities: Capabilities::remote_device(&chosen.name, chosen.num_qubits as u32),
            target: chosen.name,
        })
    }

    async fn client() -> IbmResult<IbmClient> {
        let token = auth::resolve_token()
            .await
            .map_err(|_| IbmError::InvalidToken)?;
        IbmClient::new(DEFAULT_ENDPOINT, &token)
    }

    /// Get the target device name.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Convert a circuit to `OpenQASM` 3.0 source.
    ///
    /// Adds `include "stdgates.inc";` after the version header so the
    /// remote QASM loader can resolve standard gate definitions.
    fn circuit_to_qasm(circuit: &Circuit) -> IbmResult<String> {
        let qasm = emit(circuit).map_err(|e| IbmError::CircuitError(e.to_string()))?;
        Ok(qasm.replacen(
            "OPENQASM 3.0;",
            "OPENQASM 3.0;\ninclude \"stdgates.inc\";",
            1,
        ))
    }

    /// Convert sampler results to a `Counts` table.
    ///
    /// The API reports outcomes as hex values. Bit widths are inferred
    /// from the largest observed value, and rendered with classical bit 0
    /// as the leftmost character to match the rest of the stack.
    fn results_to_counts(results: &JobResultResponse) -> Counts {
        let mut counts = Counts::new();

        if let Some(result) = results.results.first() {
            // Pre-aggregated counts are exact; prefer them.
            if let Some(raw_counts) = &result.counts {
                let width = infer_bit_width(raw_counts.keys());
                for (bitstring, &count) in raw_counts {
                    counts.insert(hex_to_bitstring(bitstring, width), count);
                }
            }
            // Fall back to quasi-distributions scaled by the shot count.
            else if let Some(quasi_dists) = &result.quasi_dists {
                let metadata_shots: Option<u64> = result
                    .metadata
                    .as_ref()
                    .and_then(|m| m.get("shots"))
                    .and_then(serde_json::Value::as_u64);
                let effective_shots = metadata_shots.unwrap_or(1024) as f64;

                if let Some(dist) = quasi_dists.first() {
                    let width = infer_bit_width(dist.keys());
                    for (bitstring, &prob) in dist {
                        let count = (prob * effective_shots).max(0.0).round() as u64;
                        if count > 0 {
                            counts.insert(hex_to_bitstring(bitstring, width), count);
                        }
                    }
                }
            }
        }

        counts
    }
}

/// Infer the classical register width from hex outcome keys.
///
/// Uses the bit length of the largest observed value, falling back to 1
/// when every outcome is zero.
fn infer_bit_width<'a>(keys: impl Iterator<Item = &'a String>) -> usize {
    let max_val = keys
        .filter_map(|s| {
            let hex = s.strip_prefix("0x").unwrap_or(s);
            u64::from_str_radix(hex, 16).ok()
        })
        .max()
        .unwrap_or(0);

    if max_val == 0 {
        1
    } else {
        64 - max_val.leading_zeros() as usize
    }
}

/// Render a hex outcome as a bitstring of `width` classical bits.
///
/// Classical bit 0 is the leftmost character, matching the simulator's
/// outcome convention. Non-hex keys are assumed to already be bitstrings.
fn hex_to_bitstring(hex: &str, width: usize) -> String {
    let hex = hex.strip_prefix("0x").unwrap_or(hex);

    if let Ok(value) = u64::from_str_radix(hex, 16) {
        (0..width)
            .map(|bit| if (value >> bit) & 1 == 1 { '1' } else { '0' })
            .collect()
    } else {
        hex.to_string()
    }
}

#[async_trait]
impl Backend for IbmBackend {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "ibm"
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn availability(&self) -> HalResult<BackendAvailability> {
        match self.client.get_backend(&self.target).await {
            Ok(info) => {
                if info.status.operational {
                    Ok(BackendAvailability {
                        is_available: true,
                        queue_depth: info.status.pending_jobs,
                        estimated_wait: None,
                        status_message: info.status.status_msg,
                    })
                } else {
                    Ok(BackendAvailability::unavailable(
                        info.status
                            .status_msg
                            .unwrap_or_else(|| "backend offline".to_string()),
                    ))
                }
            }
            Err(e) => {
                tracing::warn!("IBM backend availability check failed: {e}");
                Ok(BackendAvailability::unavailable("failed to query backend"))
            }
        }
    }

    async fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult> {
        let caps = self.capabilities();
        let mut reasons = Vec::new();

        if circuit.num_qubits() > caps.num_qubits as usize {
            reasons.push(format!(
                "Circuit requires {} qubits but backend only has {}",
                circuit.num_qubits(),
                caps.num_qubits
            ));
        }

        for (_, inst) in circuit.dag().topological_ops() {
            if let Some(gate) = inst.as_gate() {
                if !caps.gate_set.contains(gate.name()) {
                    reasons.push(format!("Unsupported gate: {}", gate.name()));
                    break;
                }
            }
        }

        if reasons.is_empty() {
            Ok(ValidationResult::Valid)
        } else {
            Ok(ValidationResult::Invalid { reasons })
        }
    }

    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId> {
        let info = self
            .client
            .get_backend(&self.target)
            .await
            .map_err(HalError::from)?;

        if circuit.num_qubits() > info.num_qubits {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit requires {} qubits but backend only has {}",
                circuit.num_qubits(),
                info.num_qubits
            )));
        }

        if !info.status.operational {
            return Err(HalError::BackendUnavailable(
                info.status
                    .status_msg
                    .unwrap_or_else(|| "Backend offline".to_string()),
            ));
        }

        let qasm = Self::circuit_to_qasm(circuit).map_err(HalError::from)?;

        let response = self
            .client
            .submit_sampler_job(&self.target, vec![qasm], shots)
            .await
            .map_err(|e| HalError::SubmissionFailed(e.to_string()))?;

        info!("submitted job {} to {}", response.id, self.target);
        Ok(JobId(response.id))
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        let status = self
            .client
            .get_job_status(&job_id.0)
            .await
            .map_err(HalError::from)?;

        let job_status = match status.status.to_uppercase().as_str() {
            "QUEUED" => JobStatus::Queued,
            "VALIDATING" | "RUNNING" => JobStatus::Running,
            "COMPLETED" => JobStatus::Completed,
            "FAILED" | "ERROR" => {
                let msg = status
                    .error_message()
                    .unwrap_or_else(|| "Unknown error".to_string());
                JobStatus::Failed(msg)
            }
            "CANCELLED" => JobStatus::Cancelled,
            _ => JobStatus::Running, // Treat unknown as running
        };

        Ok(job_status)
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let status = self
            .client
            .get_job_status(&job_id.0)
            .await
            .map_err(HalError::from)?;

        if !status.is_completed() {
            if status.is_failed() {
                let msg = status
                    .error_message()
                    .unwrap_or_else(|| "Job failed".to_string());
                return Err(HalError::JobFailed(msg));
            }
            if status.is_cancelled() {
                return Err(HalError::JobCancelled);
            }
            return Err(HalError::Backend(format!(
                "Job {} not yet completed",
                job_id.0
            )));
        }

        let results = self
            .client
            .get_job_results(&job_id.0)
            .await
            .map_err(HalError::from)?;

        let counts = Self::results_to_counts(&results);
        let total_shots = counts.total_shots() as u32;

        Ok(ExecutionResult::new(counts, total_shots))
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        self.client
            .cancel_job(&job_id.0)
            .await
            .map_err(HalError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SamplerResult;
    use std::collections::HashMap;

    #[test]
    fn test_hex_to_bitstring_lsb_first() {
        // Classical bit 0 leftmost: 0x1 is bit 0 set.
        assert_eq!(hex_to_bitstring("0x0", 4), "0000");
        assert_eq!(hex_to_bitstring("0x1", 4), "1000");
        assert_eq!(hex_to_bitstring("0x8", 4), "0001");
        assert_eq!(hex_to_bitstring("0xf", 4), "1111");
        assert_eq!(hex_to_bitstring("3", 2), "11");
    }

    #[test]
    fn test_infer_bit_width() {
        let keys = vec!["0x0".to_string(), "0x3".to_string()];
        assert_eq!(infer_bit_width(keys.iter()), 2);

        let keys = vec!["0x0".to_string(), "0x7".to_string()];
        assert_eq!(infer_bit_width(keys.iter()), 3);

        let keys = vec!["0x0".to_string()];
        assert_eq!(infer_bit_width(keys.iter()), 1);
    }

    #[test]
    fn test_results_to_counts() {
        let mut raw_counts = HashMap::new();
        raw_counts.insert("0x0".to_string(), 500u64);
        raw_counts.insert("0xf".to_string(), 524u64);

        let results = JobResultResponse {
            results: vec![SamplerResult {
                counts: Some(raw_counts),
                quasi_dists: None,
                metadata: None,
            }],
        };

        let counts = IbmBackend::results_to_counts(&results);
        assert_eq!(counts.get("0000"), 500);
        assert_eq!(counts.get("1111"), 524);
        assert_eq!(counts.total_shots(), 1024);
    }

    #[test]
    fn test_results_to_counts_quasi_dists() {
        let mut dist = HashMap::new();
        dist.insert("0x0".to_string(), 0.25f64);
        dist.insert("0x3".to_string(), 0.75f64);

        let results = JobResultResponse {
            results: vec![SamplerResult {
                counts: None,
                quasi_dists: Some(vec![dist]),
                metadata: Some(serde_json::json!({"shots": 1000})),
            }],
        };

        let counts = IbmBackend::results_to_counts(&results);
        assert_eq!(counts.get("00"), 250);
        assert_eq!(counts.get("11"), 750);
    }

    #[test]
    fn test_qasm_includes_stdgates() {
        let circuit = Circuit::bell().unwrap();
        let qasm = IbmBackend::circuit_to_qasm(&circuit).unwrap();
        assert!(qasm.contains("include \"stdgates.inc\";"));
        assert!(qasm.starts_with("OPENQASM 3.0;"));
    }
}
