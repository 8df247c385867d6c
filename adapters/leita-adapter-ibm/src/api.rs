//! IBM Quantum REST API client.
//!
//! Implements the slice of the Qiskit Runtime API the search needs:
//! listing devices, submitting sampler jobs, polling status, and fetching
//! results. Authentication is a bearer token on every request.

// Response fields that are deserialized but not yet consumed are part of
// the API contract and kept for completeness.
#![allow(dead_code)]

use reqwest::{Client, header};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

use crate::error::{IbmError, IbmResult};

/// Default IBM Quantum API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.quantum-computing.ibm.com";

/// User-Agent sent with requests (Cloudflare blocks default reqwest UA).
const USER_AGENT: &str = "leita/0.4 (quantum-sdk)";

/// IBM Quantum API client.
pub struct IbmClient {
    /// HTTP client with auth headers baked in.
    client: Client,
    /// API endpoint URL.
    endpoint: String,
}

impl fmt::Debug for IbmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IbmClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl IbmClient {
    /// Create a new client with a bearer token.
    pub fn new(endpoint: impl Into<String>, token: &str) -> IbmResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| IbmError::InvalidToken)?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(60))
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Get available backends.
    pub async fn list_backends(&self) -> IbmResult<Vec<BackendInfo>> {
        let url = format!("{}/v1/backends", self.endpoint);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let error: ApiErrorResponse = response.json().await?;
            return Err(IbmError::Api {
                code: error.code,
                message: error.message,
            });
        }

        let backends: BackendsResponse = response.json().await?;
        Ok(backends.backends)
    }

    /// Get details for a specific backend.
    pub async fn get_backend(&self, name: &str) -> IbmResult<BackendInfo> {
        let url = format!("{}/v1/backends/{}", self.endpoint, name);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Err(IbmError::BackendUnavailable(name.to_string()));
            }
            let error: ApiErrorResponse = response.json().await?;
            return Err(IbmError::Api {
                code: error.code,
                message: error.message,
            });
        }

        response.json().await.map_err(IbmError::from)
    }

    /// Submit a job using the Sampler primitive.
    pub async fn submit_sampler_job(
        &self,
        backend: &str,
        circuits: Vec<String>,
        shots: u32,
    ) -> IbmResult<SubmitResponse> {
        let url = format!("{}/v1/jobs", self.endpoint);

        let body = serde_json::json!({
            "program_id": "sampler",
            "backend": backend,
            "params": {
                "circuits": circuits,
                "shots": shots,
            }
        });

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "no body".to_string());
            return Err(IbmError::Api {
                code: None,
                message: format!("job submission failed: {body}"),
            });
        }

        response.json().await.map_err(IbmError::from)
    }

    /// Get job status.
    pub async fn get_job_status(&self, job_id: &str) -> IbmResult<JobStatusResponse> {
        let url = format!("{}/v1/jobs/{}", self.endpoint, job_id);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Err(IbmError::JobNotFound(job_id.to_string()));
            }
            let error: ApiErrorResponse = response.json().await?;
            return Err(IbmError::Api {
                code: error.code,
                message: error.message,
            });
        }

        response.json().await.map_err(IbmError::from)
    }

    /// Get job results.
    pub async fn get_job_results(&self, job_id: &str) -> IbmResult<JobResultResponse> {
        let url = format!("{}/v1/jobs/{}/results", self.endpoint, job_id);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Err(IbmError::JobNotFound(job_id.to_string()));
            }
            let error: ApiErrorResponse = response.json().await?;
            return Err(IbmError::Api {
                code: error.code,
                message: error.message,
            });
        }

        response.json().await.map_err(IbmError::from)
    }

    /// Cancel a job.
    pub async fn cancel_job(&self, job_id: &str) -> IbmResult<()> {
        let url = format!("{}/v1/jobs/{}/cancel", self.endpoint, job_id);

        let response = self.client.post(&url).send().await?;

        if !response.status().is_success() {
            let error: ApiErrorResponse = response.json().await?;
            return Err(IbmError::Api {
                code: error.code,
                message: error.message,
            });
        }

        Ok(())
    }
}

// ============================================================================
// Response types
// ============================================================================

/// API error response.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    /// Error code.
    #[serde(default)]
    code: Option<String>,
    /// Error message.
    #[serde(default)]
    message: String,
}

/// Backends list response (`{"backends": [...]}`).
#[derive(Debug, Deserialize)]
struct BackendsResponse {
    /// List of backends.
    backends: Vec<BackendInfo>,
}

/// Backend information.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendInfo {
    /// Backend name.
    pub name: String,
    /// Number of qubits.
    pub num_qubits: usize,
    /// Backend status.
    pub status: BackendStatus,
    /// Whether this is a simulator.
    #[serde(default)]
    pub simulator: bool,
    /// Maximum number of shots.
    #[serde(default)]
    pub max_shots: Option<u32>,
}

/// Backend status.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendStatus {
    /// Whether the backend is operational.
    pub operational: bool,
    /// Status message.
    #[serde(default)]
    pub status_msg: Option<String>,
    /// Number of pending jobs.
    #[serde(default)]
    pub pending_jobs: Option<u32>,
}

/// Job submission response.
#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    /// Job ID.
    pub id: String,
    /// Job status at submission.
    #[serde(default)]
    pub status: String,
}

/// Job status response.
#[derive(Debug, Clone, Deserialize)]
pub struct JobStatusResponse {
    /// Job ID.
    pub id: String,
    /// Job status string.
    pub status: String,
    /// Error information if failed.
    #[serde(default)]
    pub error: Option<JobError>,
}

/// Job error information.
#[derive(Debug, Clone, Deserialize)]
pub struct JobError {
    /// Error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Error message.
    pub message: String,
}

impl JobStatusResponse {
    /// Normalized uppercase status for comparison.
    fn normalized_status(&self) -> String {
        self.status.to_uppercase()
    }

    /// Check if job completed successfully.
    pub fn is_completed(&self) -> bool {
        self.normalized_status() == "COMPLETED"
    }

    /// Check if job failed.
    pub fn is_failed(&self) -> bool {
        matches!(self.normalized_status().as_str(), "FAILED" | "ERROR")
    }

    /// Check if job was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.normalized_status() == "CANCELLED"
    }

    /// Get the failure reason, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.message.clone())
    }
}

/// Job result response.
#[derive(Debug, Deserialize)]
pub struct JobResultResponse {
    /// Results from the sampler primitive, one per circuit.
    pub results: Vec<SamplerResult>,
}

/// Sampler result for one circuit.
#[derive(Debug, Deserialize)]
pub struct SamplerResult {
    /// Measurement counts (hex bitstring -> count).
    #[serde(default)]
    pub counts: Option<HashMap<String, u64>>,
    /// Quasi-probability distribution (hex bitstring -> probability).
    #[serde(default)]
    pub quasi_dists: Option<Vec<HashMap<String, f64>>>,
    /// Metadata, including the effective shot count.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}
