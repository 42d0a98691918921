//! Raw, per-execution job run observations as delivered by the ingestion layer.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One executed instance of a CI job.
///
/// `succeeded` and `failed` are recorded independently by the ingestion
/// layer; a run that is neither is legal and contributes to no count.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RawJobRunResult {
    /// Name of the job this run belongs to
    #[serde(default)]
    pub job: String,
    /// Link to the run in the CI system
    #[serde(default)]
    pub url: String,
    /// Number of individual test failures in this run
    #[serde(default)]
    pub test_failures: i32,
    /// Names of the tests that failed in this run
    #[serde(default)]
    pub failed_test_names: Vec<String>,
    /// Whether the run failed
    #[serde(default)]
    pub failed: bool,
    /// Whether the run succeeded
    #[serde(default)]
    pub succeeded: bool,
}

/// One job definition with its recorded runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RawJobResult {
    /// Job name
    pub job_name: String,
    /// Link to the job's dashboard page
    #[serde(default)]
    pub dashboard_url: String,
    /// Recorded runs, in ingestion order
    #[serde(default)]
    pub job_run_results: Vec<RawJobRunResult>,
}
