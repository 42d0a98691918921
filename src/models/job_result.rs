//! Aggregated job result model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::TestResult;

/// Aggregated pass/fail statistics for one job, or for one platform when
/// produced by the platform rollup.
///
/// Created fresh per aggregation pass and never mutated after
/// construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct JobResult {
    /// Job name, or the platform tag for platform-level aggregates
    pub name: String,
    /// Platform tag, set only on platform-level aggregates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Link to the job's dashboard page. Unset for platform-level
    /// aggregates, where a single URL would be ambiguous.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_url: Option<String>,
    /// Number of succeeded runs
    pub successes: i32,
    /// Number of failed runs
    pub failures: i32,
    /// Number of failed runs whose failures are all linked to known bugs
    pub known_failures: i32,
    /// Pass percentage over successes and failures
    pub pass_percentage: f64,
    /// Pass percentage crediting known failures as if they had passed
    pub pass_percentage_with_known_failures: f64,
    /// Per-test summaries for this job or platform
    #[serde(default)]
    pub test_results: Vec<TestResult>,
}
