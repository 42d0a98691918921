//! Defect-component failure grouping models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Job failures attributed to one defect-tracking component.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BugzillaJobResult {
    /// Job name
    pub job_name: String,
    /// Component the failures are attributed to
    #[serde(default)]
    pub bugzilla_component: String,
    /// Number of test failures attributed to the component in this job
    #[serde(default)]
    pub number_of_test_failures: i32,
    /// Share of the job's runs that failed, as a percentage
    #[serde(default)]
    pub fail_percentage: f64,
}

/// One defect-tracking component with its failing jobs.
///
/// `jobs_failed` is ordered worst-first by the supplier; the ranking
/// reads the first entry as the representative rate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SortedBugzillaComponentResult {
    /// Component name
    pub name: String,
    /// Failing jobs attributed to this component, worst first
    #[serde(default)]
    pub jobs_failed: Vec<BugzillaJobResult>,
}
