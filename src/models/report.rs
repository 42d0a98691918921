//! Test report models: the ingestion payload and the aggregated report.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{
    Bug, JobResult, RawJobResult, RawJobRunResult, SortedAggregateTestsResult,
    SortedBugzillaComponentResult,
};

/// Statistics over clustered same-run failure groups, current vs. previous period.
///
/// The median is a positional midpoint read from the externally-sorted
/// group collection, not a computed statistical median.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FailureGroupStats {
    /// Summed failure count across current-period groups
    pub count: i32,
    /// Summed failure count across previous-period groups
    pub count_prev: i32,
    /// Midpoint failure count of the current-period groups
    pub median: i32,
    /// Midpoint failure count of the previous-period groups
    pub median_prev: i32,
    /// Average failure count per current-period group
    pub avg: i32,
    /// Average for the previous period; divides the current-period count
    /// by the previous group count, matching the upstream dashboards
    pub avg_prev: i32,
}

/// Raw dataset for one release, as submitted by the ingestion layer.
///
/// The per-job and per-platform test summaries and the per-component
/// failure groupings are pre-built by the supplier and carried verbatim
/// into the aggregated report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RawReportData {
    /// Raw job results keyed by job name
    #[serde(default)]
    pub raw_job_results: HashMap<String, RawJobResult>,
    /// Pre-built per-test summaries keyed by job name
    #[serde(default)]
    pub by_job: HashMap<String, SortedAggregateTestsResult>,
    /// Pre-built per-test summaries keyed by platform tag
    #[serde(default)]
    pub by_platform: HashMap<String, SortedAggregateTestsResult>,
    /// Pre-grouped job failures keyed by defect-tracking component
    #[serde(default)]
    pub job_failures_by_bugzilla_component: HashMap<String, SortedBugzillaComponentResult>,
    /// Current-period failure groups, sorted by failure count by the supplier
    #[serde(default)]
    pub failure_groups: Vec<RawJobRunResult>,
    /// Previous-period failure groups, sorted by failure count by the supplier
    #[serde(default)]
    pub failure_groups_prev: Vec<RawJobRunResult>,
    /// Known bugs for this release, keyed by failed test name
    #[serde(default)]
    pub known_bugs: HashMap<String, Vec<Bug>>,
    /// Number of days of observations this dataset covers
    #[serde(default)]
    pub number_of_days_of_data: i32,
}

/// Aggregated branch-health report for one release.
///
/// Built in a single pass from one [`RawReportData`] and never mutated
/// afterwards; readers always see a whole report.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TestReport {
    /// Release the report covers
    pub release: String,
    /// When the report was built
    pub timestamp: DateTime<Utc>,
    /// Jobs that ran at least as often as their expected cadence,
    /// ranked worst pass percentage first
    pub job_results: Vec<JobResult>,
    /// Jobs below the expected run cadence, ranked worst first
    pub infrequent_job_results: Vec<JobResult>,
    /// Cross-job platform rollup, ranked worst pass percentage first
    pub by_platform: Vec<JobResult>,
    /// Component failure ranking, highest fail rate first
    pub by_bugzilla_component: Vec<SortedBugzillaComponentResult>,
    /// Failure-group statistics, current vs. previous period
    pub failure_group_stats: FailureGroupStats,
}
