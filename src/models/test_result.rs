//! Per-test aggregate results, keyed by test name within a category.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Cumulative result for a single test within a category (job or platform).
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RawTestResult {
    /// Test name
    pub name: String,
    /// Number of passing executions
    #[serde(default)]
    pub successes: i32,
    /// Number of failing executions
    #[serde(default)]
    pub failures: i32,
    /// Number of executions that failed but passed on retry
    #[serde(default)]
    pub flakes: i32,
}

/// Accumulating per-test results for one category.
///
/// Within one category each test name maps to exactly one
/// [`RawTestResult`]; repeated contributions are summed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AggregateTestsResult {
    /// Results keyed by test name
    #[serde(default)]
    pub raw_test_results: HashMap<String, RawTestResult>,
}

/// Processed per-test summary carried into job and platform aggregates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TestResult {
    /// Test name
    pub name: String,
    /// Number of passing executions
    #[serde(default)]
    pub successes: i32,
    /// Number of failing executions
    #[serde(default)]
    pub failures: i32,
    /// Number of executions that failed but passed on retry
    #[serde(default)]
    pub flakes: i32,
    /// Pass percentage over successes and failures
    #[serde(default)]
    pub pass_percentage: f64,
}

/// Pre-sorted per-test summaries for one category, supplied by the
/// ingestion layer and substituted verbatim into aggregate output.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SortedAggregateTestsResult {
    /// Summaries ordered worst-first by the supplier
    #[serde(default)]
    pub test_results: Vec<TestResult>,
}
