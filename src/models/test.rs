//! Per-test report row returned by the materialized-view queries.

use sea_orm::FromQueryResult;
use serde::Serialize;
use utoipa::ToSchema;

/// Aggregate counts for one test over the current and previous reporting
/// period, with derived percentages computed in SQL.
///
/// Percentage columns are NULL when the corresponding run count is zero;
/// the NULLIF guard in the queries keeps the division defined.
#[derive(Debug, Clone, FromQueryResult, Serialize, ToSchema)]
pub struct Test {
    /// Test name
    pub name: String,
    /// Release the counts are scoped to
    pub release: String,
    /// Variant the counts are grouped by, when grouped
    pub variant: Option<String>,
    pub current_runs: i64,
    pub current_successes: i64,
    pub current_failures: i64,
    pub current_flakes: i64,
    pub previous_runs: i64,
    pub previous_successes: i64,
    pub previous_failures: i64,
    pub previous_flakes: i64,
    pub current_pass_percentage: Option<f64>,
    pub current_failure_percentage: Option<f64>,
    pub previous_pass_percentage: Option<f64>,
    pub previous_failure_percentage: Option<f64>,
    /// Current pass percentage minus previous pass percentage
    pub net_improvement: Option<f64>,
}
