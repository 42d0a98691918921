//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CI Health Server",
        version = "0.3.0",
        description = "API server aggregating raw CI job run results into ranked branch-health reports"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Report endpoints
        api::reports::ingest_report,
        api::reports::get_report,
        api::reports::get_jobs,
        api::reports::get_platforms,
        api::reports::get_components,
        // Test report endpoints
        api::tests::tests_by_variant,
        api::tests::test_details,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Reports
            api::reports::IngestReportResponse,
            models::Bug,
            models::BugzillaJobResult,
            models::FailureGroupStats,
            models::JobResult,
            models::RawJobResult,
            models::RawJobRunResult,
            models::RawReportData,
            models::SortedAggregateTestsResult,
            models::SortedBugzillaComponentResult,
            models::TestReport,
            models::TestResult,
            // Tests
            models::Test,
        )
    ),
    tags(
        (name = "Health", description = "Service health and readiness"),
        (name = "Reports", description = "Aggregated branch-health reports"),
        (name = "Tests", description = "Per-test reports from the materialized view")
    )
)]
pub struct ApiDoc;
