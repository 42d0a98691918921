//! Aggregation services: the engine that turns raw run observations into
//! ranked branch-health statistics.

pub mod buganalysis;
pub mod component_summary;
pub mod identification;
pub mod job_summary;
pub mod platform_summary;
pub mod report_builder;
pub mod report_cache;
pub mod stats;

pub use buganalysis::{BugCache, InMemoryBugCache};
pub use component_summary::summarize_jobs_failures_by_bugzilla_component;
pub use identification::find_platforms;
pub use job_summary::{
    all_failures_known, convert_raw_job_result, sort_jobs_by_pass_percentage,
    summarize_job_run_results,
};
pub use platform_summary::summarize_jobs_by_platform;
pub use report_builder::build_test_report;
pub use report_cache::ReportCache;
pub use stats::{
    add_test_result, compute_failure_group_stats, compute_lookback, compute_lookback_at, percent,
    WINDOW_START_UNSET,
};
