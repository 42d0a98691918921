//! Report orchestration: one deterministic pass from a raw dataset to an
//! aggregated, ranked [`TestReport`].

use chrono::Utc;
use tracing::info;

use crate::models::{RawReportData, TestReport};
use crate::services::buganalysis::BugCache;
use crate::services::component_summary::summarize_jobs_failures_by_bugzilla_component;
use crate::services::identification::find_platforms;
use crate::services::job_summary::summarize_job_run_results;
use crate::services::platform_summary::summarize_jobs_by_platform;
use crate::services::stats::compute_failure_group_stats;

/// Build the full branch-health report for one release.
///
/// Runs the job fold, the platform rollup over the regular jobs, the
/// component ranking, and the failure-group statistics as a single
/// synchronous pass; the returned report is immutable.
pub fn build_test_report(
    release: &str,
    data: &RawReportData,
    bug_cache: &dyn BugCache,
) -> TestReport {
    let (job_results, infrequent_job_results) = summarize_job_run_results(
        &data.raw_job_results,
        &data.by_job,
        bug_cache,
        release,
        data.number_of_days_of_data,
    );

    let by_platform = summarize_jobs_by_platform(&job_results, &data.by_platform, find_platforms);
    let by_bugzilla_component =
        summarize_jobs_failures_by_bugzilla_component(&data.job_failures_by_bugzilla_component);
    let failure_group_stats =
        compute_failure_group_stats(&data.failure_groups, &data.failure_groups_prev);

    info!(
        release = %release,
        jobs = job_results.len(),
        infrequent_jobs = infrequent_job_results.len(),
        platforms = by_platform.len(),
        components = by_bugzilla_component.len(),
        "built test report"
    );

    TestReport {
        release: release.to_string(),
        timestamp: Utc::now(),
        job_results,
        infrequent_job_results,
        by_platform,
        by_bugzilla_component,
        failure_group_stats,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::{Bug, RawJobResult, RawJobRunResult};
    use crate::services::buganalysis::InMemoryBugCache;

    fn passing_run() -> RawJobRunResult {
        RawJobRunResult {
            succeeded: true,
            ..Default::default()
        }
    }

    fn failing_run(failed_tests: &[&str]) -> RawJobRunResult {
        RawJobRunResult {
            failed: true,
            failed_test_names: failed_tests.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_report_pipeline() {
        let bug_cache = InMemoryBugCache::new();
        bug_cache.set_release_bugs(
            "4.6",
            HashMap::from([(
                "flaky-test".to_string(),
                vec![Bug {
                    id: 42,
                    ..Default::default()
                }],
            )]),
        );

        let mut runs: Vec<RawJobRunResult> = (0..12).map(|_| passing_run()).collect();
        runs.push(failing_run(&["flaky-test"]));
        runs.push(failing_run(&["mystery-test"]));

        let data = RawReportData {
            raw_job_results: HashMap::from([(
                "e2e-aws".to_string(),
                RawJobResult {
                    job_name: "e2e-aws".to_string(),
                    dashboard_url: "https://dashboard.example.com/e2e-aws".to_string(),
                    job_run_results: runs,
                },
            )]),
            number_of_days_of_data: 7,
            ..Default::default()
        };

        let report = build_test_report("4.6", &data, &bug_cache);

        assert_eq!(report.release, "4.6");
        assert_eq!(report.job_results.len(), 1);
        assert!(report.infrequent_job_results.is_empty());

        let job = &report.job_results[0];
        assert_eq!(job.successes, 12);
        assert_eq!(job.failures, 2);
        assert_eq!(job.known_failures, 1);

        // The aws job rolls up into the aws platform with full counts.
        assert_eq!(report.by_platform.len(), 1);
        assert_eq!(report.by_platform[0].name, "aws");
        assert_eq!(report.by_platform[0].successes, 12);

        assert!(report.by_bugzilla_component.is_empty());
        assert_eq!(report.failure_group_stats.count, 0);
    }

    #[test]
    fn test_platform_rollup_covers_regular_jobs_only() {
        let bug_cache = InMemoryBugCache::new();
        let data = RawReportData {
            raw_job_results: HashMap::from([(
                "e2e-gcp".to_string(),
                RawJobResult {
                    job_name: "e2e-gcp".to_string(),
                    dashboard_url: String::new(),
                    job_run_results: vec![passing_run(), passing_run()],
                },
            )]),
            number_of_days_of_data: 7,
            ..Default::default()
        };

        let report = build_test_report("4.6", &data, &bug_cache);
        // Two runs in seven days is infrequent; the platform rollup
        // only covers regular jobs.
        assert_eq!(report.infrequent_job_results.len(), 1);
        assert!(report.by_platform.is_empty());
    }
}
