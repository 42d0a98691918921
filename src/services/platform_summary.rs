//! Platform-level rollup of already-aggregated job results.

use std::collections::HashMap;

use crate::models::{JobResult, SortedAggregateTestsResult};
use crate::services::job_summary::sort_jobs_by_pass_percentage;
use crate::services::stats::percent;

/// Re-group job-level results by the platform tags derived from their
/// names, re-sum the counts, and rank the platforms worst-first.
///
/// A job mapping to several platforms contributes its full counts to
/// each of them; nothing is split. Platform aggregates carry no
/// dashboard URL, and their per-test summaries are taken whole from the
/// pre-built `by_platform` mapping rather than accumulated.
pub fn summarize_jobs_by_platform<F>(
    job_results: &[JobResult],
    by_platform: &HashMap<String, SortedAggregateTestsResult>,
    find_platforms: F,
) -> Vec<JobResult>
where
    F: Fn(&str) -> Vec<String>,
{
    let mut job_runs_by_platform: HashMap<String, JobResult> = HashMap::new();

    for job in job_results {
        for platform in find_platforms(&job.name) {
            let p = job_runs_by_platform.entry(platform.clone()).or_default();
            p.name = platform.clone();
            p.platform = Some(platform.clone());
            p.successes += job.successes;
            p.failures += job.failures;
            p.known_failures += job.known_failures;
            p.test_results = by_platform
                .get(&platform)
                .map(|r| r.test_results.clone())
                .unwrap_or_default();
        }
    }

    let mut platform_results: Vec<JobResult> = job_runs_by_platform
        .into_values()
        .map(|mut platform| {
            platform.pass_percentage = percent(platform.successes, platform.failures);
            platform.pass_percentage_with_known_failures = percent(
                platform.successes + platform.known_failures,
                platform.failures - platform.known_failures,
            );
            platform
        })
        .collect();

    sort_jobs_by_pass_percentage(&mut platform_results);
    platform_results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TestResult;

    fn job(name: &str, successes: i32, failures: i32, known: i32) -> JobResult {
        JobResult {
            name: name.to_string(),
            dashboard_url: Some(format!("https://dashboard.example.com/{}", name)),
            successes,
            failures,
            known_failures: known,
            pass_percentage: percent(successes, failures),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_counts_contributed_to_every_platform() {
        let jobs = vec![job("e2e-metal-upgrade", 6, 4, 1)];
        let results =
            summarize_jobs_by_platform(&jobs, &HashMap::new(), crate::services::find_platforms);

        assert_eq!(results.len(), 2);
        for platform in &results {
            assert_eq!(platform.successes, 6);
            assert_eq!(platform.failures, 4);
            assert_eq!(platform.known_failures, 1);
            assert!(platform.dashboard_url.is_none());
        }
    }

    #[test]
    fn test_counts_summed_across_jobs() {
        let jobs = vec![job("e2e-aws-serial", 8, 2, 0), job("e2e-aws", 5, 5, 2)];
        let results =
            summarize_jobs_by_platform(&jobs, &HashMap::new(), crate::services::find_platforms);

        let aws = results
            .iter()
            .find(|p| p.name == "aws")
            .expect("aws platform present");
        assert_eq!(aws.platform.as_deref(), Some("aws"));
        assert_eq!(aws.successes, 13);
        assert_eq!(aws.failures, 7);
        assert_eq!(aws.known_failures, 2);
        assert_eq!(aws.pass_percentage, percent(13, 7));
        assert_eq!(aws.pass_percentage_with_known_failures, percent(15, 5));
    }

    #[test]
    fn test_platforms_ranked_worst_first() {
        let jobs = vec![job("e2e-aws", 9, 1, 0), job("e2e-gcp", 2, 8, 0)];
        let results =
            summarize_jobs_by_platform(&jobs, &HashMap::new(), crate::services::find_platforms);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "gcp");
        assert_eq!(results[1].name, "aws");
    }

    #[test]
    fn test_platform_test_results_overwritten_not_accumulated() {
        let jobs = vec![job("e2e-aws", 1, 0, 0), job("e2e-aws-serial", 1, 0, 0)];
        let by_platform = HashMap::from([(
            "aws".to_string(),
            SortedAggregateTestsResult {
                test_results: vec![TestResult {
                    name: "test-1".to_string(),
                    ..Default::default()
                }],
            },
        )]);

        let results = summarize_jobs_by_platform(&jobs, &by_platform, crate::services::find_platforms);
        let aws = results.iter().find(|p| p.name == "aws").unwrap();
        assert_eq!(aws.test_results.len(), 1);
    }

    #[test]
    fn test_job_without_platform_ignored() {
        let jobs = vec![job("images-promote", 3, 3, 0)];
        let results =
            summarize_jobs_by_platform(&jobs, &HashMap::new(), crate::services::find_platforms);
        assert!(results.is_empty());
    }
}
