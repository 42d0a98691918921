//! Job-level aggregation: folds raw per-run results into ranked job
//! statistics with known-failure attribution.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{JobResult, RawJobResult, RawJobRunResult, SortedAggregateTestsResult};
use crate::services::buganalysis::BugCache;
use crate::services::stats::percent;

/// Whether every test failure in a run can be attributed to a known bug.
///
/// Vacuously true for a run with no failed test names. A run with any
/// failure the bug cache does not know about is an "unknown failure"
/// that cannot be credited as passing even if all tracked bugs were
/// fixed; the scan stops at the first such test.
pub fn all_failures_known(
    run: &RawJobRunResult,
    bug_cache: &dyn BugCache,
    release: &str,
) -> bool {
    for test_name in &run.failed_test_names {
        let bugs = bug_cache.list_bugs(release, "", test_name);
        if bugs.is_empty() {
            return false;
        }
    }
    true
}

/// Fold one job's raw runs into an aggregated [`JobResult`].
///
/// Per-test summaries for the job are carried over from the pre-built
/// `by_job` mapping, not recomputed here.
pub fn convert_raw_job_result(
    raw_job_result: &RawJobResult,
    by_job: &HashMap<String, SortedAggregateTestsResult>,
    bug_cache: &dyn BugCache,
    release: &str,
) -> JobResult {
    let mut job = JobResult {
        name: raw_job_result.job_name.clone(),
        dashboard_url: Some(raw_job_result.dashboard_url.clone()),
        test_results: by_job
            .get(&raw_job_result.job_name)
            .map(|r| r.test_results.clone())
            .unwrap_or_default(),
        ..Default::default()
    };

    for run in &raw_job_result.job_run_results {
        if run.failed {
            job.failures += 1;
        } else if run.succeeded {
            job.successes += 1;
        }
        if run.failed && all_failures_known(run, bug_cache, release) {
            job.known_failures += 1;
        }
    }

    job.pass_percentage = percent(job.successes, job.failures);
    job.pass_percentage_with_known_failures = percent(
        job.successes + job.known_failures,
        job.failures - job.known_failures,
    );

    job
}

/// Aggregate every job in the input mapping and split the results into
/// regular and infrequent jobs, each ranked worst pass percentage first.
///
/// A job whose run count exceeds `number_of_days_of_data * 3 / 2`
/// (one-and-a-half runs per day, integer arithmetic) goes into the
/// regular list; everything else is infrequent.
pub fn summarize_job_run_results(
    raw_job_results: &HashMap<String, RawJobResult>,
    by_job: &HashMap<String, SortedAggregateTestsResult>,
    bug_cache: &dyn BugCache,
    release: &str,
    number_of_days_of_data: i32,
) -> (Vec<JobResult>, Vec<JobResult>) {
    let mut jobs = Vec::new();
    let mut infrequent_jobs = Vec::new();

    for raw_job_result in raw_job_results.values() {
        let job = convert_raw_job_result(raw_job_result, by_job, bug_cache, release);

        if job.successes + job.failures > number_of_days_of_data * 3 / 2 {
            jobs.push(job);
        } else {
            infrequent_jobs.push(job);
        }
    }

    sort_jobs_by_pass_percentage(&mut jobs);
    sort_jobs_by_pass_percentage(&mut infrequent_jobs);

    (jobs, infrequent_jobs)
}

/// Stable sort from lowest to highest pass percentage, so jobs with
/// equal percentages keep their relative order across repeated runs.
pub fn sort_jobs_by_pass_percentage(jobs: &mut [JobResult]) {
    jobs.sort_by(|a, b| {
        a.pass_percentage
            .partial_cmp(&b.pass_percentage)
            .unwrap_or(Ordering::Equal)
    });
}
