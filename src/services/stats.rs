//! Shared statistics helpers: percentages, lookback windows, keyed
//! test-result accumulation, and failure-group statistics.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::models::{AggregateTestsResult, FailureGroupStats, RawJobRunResult};

/// Sentinel start index returned by [`compute_lookback`] when no
/// timestamp crossed the start cutoff. Callers interpret an unmodified
/// start as "no boundary found within range".
pub const WINDOW_START_UNSET: usize = usize::MAX;

/// Pass percentage over success and failure counts.
///
/// A zero denominator returns 0.0 rather than NaN so downstream sorts
/// and displays never see a non-numeric value.
pub fn percent(success: i32, failure: i32) -> f64 {
    if success + failure == 0 {
        return 0.0;
    }
    f64::from(success) / f64::from(success + failure) * 100.0
}

/// Locate the index boundaries of the current and previous reporting
/// window in a most-recent-first sequence of millisecond timestamps.
///
/// Returns `(start, stop)`: `start` is the earliest index older than
/// `start_day` days ago ([`WINDOW_START_UNSET`] if none), and `stop` is
/// the first index older than `lookback_day` days ago, or the sequence
/// length if no timestamp is that old.
///
/// Consumed by the reporting pipeline when slicing raw observations
/// into current and previous windows; the ingestion endpoint here
/// receives datasets that are already windowed.
pub fn compute_lookback(start_day: i64, lookback_day: i64, timestamps: &[i64]) -> (usize, usize) {
    compute_lookback_at(Utc::now(), start_day, lookback_day, timestamps)
}

/// [`compute_lookback`] against an explicit reference instant.
pub fn compute_lookback_at(
    now: DateTime<Utc>,
    start_day: i64,
    lookback_day: i64,
    timestamps: &[i64],
) -> (usize, usize) {
    let stop_ts = (now - Duration::days(lookback_day)).timestamp_millis();
    let start_ts = (now - Duration::days(start_day)).timestamp_millis();
    debug!("lookback window start: {} stop: {}", start_ts, stop_ts);

    let mut start = WINDOW_START_UNSET;
    for (i, &ts) in timestamps.iter().enumerate() {
        if ts < start_ts && i < start {
            start = i;
        }
        if ts < stop_ts {
            return (start, i);
        }
    }
    (start, timestamps.len())
}

/// Accumulate one test's counts into a keyed category.
///
/// Both the category and the per-test entry are created on first use, so
/// accumulation does not depend on any default-value rules of the
/// backing map. This is the accumulation primitive for the ingestion
/// pipeline that builds the per-job and per-platform test summaries
/// carried in [`crate::models::RawReportData`].
pub fn add_test_result(
    categories: &mut HashMap<String, AggregateTestsResult>,
    category_key: &str,
    test_name: &str,
    passed: i32,
    failed: i32,
    flaked: i32,
) {
    debug!(
        "adding test {} to category {}, passed: {}, failed: {}",
        test_name, category_key, passed, failed
    );

    let category = categories.entry(category_key.to_string()).or_default();
    let result = category
        .raw_test_results
        .entry(test_name.to_string())
        .or_default();

    result.name = test_name.to_string();
    result.successes += passed;
    result.failures += failed;
    result.flakes += flaked;
}

/// Compute count, midpoint median, and average of clustered same-run
/// failure counts for the current and previous period.
///
/// The group collections arrive sorted by failure count, so the median
/// is read positionally from the middle index. Empty collections yield
/// zeroes. The previous-period average divides the current-period count
/// by the previous group count; this mirrors the upstream report exactly
/// and must not be "fixed" here.
pub fn compute_failure_group_stats(
    failure_groups: &[RawJobRunResult],
    failure_groups_prev: &[RawJobRunResult],
) -> FailureGroupStats {
    let mut stats = FailureGroupStats::default();

    for group in failure_groups {
        stats.count += group.test_failures;
    }
    for group in failure_groups_prev {
        stats.count_prev += group.test_failures;
    }

    if !failure_groups.is_empty() {
        stats.median = failure_groups[failure_groups.len() / 2].test_failures;
        stats.avg = stats.count / failure_groups.len() as i32;
    }
    if !failure_groups_prev.is_empty() {
        stats.median_prev = failure_groups_prev[failure_groups_prev.len() / 2].test_failures;
        stats.avg_prev = stats.count / failure_groups_prev.len() as i32;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(test_failures: i32) -> RawJobRunResult {
        RawJobRunResult {
            test_failures,
            ..Default::default()
        }
    }

    #[test]
    fn test_percent_zero_denominator() {
        assert_eq!(percent(0, 0), 0.0);
    }

    #[test]
    fn test_percent_basic() {
        assert_eq!(percent(7, 3), 70.0);
        assert_eq!(percent(9, 1), 90.0);
        assert_eq!(percent(0, 5), 0.0);
        assert_eq!(percent(5, 0), 100.0);
    }

    #[test]
    fn test_percent_monotonic() {
        assert!(percent(8, 3) > percent(7, 3));
        assert!(percent(7, 4) < percent(7, 3));
    }

    fn daily_timestamps(now: DateTime<Utc>, days: i64) -> Vec<i64> {
        let day_ms = 24 * 60 * 60 * 1000;
        // One timestamp per day, most recent first. Offset by an hour so
        // entries do not sit exactly on a cutoff.
        (0..days)
            .map(|d| now.timestamp_millis() - d * day_ms - 60 * 60 * 1000)
            .collect()
    }

    #[test]
    fn test_compute_lookback_windows() {
        let now = Utc::now();
        let timestamps = daily_timestamps(now, 10);

        // Current window opens immediately, closes at the 7-day crossing.
        let (start, stop) = compute_lookback_at(now, 0, 7, &timestamps);
        assert_eq!(start, 0);
        assert_eq!(stop, 7);
    }

    #[test]
    fn test_compute_lookback_start_boundary() {
        let now = Utc::now();
        let timestamps = daily_timestamps(now, 10);

        // The 7-day crossing sits at index 7; nothing is older than 14
        // days, so the stop boundary runs off the end of the sequence.
        let (start, stop) = compute_lookback_at(now, 7, 14, &timestamps);
        assert_eq!(start, 7);
        assert_eq!(stop, timestamps.len());
    }

    #[test]
    fn test_compute_lookback_nothing_in_range() {
        let now = Utc::now();
        // All timestamps within the last hour: nothing crosses either cutoff.
        let timestamps: Vec<i64> = (0..5)
            .map(|m| now.timestamp_millis() - m * 60 * 1000)
            .collect();

        let (start, stop) = compute_lookback_at(now, 7, 1, &timestamps);
        assert_eq!(start, WINDOW_START_UNSET);
        assert_eq!(stop, timestamps.len());
    }

    #[test]
    fn test_compute_lookback_empty() {
        let (start, stop) = compute_lookback_at(Utc::now(), 7, 1, &[]);
        assert_eq!(start, WINDOW_START_UNSET);
        assert_eq!(stop, 0);
    }

    #[test]
    fn test_add_test_result_accumulates() {
        let mut categories = HashMap::new();
        add_test_result(&mut categories, "job-a", "test-1", 2, 1, 0);
        add_test_result(&mut categories, "job-a", "test-1", 1, 0, 1);
        add_test_result(&mut categories, "job-a", "test-2", 0, 3, 0);

        let category = &categories["job-a"];
        let t1 = &category.raw_test_results["test-1"];
        assert_eq!(t1.name, "test-1");
        assert_eq!(t1.successes, 3);
        assert_eq!(t1.failures, 1);
        assert_eq!(t1.flakes, 1);
        assert_eq!(category.raw_test_results["test-2"].failures, 3);
    }

    #[test]
    fn test_add_test_result_categories_independent() {
        let mut categories = HashMap::new();
        add_test_result(&mut categories, "job-a", "test-1", 1, 0, 0);
        add_test_result(&mut categories, "job-b", "test-1", 0, 1, 0);

        assert_eq!(categories["job-a"].raw_test_results["test-1"].successes, 1);
        assert_eq!(categories["job-b"].raw_test_results["test-1"].failures, 1);
    }

    #[test]
    fn test_failure_group_stats_basic() {
        let groups = vec![group(2), group(4), group(9)];
        let prev = vec![group(1), group(5)];

        let stats = compute_failure_group_stats(&groups, &prev);
        assert_eq!(stats.count, 15);
        assert_eq!(stats.count_prev, 6);
        assert_eq!(stats.median, 4);
        assert_eq!(stats.median_prev, 5);
        assert_eq!(stats.avg, 5);
        // Previous average intentionally divides the current count.
        assert_eq!(stats.avg_prev, 7);
    }

    #[test]
    fn test_failure_group_stats_empty() {
        let stats = compute_failure_group_stats(&[], &[]);
        assert_eq!(stats, FailureGroupStats::default());
    }

    #[test]
    fn test_failure_group_stats_empty_previous() {
        let stats = compute_failure_group_stats(&[group(3)], &[]);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.median, 3);
        assert_eq!(stats.avg, 3);
        assert_eq!(stats.count_prev, 0);
        assert_eq!(stats.median_prev, 0);
        assert_eq!(stats.avg_prev, 0);
    }
}
