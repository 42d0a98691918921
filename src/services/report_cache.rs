//! Shared cache of the latest aggregated report per release.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::TestReport;

/// Latest [`TestReport`] per release.
///
/// Reports are replaced whole and never mutated in place, so readers
/// always observe one consistent aggregation pass.
#[derive(Default)]
pub struct ReportCache {
    reports: RwLock<HashMap<String, TestReport>>,
}

impl ReportCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a freshly built report, replacing any previous one for
    /// the same release.
    pub fn set(&self, report: TestReport) {
        let mut reports = self.reports.write().expect("report cache lock poisoned");
        reports.insert(report.release.clone(), report);
    }

    /// Get the latest report for a release.
    pub fn get(&self, release: &str) -> Option<TestReport> {
        let reports = self.reports.read().expect("report cache lock poisoned");
        reports.get(release).cloned()
    }

    /// Releases with a cached report.
    pub fn releases(&self) -> Vec<String> {
        let reports = self.reports.read().expect("report cache lock poisoned");
        let mut releases: Vec<String> = reports.keys().cloned().collect();
        releases.sort();
        releases
    }
}
