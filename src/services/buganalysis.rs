//! Known-defect lookup used to attribute test failures to tracked bugs.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::Bug;

/// Release-scoped defect lookup.
///
/// Injected into the aggregation pass so it can be stubbed in tests;
/// treated as a read-only snapshot for the duration of one pass.
pub trait BugCache: Send + Sync {
    /// List the known bugs linked to a failed test for a release.
    ///
    /// An empty `component` filter means "any component"; a non-empty
    /// filter restricts the result to bugs filed against that component.
    /// An empty result means the failure is unknown.
    fn list_bugs(&self, release: &str, component: &str, test_name: &str) -> Vec<Bug>;
}

/// In-memory [`BugCache`] keyed by release and test name.
///
/// Seeded per ingestion pass; replacing a release's bugs swaps the whole
/// release entry so concurrent readers see one consistent snapshot.
#[derive(Default)]
pub struct InMemoryBugCache {
    bugs: RwLock<HashMap<String, HashMap<String, Vec<Bug>>>>,
}

impl InMemoryBugCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all known bugs for a release.
    pub fn set_release_bugs(&self, release: &str, bugs_by_test: HashMap<String, Vec<Bug>>) {
        let mut bugs = self.bugs.write().expect("bug cache lock poisoned");
        bugs.insert(release.to_string(), bugs_by_test);
    }

    /// Drop all known bugs for a release.
    pub fn clear_release(&self, release: &str) {
        let mut bugs = self.bugs.write().expect("bug cache lock poisoned");
        bugs.remove(release);
    }
}

impl BugCache for InMemoryBugCache {
    fn list_bugs(&self, release: &str, component: &str, test_name: &str) -> Vec<Bug> {
        let bugs = self.bugs.read().expect("bug cache lock poisoned");
        let Some(for_test) = bugs.get(release).and_then(|by_test| by_test.get(test_name)) else {
            return Vec::new();
        };

        if component.is_empty() {
            return for_test.clone();
        }
        for_test
            .iter()
            .filter(|bug| bug.components.iter().any(|c| c == component))
            .cloned()
            .collect()
    }
}
