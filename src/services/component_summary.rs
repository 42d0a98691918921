//! Defect-component failure ranking.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::SortedBugzillaComponentResult;

/// Rank pre-grouped per-component failure summaries, highest fail rate
/// first.
///
/// The representative rate is the fail percentage of the component's
/// first (worst) failing job. Ties are broken by case-insensitive
/// ascending component name so repeated runs produce identical output.
/// Note the direction: worst here means highest fail percentage, the
/// opposite end of the scale from the job and platform rankings.
pub fn summarize_jobs_failures_by_bugzilla_component(
    job_failures_by_component: &HashMap<String, SortedBugzillaComponentResult>,
) -> Vec<SortedBugzillaComponentResult> {
    let mut component_results: Vec<SortedBugzillaComponentResult> =
        job_failures_by_component.values().cloned().collect();

    component_results.sort_by(|a, b| {
        let rate_a = representative_fail_percentage(a);
        let rate_b = representative_fail_percentage(b);
        match rate_b.partial_cmp(&rate_a).unwrap_or(Ordering::Equal) {
            Ordering::Equal => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            other => other,
        }
    });

    component_results
}

fn representative_fail_percentage(component: &SortedBugzillaComponentResult) -> f64 {
    component
        .jobs_failed
        .first()
        .map(|job| job.fail_percentage)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BugzillaJobResult;

    fn component(name: &str, fail_percentage: f64) -> (String, SortedBugzillaComponentResult) {
        (
            name.to_string(),
            SortedBugzillaComponentResult {
                name: name.to_string(),
                jobs_failed: vec![BugzillaJobResult {
                    job_name: format!("{}-job", name),
                    bugzilla_component: name.to_string(),
                    number_of_test_failures: 5,
                    fail_percentage,
                }],
            },
        )
    }

    #[test]
    fn test_highest_fail_rate_first() {
        let by_component = HashMap::from([
            component("Networking", 60.0),
            component("Installer", 80.0),
            component("Storage", 20.0),
        ]);

        let ranked = summarize_jobs_failures_by_bugzilla_component(&by_component);
        let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Installer", "Networking", "Storage"]);
    }

    #[test]
    fn test_ties_broken_case_insensitively() {
        let by_component = HashMap::from([
            component("XYZ", 50.0),
            component("abc", 50.0),
            component("Mno", 50.0),
        ]);

        let ranked = summarize_jobs_failures_by_bugzilla_component(&by_component);
        let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["abc", "Mno", "XYZ"]);
    }

    #[test]
    fn test_component_without_failing_jobs_ranks_last() {
        let empty = (
            "Empty".to_string(),
            SortedBugzillaComponentResult {
                name: "Empty".to_string(),
                jobs_failed: Vec::new(),
            },
        );
        let by_component = HashMap::from([component("Networking", 60.0), empty]);

        let ranked = summarize_jobs_failures_by_bugzilla_component(&by_component);
        assert_eq!(ranked[0].name, "Networking");
        assert_eq!(ranked[1].name, "Empty");
    }
}
