//! Domain models for the CI Health Server.

pub mod bug;
pub mod component;
pub mod job_result;
pub mod raw_result;
pub mod report;
pub mod test;
pub mod test_result;

// Re-export commonly used types
pub use bug::Bug;
pub use component::{BugzillaJobResult, SortedBugzillaComponentResult};
pub use job_result::JobResult;
pub use raw_result::{RawJobResult, RawJobRunResult};
pub use report::{FailureGroupStats, RawReportData, TestReport};
pub use test::Test;
pub use test_result::{AggregateTestsResult, RawTestResult, SortedAggregateTestsResult, TestResult};
