//! Platform identification from CI job names.

/// Platform tokens recognized in job names, checked in this order.
const PLATFORM_TOKENS: &[&str] = &[
    "aws",
    "azure",
    "gcp",
    "metal",
    "openstack",
    "ovirt",
    "vsphere",
    "ppc64le",
    "s390x",
    "arm64",
    "fips",
    "serial",
    "upgrade",
    "proxy",
    "single-node",
    "realtime",
];

/// Derive zero or more platform tags from a job name.
///
/// Pure substring classification; a job can map to several platforms
/// (e.g. a metal upgrade job) and contributes its full counts to each.
pub fn find_platforms(job_name: &str) -> Vec<String> {
    PLATFORM_TOKENS
        .iter()
        .filter(|token| job_name.contains(*token))
        .map(|token| token.to_string())
        .collect()
}
