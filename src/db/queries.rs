//! Read-only report queries against the materialized view of recent
//! test executions.
//!
//! The view is maintained by the ingestion pipeline; these queries only
//! aggregate and derive percentages, with NULLIF guarding the divisions.
//! The derived columns are NUMERIC in Postgres arithmetic and must be
//! cast to float8 on the wire to decode into the `f64` model fields.

use std::time::Instant;

use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, FromQueryResult, Statement, Value,
};
use tracing::info;

use crate::error::AppResult;
use crate::models::Test;

const VARIANT_REPORT_SQL: &str = r#"
WITH results AS (
    SELECT name,
           release,
           sum(current_runs)       AS current_runs,
           sum(current_successes)  AS current_successes,
           sum(current_failures)   AS current_failures,
           sum(current_flakes)     AS current_flakes,
           sum(previous_runs)      AS previous_runs,
           sum(previous_successes) AS previous_successes,
           sum(previous_failures)  AS previous_failures,
           sum(previous_flakes)    AS previous_flakes,
           unnest(variants)        AS variant
    FROM prow_test_report_7d_matview
    WHERE release = $1 AND name ~* $2
    GROUP BY name, release, variant
)
SELECT *,
       (current_successes * 100.0 / NULLIF(current_runs, 0))::float8 AS current_pass_percentage,
       (current_failures * 100.0 / NULLIF(current_runs, 0))::float8 AS current_failure_percentage,
       (previous_successes * 100.0 / NULLIF(previous_runs, 0))::float8 AS previous_pass_percentage,
       (previous_failures * 100.0 / NULLIF(previous_runs, 0))::float8 AS previous_failure_percentage,
       ((current_successes * 100.0 / NULLIF(current_runs, 0)) - (previous_successes * 100.0 / NULLIF(previous_runs, 0)))::float8 AS net_improvement
FROM results
"#;

/// Exclusion predicate for `test_report_exclude_variants`.
///
/// Placeholders start at $3; $1 and $2 are the release and test name.
fn exclude_variants_clause(count: usize) -> String {
    let mut clause = String::new();
    for i in 0..count {
        clause.push_str(&format!(" AND NOT (${} = any(variants))", i + 3));
    }
    clause
}

fn exclude_variants_sql(exclusion_count: usize) -> String {
    format!(
        r#"
WITH results AS (
    SELECT name,
           release,
           sum(current_runs)       AS current_runs,
           sum(current_successes)  AS current_successes,
           sum(current_failures)   AS current_failures,
           sum(current_flakes)     AS current_flakes,
           sum(previous_runs)      AS previous_runs,
           sum(previous_successes) AS previous_successes,
           sum(previous_failures)  AS previous_failures,
           sum(previous_flakes)    AS previous_flakes
    FROM prow_test_report_7d_matview
    WHERE release = $1 AND name = $2{}
    GROUP BY name, release
)
SELECT *,
       NULL::text AS variant,
       (current_successes * 100.0 / NULLIF(current_runs, 0))::float8 AS current_pass_percentage,
       (current_failures * 100.0 / NULLIF(current_runs, 0))::float8 AS current_failure_percentage,
       (previous_successes * 100.0 / NULLIF(previous_runs, 0))::float8 AS previous_pass_percentage,
       (previous_failures * 100.0 / NULLIF(previous_runs, 0))::float8 AS previous_failure_percentage,
       ((current_successes * 100.0 / NULLIF(current_runs, 0)) - (previous_successes * 100.0 / NULLIF(previous_runs, 0)))::float8 AS net_improvement
FROM results
"#,
        exclude_variants_clause(exclusion_count)
    )
}

/// Report for every test matching the given name substrings, grouped by
/// variant.
///
/// The substrings are joined into one case-insensitive alternation and
/// matched in SQL, so the filter is applied before aggregation.
pub async fn test_reports_by_variant(
    conn: &DatabaseConnection,
    release: &str,
    test_substrings: &[String],
) -> AppResult<Vec<Test>> {
    let started = Instant::now();
    let test_substring_filter = test_substrings.join("|");

    let stmt = Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        VARIANT_REPORT_SQL,
        [release.into(), test_substring_filter.into()],
    );
    let rows = conn.query_all_raw(stmt).await?;
    let test_reports = rows
        .iter()
        .map(|row| Test::from_query_result(row, ""))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "test_reports_by_variant completed in {:?} with {} results from db",
        started.elapsed(),
        test_reports.len()
    );
    Ok(test_reports)
}

/// Single-test report with all variants collapsed, optionally excluding
/// some variants.
pub async fn test_report_exclude_variants(
    conn: &DatabaseConnection,
    release: &str,
    test_name: &str,
    exclude_variants: &[String],
) -> AppResult<Vec<Test>> {
    let started = Instant::now();

    let mut values: Vec<Value> = vec![release.into(), test_name.into()];
    for exclude_variant in exclude_variants {
        values.push(exclude_variant.clone().into());
    }

    let sql = exclude_variants_sql(exclude_variants.len());
    let stmt = Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values);
    let rows = conn.query_all_raw(stmt).await?;
    let test_reports = rows
        .iter()
        .map(|row| Test::from_query_result(row, ""))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "test_report_exclude_variants completed in {:?} with {} results from db",
        started.elapsed(),
        test_reports.len()
    );
    Ok(test_reports)
}
