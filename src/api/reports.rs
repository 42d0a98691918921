//! Report API handlers: ingestion of raw datasets and reads over the
//! aggregated per-release reports.

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{JobResult, RawReportData, SortedBugzillaComponentResult, TestReport};
use crate::services::{build_test_report, InMemoryBugCache, ReportCache};

/// Response for report ingestion.
#[derive(Debug, Serialize, ToSchema)]
pub struct IngestReportResponse {
    pub release: String,
    pub jobs: usize,
    pub infrequent_jobs: usize,
    pub platforms: usize,
    pub components: usize,
}

/// Query parameters for the ranked job listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct JobsQuery {
    /// Which job list to return: "regular" (default) or "infrequent".
    pub frequency: Option<String>,
}

/// Ingest a raw dataset for a release and build its report.
///
/// Seeds the bug cache with the dataset's known bugs, runs the full
/// aggregation pass, and publishes the resulting report. A payload
/// that omits `number_of_days_of_data` falls back to the configured
/// default.
#[utoipa::path(
    post,
    path = "/api/v1/reports/{release}",
    tag = "Reports",
    request_body = RawReportData,
    params(("release" = String, Path, description = "Release branch")),
    responses(
        (status = 200, description = "Report built and cached", body = IngestReportResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[post("/reports/{release}")]
pub async fn ingest_report(
    path: web::Path<String>,
    payload: web::Json<RawReportData>,
    cache: web::Data<ReportCache>,
    bug_cache: web::Data<InMemoryBugCache>,
    config: web::Data<Config>,
) -> AppResult<HttpResponse> {
    let release = path.into_inner();
    if release.trim().is_empty() {
        return Err(AppError::InvalidInput("release must not be empty".into()));
    }

    let mut data = payload.into_inner();
    if data.number_of_days_of_data < 0 {
        return Err(AppError::InvalidInput(
            "number_of_days_of_data must not be negative".into(),
        ));
    }
    if data.number_of_days_of_data == 0 {
        data.number_of_days_of_data = config.default_days_of_data;
    }

    info!(
        release = %release,
        raw_jobs = data.raw_job_results.len(),
        known_bug_tests = data.known_bugs.len(),
        "ingesting raw report data"
    );

    bug_cache.set_release_bugs(&release, data.known_bugs.clone());
    let report = build_test_report(&release, &data, bug_cache.get_ref());

    let response = IngestReportResponse {
        release: release.clone(),
        jobs: report.job_results.len(),
        infrequent_jobs: report.infrequent_job_results.len(),
        platforms: report.by_platform.len(),
        components: report.by_bugzilla_component.len(),
    };
    cache.set(report);

    Ok(HttpResponse::Ok().json(response))
}

/// Get the full aggregated report for a release.
#[utoipa::path(
    get,
    path = "/api/v1/reports/{release}",
    tag = "Reports",
    params(("release" = String, Path, description = "Release branch")),
    responses(
        (status = 200, description = "Aggregated report", body = TestReport),
        (status = 404, description = "No report for release")
    )
)]
#[get("/reports/{release}")]
pub async fn get_report(
    path: web::Path<String>,
    cache: web::Data<ReportCache>,
) -> AppResult<HttpResponse> {
    let report = lookup_report(&cache, &path)?;
    Ok(HttpResponse::Ok().json(report))
}

/// Get the ranked job lists for a release.
#[utoipa::path(
    get,
    path = "/api/v1/reports/{release}/jobs",
    tag = "Reports",
    params(
        ("release" = String, Path, description = "Release branch"),
        JobsQuery
    ),
    responses(
        (status = 200, description = "Jobs ranked worst pass percentage first", body = [JobResult]),
        (status = 404, description = "No report for release")
    )
)]
#[get("/reports/{release}/jobs")]
pub async fn get_jobs(
    path: web::Path<String>,
    query: web::Query<JobsQuery>,
    cache: web::Data<ReportCache>,
) -> AppResult<HttpResponse> {
    let report = lookup_report(&cache, &path)?;
    let jobs = match query.frequency.as_deref() {
        None | Some("regular") => report.job_results,
        Some("infrequent") => report.infrequent_job_results,
        Some(other) => {
            return Err(AppError::InvalidInput(format!(
                "unknown frequency '{}', expected 'regular' or 'infrequent'",
                other
            )));
        }
    };
    Ok(HttpResponse::Ok().json(jobs))
}

/// Get the platform rollup for a release.
#[utoipa::path(
    get,
    path = "/api/v1/reports/{release}/platforms",
    tag = "Reports",
    params(("release" = String, Path, description = "Release branch")),
    responses(
        (status = 200, description = "Platforms ranked worst pass percentage first", body = [JobResult]),
        (status = 404, description = "No report for release")
    )
)]
#[get("/reports/{release}/platforms")]
pub async fn get_platforms(
    path: web::Path<String>,
    cache: web::Data<ReportCache>,
) -> AppResult<HttpResponse> {
    let report = lookup_report(&cache, &path)?;
    Ok(HttpResponse::Ok().json(report.by_platform))
}

/// Get the defect-component failure ranking for a release.
#[utoipa::path(
    get,
    path = "/api/v1/reports/{release}/components",
    tag = "Reports",
    params(("release" = String, Path, description = "Release branch")),
    responses(
        (status = 200, description = "Components ranked highest fail rate first", body = [SortedBugzillaComponentResult]),
        (status = 404, description = "No report for release")
    )
)]
#[get("/reports/{release}/components")]
pub async fn get_components(
    path: web::Path<String>,
    cache: web::Data<ReportCache>,
) -> AppResult<HttpResponse> {
    let report = lookup_report(&cache, &path)?;
    Ok(HttpResponse::Ok().json(report.by_bugzilla_component))
}

fn lookup_report(cache: &ReportCache, release: &str) -> AppResult<TestReport> {
    cache
        .get(release)
        .ok_or_else(|| AppError::NotFound(format!("report for release '{}'", release)))
}

/// Configure report routes.
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(ingest_report)
        .service(get_report)
        .service(get_jobs)
        .service(get_platforms)
        .service(get_components);
}
