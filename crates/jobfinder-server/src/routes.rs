use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use jobfinder_core::AppError;
use jobfinder_core::traits::JobCache;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::dto::{HealthResponse, JobCollectionResponse, JobResponse, collections_response};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

const LANDING_PAGE: &str = include_str!("../static/index.html");

/// Build the full router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/api/jobs", get(list_all_jobs))
        .route("/api/categories/{category}/jobs", get(list_jobs_by_category))
        .route("/api/jobs/{id}", get(get_job))
        .route("/api/jobs/{id}/apply", post(apply_to_job));

    let public = Router::new()
        .route("/", get(landing))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(api).with_state(state)
}

pub async fn landing() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

// ---------------------------------------------------------------------------
// Jobs
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/api/jobs",
    responses(
        (status = 200, description = "All categories in registry order", body = [JobCollectionResponse]),
        (status = 503, description = "Cache unavailable", body = crate::dto::ErrorResponse),
    ),
    tag = "jobs"
)]
pub async fn list_all_jobs(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let collections = state.lookup().list_all_jobs().await?;
    Ok(axum::Json(collections_response(collections)))
}

#[utoipa::path(
    get,
    path = "/api/categories/{category}/jobs",
    params(
        ("category" = String, Path, description = "Category key")
    ),
    responses(
        (status = 200, description = "Single-element list with the category", body = [JobCollectionResponse]),
        (status = 404, description = "Not found", body = String, content_type = "text/plain"),
        (status = 503, description = "Cache unavailable", body = crate::dto::ErrorResponse),
    ),
    tag = "jobs"
)]
pub async fn list_jobs_by_category(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let collections = state.lookup().list_jobs_by_category(&category).await?;
    Ok(axum::Json(collections_response(collections)))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(
        ("id" = String, Path, description = "Job identifier: <category>--<title-slug>")
    ),
    responses(
        (status = 200, description = "Job details with live applicant count", body = JobResponse),
        (status = 404, description = "Not found", body = String, content_type = "text/plain"),
        (status = 503, description = "Cache unavailable", body = crate::dto::ErrorResponse),
    ),
    tag = "jobs"
)]
pub async fn get_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let job = state.applicants().get_job(&id).await?;
    Ok(axum::Json(JobResponse::from(job)))
}

#[utoipa::path(
    post,
    path = "/api/jobs/{id}/apply",
    params(
        ("id" = String, Path, description = "Job identifier: <category>--<title-slug>")
    ),
    responses(
        (status = 200, description = "Application recorded; job with updated count", body = JobResponse),
        (status = 404, description = "Not found", body = String, content_type = "text/plain"),
        (status = 503, description = "Cache unavailable", body = crate::dto::ErrorResponse),
    ),
    tag = "jobs"
)]
pub async fn apply_to_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let job = state
        .applicants()
        .with_span(tracing::info_span!("apply", job = %id))
        .apply_to_job(&id)
        .await?;
    Ok(axum::Json(JobResponse::from(job)))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (status, response) = health_report(state.cache.ping().await);
    (status, axum::Json(response))
}

fn health_report(ping: Result<(), AppError>) -> (StatusCode, HealthResponse) {
    match ping {
        Ok(()) => (
            StatusCode::OK,
            HealthResponse {
                status: "healthy",
                cache: "ok",
            },
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                HealthResponse {
                    status: "unhealthy",
                    cache: "error",
                },
            )
        }
    }
}
