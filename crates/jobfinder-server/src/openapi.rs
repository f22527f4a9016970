use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "jobfinder API",
        version = "0.1.0",
        description = "Job postings served from a Redis cache, grouped by category."
    ),
    paths(
        crate::routes::list_all_jobs,
        crate::routes::list_jobs_by_category,
        crate::routes::get_job,
        crate::routes::apply_to_job,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::JobResponse,
        crate::dto::JobCollectionResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "jobs", description = "Job listings and applications"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
