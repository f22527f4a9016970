use serde::Serialize;

use jobfinder_core::models::{Job, JobCollection};

// ---------------------------------------------------------------------------
// Jobs
// ---------------------------------------------------------------------------

/// A job posting. Fields written by feed ingestion beyond `title` and
/// `applicants` are passed through at the top level.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct JobResponse {
    pub title: String,
    pub applicants: i64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            title: job.title,
            applicants: job.applicants,
            extra: job.extra,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct JobCollectionResponse {
    pub category: String,
    pub jobs: Vec<JobResponse>,
}

impl From<JobCollection> for JobCollectionResponse {
    fn from(collection: JobCollection) -> Self {
        Self {
            category: collection.category,
            jobs: collection.jobs.into_iter().map(JobResponse::from).collect(),
        }
    }
}

pub fn collections_response(collections: Vec<JobCollection>) -> Vec<JobCollectionResponse> {
    collections
        .into_iter()
        .map(JobCollectionResponse::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub cache: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
