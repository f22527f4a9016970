use tracing::{Instrument, Span};

use crate::error::AppError;
use crate::lookup::JobLookupService;
use crate::models::Job;
use crate::slug::JobId;
use crate::traits::JobCache;

/// Reads and bumps the per-job applicant counters, and merges them into
/// detail reads.
///
/// Counters are keyed by title slug and live outside the job collection, so
/// applying never rewrites the collection payload.
#[derive(Clone)]
pub struct ApplicantService<C: JobCache> {
    cache: C,
    lookup: JobLookupService<C>,
    span: Span,
}

impl<C: JobCache> ApplicantService<C> {
    pub fn new(cache: C) -> Self {
        Self {
            lookup: JobLookupService::new(cache.clone()),
            cache,
            span: tracing::info_span!("applicants"),
        }
    }

    /// Log all events of this service (and its lookups) under `span`.
    pub fn with_span(mut self, span: Span) -> Self {
        self.lookup = self.lookup.with_span(span.clone());
        self.span = span;
        self
    }

    /// Current applicant count for a title slug; 0 if never applied to.
    pub async fn get_count(&self, title_slug: &str) -> Result<i64, AppError> {
        self.cache.get_counter(title_slug).await
    }

    /// Detail read: the job with its live applicant count.
    pub async fn get_job(&self, full_slug: &str) -> Result<Job, AppError> {
        let id = parse_id(full_slug)?;
        self.load_with_count(&id).await
    }

    /// Record one application and return the job with the updated count.
    ///
    /// The increment and the read-back are separate cache calls: a concurrent
    /// applicant landing in between is reflected in the returned count. A
    /// failed increment is logged and the read-back is still attempted.
    pub async fn apply_to_job(&self, full_slug: &str) -> Result<Job, AppError> {
        let id = parse_id(full_slug)?;

        async {
            match self.cache.increment_counter(id.title_slug()).await {
                Ok(count) => {
                    tracing::info!(job = %id, applicants = count, "Application recorded");
                }
                Err(e) => {
                    tracing::warn!(job = %id, error = %e, "Failed to record application");
                }
            }
        }
        .instrument(self.span.clone())
        .await;

        self.load_with_count(&id).await
    }

    async fn load_with_count(&self, id: &JobId) -> Result<Job, AppError> {
        let mut job = self.lookup.find_by_id(id).await?;
        job.applicants = self.get_count(id.title_slug()).await?;
        Ok(job)
    }
}

fn parse_id(full_slug: &str) -> Result<JobId, AppError> {
    JobId::parse(full_slug)
        .ok_or_else(|| AppError::NotFound(format!("malformed job id {full_slug}")))
}
