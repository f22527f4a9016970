use tracing::{Instrument, Span};

use crate::error::AppError;
use crate::models::{Job, JobCollection};
use crate::slug::JobId;
use crate::traits::JobCache;

/// Outcome of reading one category's collection from the cache.
///
/// Transport failures are not represented here; they are the `Err` side of
/// [`JobLookupService::read_collection`]. A key holding the wrong value type
/// counts as undecodable.
#[derive(Debug)]
pub enum CollectionRead {
    Found(JobCollection),
    Absent,
    Undecodable(String),
}

/// Resolves job collections and single jobs from cached category payloads.
///
/// Policy per outcome:
///
/// | read          | `list_all_jobs` | `list_jobs_by_category` / `find_job` |
/// |---------------|-----------------|--------------------------------------|
/// | `Found`       | included        | used                                 |
/// | `Absent`      | skipped         | `NotFound`                           |
/// | `Undecodable` | skipped, warned | `NotFound`, warned                   |
/// | `Err(_)`      | propagated      | propagated                           |
#[derive(Clone)]
pub struct JobLookupService<C: JobCache> {
    cache: C,
    span: Span,
}

impl<C: JobCache> JobLookupService<C> {
    pub fn new(cache: C) -> Self {
        Self {
            cache,
            span: tracing::info_span!("job_lookup"),
        }
    }

    /// Log all events of this service under `span` instead of the default one.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Fetch and decode the collection stored under `key`.
    pub async fn read_collection(&self, key: &str) -> Result<CollectionRead, AppError> {
        let bytes = match self.cache.get_collection(key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Ok(CollectionRead::Absent),
            Err(AppError::CorruptValue { message, .. }) => {
                return Ok(CollectionRead::Undecodable(message));
            }
            Err(e) => return Err(e),
        };

        Ok(match JobCollection::decode(key, &bytes) {
            Ok(collection) => CollectionRead::Found(collection),
            Err(e) => CollectionRead::Undecodable(e.to_string()),
        })
    }

    /// Every decodable collection, in registry order.
    pub async fn list_all_jobs(&self) -> Result<Vec<JobCollection>, AppError> {
        async {
            let keys = self.cache.list_registry().await?;
            let mut collections = Vec::with_capacity(keys.len());

            for key in &keys {
                match self.read_collection(key).await? {
                    CollectionRead::Found(collection) => collections.push(collection),
                    CollectionRead::Absent => {
                        tracing::debug!(category = %key, "Registered category has no payload");
                    }
                    CollectionRead::Undecodable(e) => {
                        tracing::warn!(category = %key, error = %e, "Skipping undecodable category");
                    }
                }
            }

            tracing::debug!(
                registered = keys.len(),
                returned = collections.len(),
                "Listed all jobs"
            );
            Ok::<_, AppError>(collections)
        }
        .instrument(self.span.clone())
        .await
    }

    /// The collection for one category, as a single-element list.
    pub async fn list_jobs_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<JobCollection>, AppError> {
        async {
            match self.read_collection(category).await? {
                CollectionRead::Found(collection) => Ok(vec![collection]),
                CollectionRead::Absent => Err(AppError::NotFound(format!("category {category}"))),
                CollectionRead::Undecodable(e) => {
                    tracing::warn!(%category, error = %e, "Category payload is undecodable");
                    Err(AppError::NotFound(format!("category {category}")))
                }
            }
        }
        .instrument(self.span.clone())
        .await
    }

    /// Locate a job by its composite identifier `<category>--<title-slug>`.
    pub async fn find_job(&self, full_slug: &str) -> Result<Job, AppError> {
        let id = JobId::parse(full_slug)
            .ok_or_else(|| AppError::NotFound(format!("malformed job id {full_slug}")))?;
        self.find_by_id(&id).await
    }

    /// Scan the category's jobs in stored order; the first slug match wins.
    pub async fn find_by_id(&self, id: &JobId) -> Result<Job, AppError> {
        async {
            let collection = match self.read_collection(id.category()).await? {
                CollectionRead::Found(collection) => collection,
                CollectionRead::Absent => {
                    return Err(AppError::NotFound(format!("job {id}")));
                }
                CollectionRead::Undecodable(e) => {
                    tracing::warn!(category = %id.category(), error = %e, "Category payload is undecodable");
                    return Err(AppError::NotFound(format!("job {id}")));
                }
            };

            collection
                .find_by_slug(id.title_slug())
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("job {id}")))
        }
        .instrument(self.span.clone())
        .await
    }
}
