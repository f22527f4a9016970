use jobfinder_cache::RedisCache;
use jobfinder_core::{ApplicantService, JobLookupService};

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub cache: RedisCache,
}

impl AppState {
    pub fn lookup(&self) -> JobLookupService<RedisCache> {
        JobLookupService::new(self.cache.clone())
    }

    pub fn applicants(&self) -> ApplicantService<RedisCache> {
        ApplicantService::new(self.cache.clone())
    }
}
