use std::future::Future;

use crate::error::AppError;

/// Key-value cache holding the category registry, the serialized job
/// collections and the applicant counters.
///
/// Absent keys are never errors: they surface as an empty registry, `None`
/// or a zero count. Transport failures are `AppError::StoreUnavailable`.
pub trait JobCache: Send + Sync + Clone {
    /// Category keys in registry order.
    fn list_registry(&self) -> impl Future<Output = Result<Vec<String>, AppError>> + Send;

    /// Raw serialized collection stored under `key`.
    fn get_collection(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<Vec<u8>>, AppError>> + Send;

    /// Current applicant count for a title slug.
    fn get_counter(&self, slug: &str) -> impl Future<Output = Result<i64, AppError>> + Send;

    /// Atomically add one to the counter for a title slug and return the new
    /// value. Implementations must use a single atomic store operation.
    fn increment_counter(&self, slug: &str)
    -> impl Future<Output = Result<i64, AppError>> + Send;

    /// Check connectivity to the cache.
    fn ping(&self) -> impl Future<Output = Result<(), AppError>> + Send;
}
