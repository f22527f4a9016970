pub mod applicants;
pub mod error;
pub mod lookup;
pub mod models;
pub mod slug;
pub mod traits;

#[cfg(test)]
pub(crate) mod testutil;

pub use applicants::ApplicantService;
pub use error::AppError;
pub use lookup::{CollectionRead, JobLookupService};
pub use models::{Job, JobCollection};
pub use slug::{JobId, full_slug, slugify};
pub use traits::JobCache;
