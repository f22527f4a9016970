use serde::{Deserialize, Deserializer, Serialize};

use crate::slug::slugify;

/// A single job posting as published by feed ingestion.
///
/// Only `title` and `applicants` are interpreted here. Every other field the
/// ingestion service wrote (company, url, description, ...) is carried through
/// untouched in `extra`. A missing title decodes as empty; a missing or null
/// applicant count decodes as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub title: String,
    /// Overwritten with the live counter on detail reads.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub applicants: i64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Job {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            applicants: 0,
            extra: serde_json::Map::new(),
        }
    }

    /// Slug of the title, recomputed on every call.
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}

/// All jobs stored under one category key, in ingestion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCollection {
    /// Filled from the cache key when the payload does not carry it.
    #[serde(default)]
    pub category: String,
    pub jobs: Vec<Job>,
}

impl JobCollection {
    pub fn new(category: impl Into<String>, jobs: Vec<Job>) -> Self {
        Self {
            category: category.into(),
            jobs,
        }
    }

    /// Decode a cached payload. An empty payload is a decode failure.
    pub fn decode(category: &str, bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let mut collection: JobCollection = serde_json::from_slice(bytes)?;
        if collection.category.is_empty() {
            collection.category = category.to_string();
        }
        Ok(collection)
    }

    /// First job whose title slug equals `title_slug`, in stored order.
    pub fn find_by_slug(&self, title_slug: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.slug() == title_slug)
    }
}
