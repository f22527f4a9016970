use jobfinder_core::AppError;

pub const DEFAULT_REGISTRY_KEY: &str = "categories";
pub const DEFAULT_COUNTER_PREFIX: &str = "applicants:";

/// Configuration for the Redis connection and key layout.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub url: String,
    /// List key holding the category registry.
    pub registry_key: String,
    /// Prepended to a title slug to form its applicant counter key.
    pub counter_prefix: String,
}

impl CacheConfig {
    /// Default key layout for the given Redis URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            registry_key: DEFAULT_REGISTRY_KEY.to_string(),
            counter_prefix: DEFAULT_COUNTER_PREFIX.to_string(),
        }
    }

    /// Read configuration from environment variables.
    ///
    /// - `REDIS_URL` (required)
    /// - `JOBFINDER_REGISTRY_KEY` (optional, defaults to `categories`)
    /// - `JOBFINDER_COUNTER_PREFIX` (optional, defaults to `applicants:`)
    pub fn from_env() -> Result<Self, AppError> {
        let url = std::env::var("REDIS_URL").map_err(|_| {
            AppError::ConfigError("REDIS_URL not set. Required for cache access.".into())
        })?;

        let registry_key = match std::env::var("JOBFINDER_REGISTRY_KEY") {
            Err(_) => DEFAULT_REGISTRY_KEY.to_string(),
            Ok(raw) if raw.trim().is_empty() => {
                return Err(AppError::ConfigError(
                    "JOBFINDER_REGISTRY_KEY must not be empty".into(),
                ));
            }
            Ok(raw) => raw,
        };

        let counter_prefix = std::env::var("JOBFINDER_COUNTER_PREFIX")
            .unwrap_or_else(|_| DEFAULT_COUNTER_PREFIX.to_string());

        Ok(Self {
            url,
            registry_key,
            counter_prefix,
        })
    }

    pub fn counter_key(&self, slug: &str) -> String {
        format!("{}{}", self.counter_prefix, slug)
    }
}
