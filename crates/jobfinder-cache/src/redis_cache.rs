use jobfinder_core::error::AppError;
use jobfinder_core::traits::JobCache;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, ErrorKind, RedisError};

use crate::config::CacheConfig;

/// Redis-backed job cache.
///
/// Holds a [`ConnectionManager`]: one multiplexed connection that reconnects
/// on its own and is cheap to clone, so each call clones it instead of
/// checking out a pooled connection.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
    config: CacheConfig,
}

impl RedisCache {
    /// Connect to Redis with the given configuration.
    pub async fn connect(config: &CacheConfig) -> Result<Self, AppError> {
        let client = redis::Client::open(config.url.as_str())
            .map_err(|e| AppError::ConfigError(format!("Invalid REDIS_URL: {e}")))?;

        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| AppError::StoreUnavailable(format!("Failed to connect: {e}")))?;

        tracing::debug!(registry_key = %config.registry_key, "Connected to Redis");
        Ok(Self::from_connection(conn, config.clone()))
    }

    /// Create a `RedisCache` from an existing connection (useful for testing).
    pub fn from_connection(conn: ConnectionManager, config: CacheConfig) -> Self {
        Self { conn, config }
    }
}

/// Wrong-typed values are data problems, everything else is transport.
fn map_redis_error(key: &str, e: RedisError) -> AppError {
    // TypeError: a GET reply that does not parse as i64.
    // WRONGTYPE: GET or LRANGE on a key of another type.
    // ERR: INCR on a non-integer value ("value is not an integer or out of
    // range") or an overflowing counter.
    let wrong_type = e.kind() == ErrorKind::TypeError
        || e.code() == Some("WRONGTYPE")
        || (e.kind() == ErrorKind::ResponseError && e.code() == Some("ERR"));

    if wrong_type {
        AppError::CorruptValue {
            key: key.to_string(),
            message: e.to_string(),
        }
    } else {
        AppError::StoreUnavailable(e.to_string())
    }
}

impl JobCache for RedisCache {
    async fn list_registry(&self) -> Result<Vec<String>, AppError> {
        let key = &self.config.registry_key;
        let mut conn = self.conn.clone();
        let keys: Vec<String> = conn
            .lrange(key, 0, -1)
            .await
            .map_err(|e| map_redis_error(key, e))?;
        Ok(keys)
    }

    async fn get_collection(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        let mut conn = self.conn.clone();
        let bytes: Option<Vec<u8>> = conn.get(key).await.map_err(|e| map_redis_error(key, e))?;
        Ok(bytes)
    }

    async fn get_counter(&self, slug: &str) -> Result<i64, AppError> {
        let key = self.config.counter_key(slug);
        let mut conn = self.conn.clone();
        let count: Option<i64> = conn
            .get(&key)
            .await
            .map_err(|e| map_redis_error(&key, e))?;
        Ok(count.unwrap_or(0))
    }

    async fn increment_counter(&self, slug: &str) -> Result<i64, AppError> {
        let key = self.config.counter_key(slug);
        let mut conn = self.conn.clone();
        // INCR creates the key at 0 first, so there is no separate init step.
        let count: i64 = conn
            .incr(&key, 1i64)
            .await
            .map_err(|e| map_redis_error(&key, e))?;
        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.conn.clone();
        let _pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| AppError::StoreUnavailable(e.to_string()))?;
        Ok(())
    }
}
