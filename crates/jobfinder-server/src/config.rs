use std::time::Duration;

use jobfinder_core::AppError;

/// HTTP listener settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Requests running longer than this are cancelled.
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// - `JOBFINDER_SERVER_PORT` (optional, defaults to 3000)
    /// - `JOBFINDER_REQUEST_TIMEOUT_SECS` (optional, defaults to 10)
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let port = match std::env::var("JOBFINDER_SERVER_PORT") {
            Err(_) => defaults.port,
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid JOBFINDER_SERVER_PORT '{raw}': must be a port number"
                ))
            })?,
        };

        let request_timeout = match std::env::var("JOBFINDER_REQUEST_TIMEOUT_SECS") {
            Err(_) => defaults.request_timeout,
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    AppError::ConfigError(format!(
                        "Invalid JOBFINDER_REQUEST_TIMEOUT_SECS '{raw}': must be a positive integer"
                    ))
                })?;
                if secs == 0 {
                    return Err(AppError::ConfigError(
                        "JOBFINDER_REQUEST_TIMEOUT_SECS must be at least 1".into(),
                    ));
                }
                Duration::from_secs(secs)
            }
        };

        Ok(Self {
            port,
            request_timeout,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
