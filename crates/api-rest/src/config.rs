//! API configuration.

use serde::{Deserialize, Serialize};

/// API configuration, loadable from `LLM_EVAL_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host to bind to
    pub host: String,

    /// Server port to bind to
    pub port: u16,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,

    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,

    /// Emit JSON-formatted logs
    pub json_logs: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            request_timeout_seconds: 30,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl ApiConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Variables use the `LLM_EVAL` prefix, e.g. `LLM_EVAL_PORT=9000`.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("LLM_EVAL"))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// The socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }
}
