//! Server configuration read from the environment

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Everything the service needs from its environment.
///
/// Collaborators receive the pieces they need from here; nothing else reads
/// process environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Token every API request must present
    pub api_token: String,
    /// SGS endpoint returning the monthly SELIC series as JSON
    pub bcb_api_url: String,
    /// Page of the federal justice correction table
    pub cjf_url: Option<String>,
    /// Directory holding `<kind>.apk` model files
    pub model_dir: PathBuf,
    /// Timeout for upstream HTTP requests
    pub http_timeout: Duration,
}

impl ServerConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => 8080,
        };

        let http_timeout = match non_empty("HTTP_TIMEOUT_SECS") {
            Some(value) => value
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid {
                    name: "HTTP_TIMEOUT_SECS",
                    value,
                })?,
            None => Duration::from_secs(30),
        };

        Ok(Self {
            host: non_empty("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            api_token: non_empty("API_TOKEN").ok_or(ConfigError::Missing("API_TOKEN"))?,
            bcb_api_url: non_empty("BCB_API_URL").ok_or(ConfigError::Missing("BCB_API_URL"))?,
            cjf_url: non_empty("CJF_URL"),
            model_dir: non_empty("MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            http_timeout,
        })
    }

    /// Address to bind the listener to
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let value = format!("{}:{}", self.host, self.port);
        value
            .parse()
            .map_err(|_| ConfigError::Invalid { name: "HOST", value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[("API_TOKEN", "secret"), ("BCB_API_URL", "http://bcb")]))
                .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.model_dir, PathBuf::from("."));
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert!(config.cjf_url.is_none());
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_required_values() {
        let err = ServerConfig::from_lookup(lookup(&[("BCB_API_URL", "http://bcb")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("API_TOKEN")));

        let err = ServerConfig::from_lookup(lookup(&[("API_TOKEN", " ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("API_TOKEN")));
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("API_TOKEN", "secret"),
            ("BCB_API_URL", "http://bcb"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }
}
