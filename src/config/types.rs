// Configuration types module
// Defines the demo server's configuration structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub resources: ResourcesConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads (defaults to CPU cores)
    #[serde(default)]
    pub workers: Option<usize>,
    /// Upper bound for serving one connection, in seconds
    pub connection_timeout: u64,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// `combined`, `common`, `json` or a custom `$var` pattern
    pub access_log_format: String,
    #[serde(default)]
    pub access_log_file: Option<String>,
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Resource locations
#[derive(Debug, Deserialize, Clone)]
pub struct ResourcesConfig {
    /// Directory served under `/static/`
    pub public_dir: String,
}
