// Configuration module entry point
// Loads the demo server configuration from file, environment and defaults

mod types;

use std::net::SocketAddr;

// Re-export public types
pub use types::Config;

impl Config {
    /// Load configuration from specified file path (without extension)
    /// A missing file is not an error; defaults and `SERVER_*` variables apply
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.connection_timeout", 30)?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("resources.public_dir", "public")?
            .build()?;

        settings.try_deserialize()
    }

    /// Load from `config.toml` in the working directory
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
