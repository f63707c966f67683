// Configuration module entry point
// Layered configuration: optional config.toml, environment, defaults

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, RoutesConfig, ServerConfig};

impl Config {
    /// Load configuration from the default `config.toml` location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension).
    ///
    /// The file is optional; every key has a default. `SERVER_*`
    /// environment variables override the file, and a bare `PORT`
    /// variable overrides the listen port (the deployment platform
    /// supplies it that way).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.enable_cors", true)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB, text payloads only
            .set_default("routes.static_route", "/static")?
            .set_default("routes.static_dir", "static")?
            .set_default("routes.index_file", "static/index.html")?;

        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let config = Config::load_from("no-such-config").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert!(config.http.enable_cors);
        assert_eq!(config.routes.static_route, "/static");
        assert_eq!(config.routes.static_dir, "static");
        assert_eq!(config.logging.access_log_format, "combined");
        assert_eq!(
            config.routes.favicon_paths,
            vec!["/favicon.ico", "/favicon.svg"]
        );
    }

    #[test]
    fn test_socket_addr_binds_all_interfaces() {
        let config = Config::load_from("no-such-config").unwrap();
        let addr = config.get_socket_addr().unwrap();
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 8000);
    }
}
