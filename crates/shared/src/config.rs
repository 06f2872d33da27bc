//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` address to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `SCHOOLFIN__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SCHOOLFIN").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_defaults() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
        assert_eq!(server.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{"database": {"url": "postgres://localhost/schoolfin"}}"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.url, "postgres://localhost/schoolfin");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.min_connections, 1);
    }

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("SCHOOLFIN__DATABASE__URL", Some("postgres://env/schoolfin")),
                ("SCHOOLFIN__SERVER__PORT", Some("9090")),
                ("RUN_MODE", Some("test-does-not-exist")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.database.url, "postgres://env/schoolfin");
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.server.host, "0.0.0.0");
            },
        );
    }

    #[test]
    fn test_load_requires_database_url() {
        temp_env::with_vars(
            [
                ("SCHOOLFIN__DATABASE__URL", None::<&str>),
                ("RUN_MODE", Some("test-does-not-exist")),
            ],
            || {
                assert!(AppConfig::load().is_err());
            },
        );
    }
}
