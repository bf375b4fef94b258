//! Server configuration module

use clap::Parser;

use crate::config::{
    database::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod database;
pub(crate) mod observability;
pub(crate) mod server;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Storage settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "storefront-json",
            "--port",
            "8080",
            "--database-url",
            "postgres://localhost/storefront",
            "--database-connect-timeout-seconds",
            "2",
            "--database-reconnect-interval-seconds",
            "30",
        ])?;

        assert_eq!(config.socket_addr(), format!("{}:8080", config.server.host));
        assert_eq!(
            config.database.database_url.as_deref(),
            Some("postgres://localhost/storefront")
        );
        assert_eq!(config.database.store_settings().connect_timeout.as_secs(), 2);
        assert_eq!(config.database.store_settings().reconnect_interval.as_secs(), 30);
        assert_eq!(config.server.shutdown_grace().as_secs(), 10);

        Ok(())
    }

    #[test]
    fn catalog_seeding_can_be_disabled() -> TestResult {
        let config = ServerConfig::try_parse_from(["storefront-json", "--seed-catalog", "false"])?;

        assert!(!config.database.store_settings().seed_catalog);

        Ok(())
    }
}
