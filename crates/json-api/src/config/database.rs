//! Database Config

use std::time::Duration;

use clap::Args;
use storefront_app::context::StoreSettings;

/// Storage settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string. Runs on in-memory storage when unset.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Seconds to wait for the initial database connection.
    #[arg(long, env = "DATABASE_CONNECT_TIMEOUT_SECONDS", default_value_t = 5_u64)]
    pub database_connect_timeout_seconds: u64,

    /// Seconds between reconnect attempts while serving from in-memory storage.
    #[arg(long, env = "DATABASE_RECONNECT_INTERVAL_SECONDS", default_value_t = 5_u64)]
    pub database_reconnect_interval_seconds: u64,

    /// Replace the stored catalog with the bundled sample products on startup.
    #[arg(
        long,
        env = "SEED_CATALOG",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub seed_catalog: bool,
}

impl DatabaseConfig {
    /// Settings for building the application context.
    #[must_use]
    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            database_url: self.database_url.clone(),
            connect_timeout: Duration::from_secs(self.database_connect_timeout_seconds),
            reconnect_interval: Duration::from_secs(self.database_reconnect_interval_seconds),
            seed_catalog: self.seed_catalog,
        }
    }
}
