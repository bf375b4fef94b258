use std::time::Duration;

use clap::{Parser, Subcommand};
use sqlx::PgPool;
use storefront_app::database;

mod catalog;
mod db;

#[derive(Debug, Parser)]
#[command(name = "storefront-app", about = "Storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Catalog(catalog::CatalogCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Catalog(command) => catalog::run(command).await,
        }
    }
}

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

async fn connect(database_url: &str) -> Result<PgPool, String> {
    database::connect(database_url, CONNECT_TIMEOUT)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))
}
