use clap::Args;
use storefront::fixtures;
use storefront_app::{
    database,
    stores::{PgStore, Store},
};

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let pool = super::super::connect(&args.database_url).await?;

    database::migrate(&pool)
        .await
        .map_err(|error| format!("failed to run migrations: {error}"))?;

    let products = fixtures::catalog()
        .map_err(|error| format!("failed to load bundled catalog: {error}"))?
        .into_products();
    let count = products.len();

    PgStore::new(pool)
        .replace_products(products)
        .await
        .map_err(|error| format!("failed to seed catalog: {error}"))?;

    println!("seeded {count} products");

    Ok(())
}
