use std::sync::Arc;

use clap::Args;
use rust_decimal::Decimal;
use storefront::{money::format_price, products::ProductFilter};
use storefront_app::{
    context::AppContext,
    stores::{PgStore, Store},
};
use tabled::{Table, Tabled, settings::Style};

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// PostgreSQL connection string; the bundled catalog is listed when omitted
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// Case-insensitive match on name or description
    #[arg(long)]
    search: Option<String>,

    /// Category to show, or "All"
    #[arg(long)]
    category: Option<String>,
}

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Rating")]
    rating: String,
}

pub(crate) async fn run(args: ListArgs) -> Result<(), String> {
    let context = match args.database_url.as_deref() {
        Some(url) => {
            let store: Arc<dyn Store> = Arc::new(PgStore::new(super::super::connect(url).await?));

            AppContext::from_store(store)
        }
        None => AppContext::in_memory().map_err(|error| error.to_string())?,
    };

    let products = context
        .catalog
        .list_products(ProductFilter {
            search: args.search,
            category: args.category,
        })
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no matching products");
        return Ok(());
    }

    let rows = products.into_iter().map(|product| ProductRow {
        id: product.id,
        name: product.name,
        category: product.category,
        price: format_price(Decimal::from(product.price)),
        rating: format!("{:.1} ({})", product.rating, product.reviews),
    });

    println!("{}", Table::new(rows).with(Style::rounded()));

    Ok(())
}
