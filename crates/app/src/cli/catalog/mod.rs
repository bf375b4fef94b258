use clap::{Args, Subcommand};

mod list;
mod seed;

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    /// Replace the stored catalog with the bundled sample products
    Seed(seed::SeedArgs),
    /// Print the catalog as a table
    List(list::ListArgs),
}

pub(crate) async fn run(command: CatalogCommand) -> Result<(), String> {
    match command.command {
        CatalogSubcommand::Seed(args) => seed::run(args).await,
        CatalogSubcommand::List(args) => list::run(args).await,
    }
}
