//! Fixtures

use thiserror::Error;

use crate::products::{Catalog, CatalogError, Product};

const CATALOG_YAML: &str = include_str!("fixtures/catalog.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The fixture does not describe a valid catalog
    #[error("Invalid catalog fixture: {0}")]
    Catalog(#[from] CatalogError),
}

/// Wrapper for products in YAML
#[derive(Debug, serde::Deserialize)]
struct CatalogFixture {
    products: Vec<Product>,
}

/// Parse a catalog from YAML.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or product ids are not unique.
pub fn parse_catalog(yaml: &str) -> Result<Catalog, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    Ok(Catalog::new(fixture.products)?)
}

/// The seed catalog every store starts from.
///
/// # Errors
///
/// Returns an error if the embedded fixture is invalid.
pub fn catalog() -> Result<Catalog, FixtureError> {
    parse_catalog(CATALOG_YAML)
}
