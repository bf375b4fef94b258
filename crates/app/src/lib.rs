//! Storefront application services and persistence.

pub mod context;
pub mod database;
pub mod domain;
pub mod stores;

#[cfg(test)]
mod test;
