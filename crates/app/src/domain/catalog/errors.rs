//! Catalog service errors.

use thiserror::Error;

use crate::{domain::ErrorKind, stores::StoreError};

#[derive(Debug, Error)]
pub enum CatalogServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CatalogServiceError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Store(error) => error.kind(),
        }
    }
}
