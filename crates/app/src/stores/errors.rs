//! Store errors.

use std::num::TryFromIntError;

use storefront::{cart::QuantityError, products::CatalogError};
use thiserror::Error;

use crate::domain::ErrorKind;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached.
    #[error("storage backend unavailable")]
    Unavailable(#[source] sqlx::Error),

    #[error("storage error")]
    Sql(#[source] sqlx::Error),

    #[error("invalid catalog")]
    Catalog(#[from] CatalogError),

    #[error("stored value out of range")]
    OutOfRange(#[from] TryFromIntError),

    /// A merge would push a line item past the storable quantity.
    #[error(transparent)]
    Quantity(#[from] QuantityError),
}

impl StoreError {
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Unavailable(_) => ErrorKind::Unavailable,
            Self::Quantity(_) => ErrorKind::InvalidArgument,
            Self::Sql(_) | Self::Catalog(_) | Self::OutOfRange(_) => ErrorKind::Internal,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        if matches!(
            error,
            sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::WorkerCrashed
        ) {
            return Self::Unavailable(error);
        }

        Self::Sql(error)
    }
}
