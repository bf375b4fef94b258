//! Carts service errors.

use storefront::cart::QuantityError;
use thiserror::Error;

use crate::{domain::ErrorKind, stores::StoreError};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("Product ID is required")]
    MissingProductId,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Cart item not found")]
    ItemNotFound,

    #[error(transparent)]
    InvalidQuantity(#[from] QuantityError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CartsServiceError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingProductId | Self::InvalidQuantity(_) => ErrorKind::InvalidArgument,
            Self::ProductNotFound | Self::ItemNotFound => ErrorKind::NotFound,
            Self::Store(error) => error.kind(),
        }
    }
}
