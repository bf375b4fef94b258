//! Checkout service errors.

use storefront::checkout::CheckoutError;
use thiserror::Error;

use crate::{domain::ErrorKind, stores::StoreError};

#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    #[error(transparent)]
    Invalid(#[from] CheckoutError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CheckoutServiceError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Invalid(_) => ErrorKind::InvalidArgument,
            Self::Store(error) => error.kind(),
        }
    }
}
