//! Mapping service errors to HTTP errors.

use std::fmt::Display;

use salvo::prelude::StatusError;
use storefront_app::domain::{
    ErrorKind, carts::CartsServiceError, catalog::CatalogServiceError,
    checkout::CheckoutServiceError,
};
use tracing::error;

/// Service errors that carry an [`ErrorKind`].
pub(crate) trait KindedError: Display {
    fn kind(&self) -> ErrorKind;
}

impl KindedError for CatalogServiceError {
    fn kind(&self) -> ErrorKind {
        CatalogServiceError::kind(self)
    }
}

impl KindedError for CartsServiceError {
    fn kind(&self) -> ErrorKind {
        CartsServiceError::kind(self)
    }
}

impl KindedError for CheckoutServiceError {
    fn kind(&self) -> ErrorKind {
        CheckoutServiceError::kind(self)
    }
}

/// Map a service error to an HTTP error by its kind.
///
/// Validation and lookup failures keep their message. Anything else is logged with `context` and
/// answered with a bare 500.
pub(crate) trait ServiceResultExt<T> {
    fn or_status(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ServiceResultExt<T> for Result<T, E>
where
    E: KindedError,
{
    fn or_status(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| match error.kind() {
            ErrorKind::InvalidArgument => StatusError::bad_request().brief(error.to_string()),
            ErrorKind::NotFound => StatusError::not_found().brief(error.to_string()),
            ErrorKind::Unavailable | ErrorKind::Internal => {
                error!("{context}: {error}");

                StatusError::internal_server_error()
            }
        })
    }
}
