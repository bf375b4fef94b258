//! Storefront domain services.

pub mod carts;
pub mod catalog;
pub mod checkout;

/// Broad failure categories shared by the services, used by transports to choose a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Unavailable,
    Internal,
}
