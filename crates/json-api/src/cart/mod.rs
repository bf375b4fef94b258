//! Cart

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
mod models;
pub(crate) mod update;

pub(crate) use models::{CartResponse, MessageResponse};
