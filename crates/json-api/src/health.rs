//! Storefront JSON API Health Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State};

/// Health response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Storage backend serving requests: `postgres` or `memory`
    pub backend: String,

    /// Server time (RFC 3339)
    pub timestamp: String,
}

/// Health handler
///
/// Pings the database, so a recovered database is picked up again here.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let backend = state.app.store.check_health().await;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        backend: backend.to_string(),
        timestamp: Timestamp::now().to_string(),
    }))
}
