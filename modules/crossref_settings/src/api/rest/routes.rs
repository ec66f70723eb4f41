//! Route registration

use super::handlers;
use crate::domain::Service;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;

/// Path of the settings form of one context
pub const SETTINGS_PATH: &str = "/contexts/{context_id}/plugins/crossref/settings";

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let router = router
        .route(
            SETTINGS_PATH,
            get(handlers::get_settings).post(handlers::submit_settings),
        )
        .layer(Extension(service));

    Ok(router)
}
