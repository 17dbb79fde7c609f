//! Composition root. Builds application state from settings.
//!
//! This is the ONLY place that imports concrete outbound adapters.

use std::sync::Arc;

use crate::{
    adapters::outbound::walmart::WalmartAdapter, app_state::AppState, config::Settings,
    domain::catalog::MockCatalog,
};

pub fn build_app_state(settings: &Settings) -> AppState {
    let catalog = Arc::new(MockCatalog::new());
    let remote = WalmartAdapter::new(
        settings.walmart.client_id.clone(),
        settings.walmart.client_secret.clone(),
        settings.walmart.client_options(),
    );

    tracing::info!(
        catalog_items = catalog.len(),
        walmart_configured = walmart::Credentials::are_present(
            settings.walmart.client_id.as_deref(),
            settings.walmart.client_secret.as_deref(),
        ),
        "building application state"
    );

    AppState::new(catalog, Arc::new(remote), settings.search.clone())
}
