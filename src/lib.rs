//! Multi-service quoting for the Eran Studio booking site.
//!
//! The [`pricing`] module holds the quote engine; [`app`] wraps it in a
//! small JSON API for the site's booking screens.

pub mod config;
pub mod error;
pub mod pricing;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::pricing::{PricingCatalog, SummaryFormatter};

/// Shared, read-only state for request handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PricingCatalog>,
    pub formatter: SummaryFormatter,
    pub whatsapp_number: String,
}

impl AppState {
    pub fn new(catalog: PricingCatalog, config: &Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            formatter: SummaryFormatter::new(config.studio_name.clone()),
            whatsapp_number: config.whatsapp_number.clone(),
        }
    }
}

/// Build the application router
pub fn app(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .nest("/api", pricing::router())
        .layer(TraceLayer::new_for_http());

    let router = if config.cors_allow_any_origin {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
