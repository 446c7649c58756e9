//! This service is split in 2 main modules:
//!
//! - [gateway] (outbound Pesapal API client)
//! - [relay] (storefront-facing payment initiation surface)
#![doc = include_str!("../README.md")]

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use tower_http::cors::CorsLayer;

use crate::{config::Config, state::AppState};

/// Frontend delivery with the single-page-application fallback
pub mod assets;
pub mod config;
/// Pesapal integration
///
/// This module defines the types and methods to communicate with the external
/// payment gateway.
pub mod gateway;
/// Storefront-facing relay surface
///
/// This module defines the types and endpoint behind `/initiate-payment`.
pub mod relay;
pub mod state;

/// Assemble the application router: the payment relay route, the static
/// asset fallback, and the CORS and request-trace layers.
pub fn app(config: &Config, state: AppState) -> Router {
    let origin: HeaderValue = config
        .allowed_origin
        .parse()
        .expect("allowed origin is a valid header value");
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(relay::api::router())
        .fallback_service(assets::service(&config.assets_dir))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}
