//! Full application router: welcome route, resource routes, fallback, middleware.

use super::api::api_routes;
use crate::handlers::common::{route_not_found, welcome};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Resource routes are nested under `api_prefix` when given; `/` always
/// answers at the root. Unmatched paths get the JSON 404.
pub fn build_router(state: AppState, api_prefix: Option<&str>) -> Router {
    let api = api_routes(state);
    let router = Router::new().route("/", get(welcome));
    let router = match api_prefix {
        Some(prefix) => router.nest(prefix, api),
        None => router.merge(api),
    };
    router.fallback(route_not_found).layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(CorsLayer::permissive()),
    )
}
