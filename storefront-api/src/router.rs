use axum::{http::Method, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, routes};

pub fn create(app_state: AppState, app_url: String) -> Router<()> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin.to_str().unwrap_or_default() == app_url
        }));

    Router::new()
        .route("/", get(|| async { "Storefront API is running" }))
        .nest("/api/products", routes::products::router())
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
