pub mod handlers;
pub mod types;

use axum::{
    extract::FromRequest,
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::{CorsPolicy, ServerConfig},
    error::ServiceError,
};

/// JSON body extractor that reports malformed bodies in the API's error shape
#[derive(FromRequest, Debug)]
#[from_request(via(axum::Json), rejection(ServiceError))]
pub struct ApiJson<T>(pub T);

fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    match policy {
        CorsPolicy::Permissive => CorsLayer::permissive(),
        CorsPolicy::AllowList(origins) => CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins.iter().cloned()))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    }
}

/// Builds the full application router
pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/calculator/add", post(handlers::add))
        .route("/api/calculator/subtract", post(handlers::subtract))
        .route(
            "/api/abbreviation/{table}",
            get(handlers::list_abbreviations).post(handlers::expand_abbreviation),
        )
        .route(
            "/api/credentials_generator/generate_username",
            post(handlers::generate_username),
        )
        .route(
            "/api/credentials_generator/generate_password",
            post(handlers::generate_password),
        )
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
}
