pub mod categories;
pub mod products;

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::AppError;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(categories::routes())
        .merge(products::routes())
        .route("/", get(|| async { "Catalog API" }))
        .route("/health", get(health_check))
        .method_not_allowed_fallback(method_not_allowed)
}

/// Full application under the `/api` base path, with state applied.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", create_router())
        .fallback(route_not_found)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PUT, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn health_check() -> &'static str {
    "OK"
}

async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
