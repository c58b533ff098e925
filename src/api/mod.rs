//! HTTP handlers: HTML pages and the JSON API

pub mod books;
pub mod clients;
pub mod health;
pub mod openapi;
pub mod pages;
pub mod rents;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/:id", get(books::get_book))
        // Clients
        .route("/clients", get(clients::list_clients).post(clients::create_client))
        .route("/clients/:id", get(clients::get_client))
        .route("/clients/:id/rents", get(clients::get_client_rents))
        // Rents
        .route("/rents", post(rents::create_rent))
        .route("/rents/:id", get(rents::get_rent))
        .route("/rents/:id/return", post(rents::return_rent))
        .with_state(state.clone());

    let static_files = ServeDir::new(&state.config.web.static_dir);

    let pages = Router::new()
        .route("/", get(pages::index))
        .route("/clients", get(pages::clients))
        .with_state(state);

    Router::new()
        .merge(pages)
        .nest("/api/v1", api_v1)
        .nest_service("/static", static_files)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
