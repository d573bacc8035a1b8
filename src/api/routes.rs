use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers::{auth, books};
use super::state::AppState;

/// Builds the application router
///
/// Anything not matched by an API route is served from the static
/// front-end directory, so `/` lands on `index.html`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        // Health check
        .route("/health", get(auth::health_check))
        // Account routes
        .route("/books/register", post(auth::register))
        .route("/books/login", post(auth::login))
        .route("/books/logout", post(auth::logout))
        // Reading list routes
        .route("/books/action", post(books::action))
        .route("/books/mybooks", get(books::my_books))
        .route("/books/profile", get(books::profile))
        // Front-end
        .fallback_service(static_files)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
