use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// ```text
/// GET  /                    fixed greeting
/// GET  /reviews             all reviews, or ?query=<keyword> search
/// GET  /reviews/{id}        one review
/// PUT  /reviews/{id}        replace content from a JSON body
/// GET  /reviews/{id}/edit   edit form
/// ```
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/reviews", get(handlers::list_reviews))
        .route(
            "/reviews/{id}",
            get(handlers::get_review).put(handlers::edit_review),
        )
        .route("/reviews/{id}/edit", get(handlers::edit_form))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
