//! API Routes
//!
//! Configures the Axum router with all notes server endpoints.

use axum::{
    http::HeaderName,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_note, delete_note, delete_note_by_index, get_note, get_note_by_index, health_handler,
    list_notes, update_note, update_note_by_index, AppState,
};
use super::users::{create_user, login};
use crate::models::TOTAL_COUNT_HEADER;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /notes` - One page of notes (`_page`, `_per_page`)
/// - `POST /notes` - Create a note (bearer)
/// - `GET|PUT|DELETE /notes/:id` - Read, update (bearer), delete (bearer)
/// - `GET|PUT|DELETE /notes/by-index/:i` - Same, addressed by position
/// - `POST /users` - Register
/// - `POST /login` - Issue a bearer token
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: any origin, exposing `X-Total-Count` to browsers
/// - Tracing: logs every request
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(TOTAL_COUNT_HEADER)]);

    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/by-index/:i",
            get(get_note_by_index)
                .put(update_note_by_index)
                .delete(delete_note_by_index),
        )
        .route(
            "/notes/:id",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route("/users", post(create_user))
        .route("/login", post(login))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
