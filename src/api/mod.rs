//! API Module
//!
//! HTTP handlers and routing for the notes REST API.
//!
//! # Endpoints
//! - `GET /notes` - Paginated listing with `X-Total-Count`
//! - `POST /notes` - Create a note
//! - `GET /notes/:id`, `PUT /notes/:id`, `DELETE /notes/:id`
//! - `GET /notes/by-index/:i`, `PUT /notes/by-index/:i`, `DELETE /notes/by-index/:i`
//! - `POST /users` - Register
//! - `POST /login` - Log in
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod json;
pub mod routes;
pub mod users;

pub use handlers::*;
pub use json::ApiJson;
pub use routes::create_router;
pub use users::{create_user, login};
