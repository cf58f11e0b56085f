//! Notes App - A small notes service and its paginated client
//!
//! The server side keeps notes and users in memory behind a JSON REST API
//! with bearer-token auth. The client side fetches pages of notes through
//! a bounded, time-limited page cache and preloads the pages around the
//! one being viewed.

pub mod api;
pub mod auth;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod store;

pub use api::{create_router, AppState};
pub use client::NotesClient;
pub use config::{ClientConfig, Config};
