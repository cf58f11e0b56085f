//! Client Module
//!
//! Everything a notes frontend needs short of rendering: typed HTTP calls,
//! the login session, and cache-assisted page fetching with preloading.

mod error;
mod fetcher;
mod http;
mod notes;
mod session;
mod source;

pub use error::ClientError;
pub use fetcher::{NotesFetcher, NotesPage};
pub use http::HttpNotesClient;
pub use notes::NotesClient;
pub use session::Session;
pub use source::{NotesSource, RawPage};
