//! Domain documents and the request/response DTOs exchanged over HTTP
//!
//! Shared by the server handlers and the client so both sides agree on the
//! wire format.

pub mod note;
pub mod requests;
pub mod responses;
pub mod user;

// Re-export commonly used types
pub use note::{Author, Note};
pub use requests::{CreateUserRequest, LoginRequest, NoteRequest, PageQuery};
pub use responses::{ErrorResponse, HealthResponse, LoginResponse};
pub use user::{User, UserProfile};

/// Response header carrying the total number of notes on listing requests
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Page size used when a listing request does not name one
pub const DEFAULT_PER_PAGE: u32 = 10;
