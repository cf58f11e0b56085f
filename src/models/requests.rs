//! Request DTOs for the notes API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::{Deserialize, Serialize};

/// Body of note create and update requests.
///
/// Missing fields deserialize as empty strings so `validate` can report
/// them with the API's own message instead of a JSON rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl NoteRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.is_empty() || self.content.is_empty() {
            return Some("Missing required fields".to_string());
        }
        None
    }
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Option<String> {
        let fields = [&self.name, &self.email, &self.username, &self.password];
        if fields.iter().any(|field| field.is_empty()) {
            return Some("Missing required fields: name, email, username, password".to_string());
        }
        None
    }
}

/// Body of `POST /login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Option<String> {
        if self.username.is_empty() || self.password.is_empty() {
            return Some("Username and password required".to_string());
        }
        None
    }
}

/// Query string of `GET /notes`.
///
/// Values are kept as raw strings; anything that is not a positive integer
/// falls back to the default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(rename = "_page")]
    pub page: Option<String>,
    #[serde(rename = "_per_page")]
    pub per_page: Option<String>,
}

impl PageQuery {
    /// Requested page, 1 when absent or invalid.
    pub fn page(&self) -> u32 {
        parse_positive(self.page.as_deref()).unwrap_or(1)
    }

    /// Requested page size, `default` when absent or invalid.
    pub fn per_page(&self, default: u32) -> u32 {
        parse_positive(self.per_page.as_deref()).unwrap_or(default)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
}
