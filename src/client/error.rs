//! Client Error Module
//!
//! Failures seen by the notes client, and the messages shown for them.

use thiserror::Error;

// == Client Error Enum ==
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    /// 401 from the backend, or an action attempted without a session
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 403 from the backend
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 404 from the backend
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response, with the backend's message
    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// A response arrived but could not be understood
    #[error("Invalid response: {0}")]
    Parse(String),
}

impl ClientError {
    /// Maps a non-2xx status and its `{"error"}` message.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message.unwrap_or_default();
        match status {
            401 => ClientError::Unauthorized(message),
            403 => ClientError::Forbidden(message),
            404 => ClientError::NotFound(message),
            _ => ClientError::Backend { status, message },
        }
    }

    /// HTTP status behind the error, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized(_) => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::NotFound(_) => Some(404),
            ClientError::Backend { status, .. } => Some(*status),
            ClientError::Network(_) | ClientError::Parse(_) => None,
        }
    }

    /// True when the session should be dropped.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_))
    }

    // == User Message ==
    /// Text suitable for a notification area.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(_) => {
                "Network error. Please check your internet connection and try again.".to_string()
            }
            ClientError::Unauthorized(_) => "Authentication required. Please log in again.".to_string(),
            ClientError::Forbidden(_) => {
                "Access denied. You don't have permission for this action.".to_string()
            }
            ClientError::NotFound(_) => "The requested resource was not found.".to_string(),
            ClientError::Backend { status: 500, .. } => {
                "Server error. Please try again later.".to_string()
            }
            ClientError::Backend { status, message } if message.is_empty() => {
                format!("An error occurred ({}).", status)
            }
            ClientError::Backend { message, .. } => message.clone(),
            ClientError::Parse(_) => "Unexpected response from the server.".to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Parse(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}
