//! Login state held by the client.

use crate::models::{LoginResponse, Note, UserProfile};

/// Bearer token and profile of the logged-in user, if any.
#[derive(Debug, Clone, Default)]
pub struct Session {
    auth: Option<(String, UserProfile)>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, response: LoginResponse) {
        self.auth = Some((response.token, response.user));
    }

    pub fn logout(&mut self) {
        self.auth = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.auth.as_ref().map(|(token, _)| token.as_str())
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.auth.as_ref().map(|(_, user)| user)
    }

    /// Whether edit controls should be offered for `note`: the author's
    /// email matches the logged-in user's.
    pub fn can_edit(&self, note: &Note) -> bool {
        match (self.user(), note.author.as_ref()) {
            (Some(user), Some(author)) => user.email == author.email,
            _ => false,
        }
    }
}
