//! HTTP client for the notes API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;
use uuid::Uuid;

use super::error::ClientError;
use super::source::{NotesSource, RawPage};
use crate::models::{
    CreateUserRequest, ErrorResponse, LoginRequest, LoginResponse, Note, NoteRequest, UserProfile,
    TOTAL_COUNT_HEADER,
};

type Result<T> = std::result::Result<T, ClientError>;

/// Thin typed wrapper over the backend's REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpNotesClient {
    client: Client,
    base_url: String,
}

impl HttpNotesClient {
    /// Creates a client rooted at `base_url` (e.g. `http://localhost:3001`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // == Notes ==

    /// `GET /notes`, reading the total from `X-Total-Count`.
    pub async fn list_notes(&self, page: u32, per_page: u32) -> Result<RawPage> {
        let response = self
            .client
            .get(self.url("/notes"))
            .query(&[("_page", page), ("_per_page", per_page)])
            .send()
            .await?;
        let response = check_response(response).await?;

        let total_count = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .ok_or_else(|| ClientError::Parse("missing or invalid X-Total-Count header".into()))?;
        let notes = response.json::<Vec<Note>>().await?;

        debug!("Fetched page {} ({} notes, {} total)", page, notes.len(), total_count);
        Ok(RawPage { notes, total_count })
    }

    pub async fn get_note(&self, id: Uuid) -> Result<Note> {
        let response = self.client.get(self.url(&format!("/notes/{}", id))).send().await?;
        Ok(check_response(response).await?.json().await?)
    }

    pub async fn create_note(&self, token: &str, note: &NoteRequest) -> Result<Note> {
        let response = self
            .client
            .post(self.url("/notes"))
            .bearer_auth(token)
            .json(note)
            .send()
            .await?;
        Ok(check_response(response).await?.json().await?)
    }

    pub async fn update_note(&self, token: &str, id: Uuid, note: &NoteRequest) -> Result<Note> {
        let response = self
            .client
            .put(self.url(&format!("/notes/{}", id)))
            .bearer_auth(token)
            .json(note)
            .send()
            .await?;
        Ok(check_response(response).await?.json().await?)
    }

    pub async fn delete_note(&self, token: &str, id: Uuid) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/notes/{}", id)))
            .bearer_auth(token)
            .send()
            .await?;
        check_response(response).await?;
        Ok(())
    }

    // == Accounts ==

    pub async fn register(&self, user: &CreateUserRequest) -> Result<UserProfile> {
        let response = self.client.post(self.url("/users")).json(user).send().await?;
        Ok(check_response(response).await?.json().await?)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.client.post(self.url("/login")).json(&body).send().await?;
        Ok(check_response(response).await?.json().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl NotesSource for HttpNotesClient {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<RawPage> {
        self.list_notes(page, per_page).await
    }
}

/// Passes 2xx responses through; turns anything else into a `ClientError`
/// carrying the body's `error` message when there is one.
async fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .map(|body| body.error);
    Err(ClientError::from_status(status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HttpNotesClient::new("http://localhost:3001/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3001");
        assert_eq!(client.url("/notes"), "http://localhost:3001/notes");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Port 9 (discard) is closed on test hosts
        let client = HttpNotesClient::new("http://127.0.0.1:9").unwrap();

        let err = client.list_notes(1, 10).await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)), "got {:?}", err);
    }
}
