//! Notes Client
//!
//! Session-aware entry point combining the HTTP client, the login session
//! and the cache-backed fetcher.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use super::error::ClientError;
use super::fetcher::{NotesFetcher, NotesPage};
use super::http::HttpNotesClient;
use super::session::Session;
use crate::cache::{self, PageCache, SharedPageCache};
use crate::config::ClientConfig;
use crate::models::{CreateUserRequest, Note, NoteRequest, UserProfile};

type Result<T> = std::result::Result<T, ClientError>;

pub struct NotesClient {
    api: Arc<HttpNotesClient>,
    session: RwLock<Session>,
    fetcher: NotesFetcher,
}

impl NotesClient {
    /// Builds the client with its own page cache.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let api = Arc::new(HttpNotesClient::new(&config.base_url)?);
        let cache = cache::shared(PageCache::new(config.max_cache_size, config.cache_expiry));
        Ok(Self::with_parts(api, cache, config.per_page))
    }

    /// Builds the client around an existing HTTP client and cache.
    pub fn with_parts(api: Arc<HttpNotesClient>, cache: SharedPageCache, per_page: u32) -> Self {
        let fetcher = NotesFetcher::new(api.clone(), cache, per_page);
        Self {
            api,
            session: RwLock::new(Session::new()),
            fetcher,
        }
    }

    pub fn fetcher(&self) -> &NotesFetcher {
        &self.fetcher
    }

    /// Snapshot of the current session.
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    // == Accounts ==

    pub async fn register(&self, user: &CreateUserRequest) -> Result<UserProfile> {
        self.api.register(user).await
    }

    /// Logs in and keeps the token for later mutations.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile> {
        let response = self.api.login(username, password).await?;
        let user = response.user.clone();
        self.session.write().await.login(response);
        info!("Logged in as {}", user.username);
        Ok(user)
    }

    pub async fn logout(&self) {
        self.session.write().await.logout();
    }

    // == Reads ==

    /// See [`NotesFetcher::fetch_page`].
    pub async fn fetch_page(&self, page: u32) -> NotesPage {
        self.fetcher.fetch_page(page).await
    }

    /// See [`NotesFetcher::preload`].
    pub async fn preload(&self, current_page: u32, total_pages: u32) -> usize {
        self.fetcher.preload(current_page, total_pages).await
    }

    // == Mutations ==

    pub async fn create_note(&self, title: &str, content: &str) -> Result<Note> {
        let token = self.require_token().await?;
        let result = self
            .api
            .create_note(&token, &NoteRequest::new(title, content))
            .await;
        self.settle(result).await
    }

    pub async fn update_note(&self, id: Uuid, title: &str, content: &str) -> Result<Note> {
        let token = self.require_token().await?;
        let result = self
            .api
            .update_note(&token, id, &NoteRequest::new(title, content))
            .await;
        self.settle(result).await
    }

    pub async fn delete_note(&self, id: Uuid) -> Result<()> {
        let token = self.require_token().await?;
        let result = self.api.delete_note(&token, id).await;
        self.settle(result).await
    }

    async fn require_token(&self) -> Result<String> {
        self.session
            .read()
            .await
            .token()
            .map(str::to_string)
            .ok_or_else(|| ClientError::Unauthorized("Not logged in".into()))
    }

    /// Applies the side effects of a finished mutation: a 401 ends the
    /// session, a success invalidates every cached page.
    async fn settle<T>(&self, result: Result<T>) -> Result<T> {
        match &result {
            Ok(_) => self.fetcher.cache().write().await.clear(),
            Err(e) if e.is_auth_error() => {
                warn!("Session rejected by server, logging out: {}", e);
                self.session.write().await.logout();
            }
            Err(_) => {}
        }
        result
    }
}
