//! API Handlers
//!
//! HTTP request handlers for the note endpoints and the health check.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;
use uuid::Uuid;

use super::json::ApiJson;
use crate::auth::AuthUser;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{HealthResponse, Note, NoteRequest, PageQuery, TOTAL_COUNT_HEADER};
use crate::store::{NoteStore, UserStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<RwLock<NoteStore>>,
    pub users: Arc<RwLock<UserStore>>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState with empty stores.
    pub fn new(config: Config) -> Self {
        Self {
            notes: Arc::new(RwLock::new(NoteStore::new())),
            users: Arc::new(RwLock::new(UserStore::new())),
            config: Arc::new(config),
        }
    }
}

/// Handler for GET /notes
///
/// Lists one page of notes, newest first. The total number of notes goes in
/// the `X-Total-Count` header.
pub async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let page = query.page();
    let per_page = query.per_page(state.config.default_per_page);

    let (notes, total) = state.notes.read().await.page(page, per_page);

    ([(TOTAL_COUNT_HEADER, total.to_string())], Json(notes))
}

/// Handler for GET /notes/:id
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>> {
    let id = parse_note_id(&id)?;
    let notes = state.notes.read().await;
    let note = notes.get(id).cloned().ok_or_else(note_not_found)?;

    Ok(Json(note))
}

/// Handler for POST /notes
///
/// The author block and owner are taken from the authenticated user.
pub async fn create_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiJson(req): ApiJson<NoteRequest>,
) -> Result<(StatusCode, Json<Note>)> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let note = Note::new(req.title, req.content, Some(user.author()), Some(user.id));
    let note = state.notes.write().await.insert(note);
    info!("User {} created note {}", user.username, note.id);

    Ok((StatusCode::CREATED, Json(note)))
}

/// Handler for PUT /notes/:id
pub async fn update_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<NoteRequest>,
) -> Result<Json<Note>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let id = parse_note_id(&id)?;
    let updated = update_owned(&state, user.id, id, req).await?;

    Ok(Json(updated))
}

/// Handler for DELETE /notes/:id
pub async fn delete_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_note_id(&id)?;
    delete_owned(&state, user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /notes/by-index/:i
///
/// `i` is a zero-based position in newest-first order.
pub async fn get_note_by_index(
    State(state): State<AppState>,
    Path(index): Path<String>,
) -> Result<Json<Note>> {
    let index = parse_index(&index)?;
    let notes = state.notes.read().await;
    let note = notes
        .id_at(index)
        .and_then(|id| notes.get(id))
        .cloned()
        .ok_or_else(note_not_found)?;

    Ok(Json(note))
}

/// Handler for PUT /notes/by-index/:i
pub async fn update_note_by_index(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(index): Path<String>,
    ApiJson(req): ApiJson<NoteRequest>,
) -> Result<Json<Note>> {
    let index = parse_index(&index)?;
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let id = resolve_index(&state, index).await?;
    let updated = update_owned(&state, user.id, id, req).await?;

    Ok(Json(updated))
}

/// Handler for DELETE /notes/by-index/:i
pub async fn delete_note_by_index(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(index): Path<String>,
) -> Result<StatusCode> {
    let index = parse_index(&index)?;
    let id = resolve_index(&state, index).await?;
    delete_owned(&state, user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

// == Helpers ==

/// Ownership check and update under one write lock.
async fn update_owned(
    state: &AppState,
    user_id: Uuid,
    id: Uuid,
    req: NoteRequest,
) -> Result<Note> {
    let mut notes = state.notes.write().await;
    let existing = notes.get(id).ok_or_else(note_not_found)?;
    if !existing.is_editable_by(user_id) {
        return Err(ApiError::Forbidden(
            "Access denied. You can only edit your own notes.".into(),
        ));
    }

    notes
        .update(id, req.title, req.content)
        .ok_or_else(note_not_found)
}

async fn delete_owned(state: &AppState, user_id: Uuid, id: Uuid) -> Result<Note> {
    let mut notes = state.notes.write().await;
    let existing = notes.get(id).ok_or_else(note_not_found)?;
    if !existing.is_editable_by(user_id) {
        return Err(ApiError::Forbidden(
            "Access denied. You can only delete your own notes.".into(),
        ));
    }

    let removed = notes.remove(id).ok_or_else(note_not_found)?;
    info!("Deleted note {}", removed.id);
    Ok(removed)
}

async fn resolve_index(state: &AppState, index: usize) -> Result<Uuid> {
    state
        .notes
        .read()
        .await
        .id_at(index)
        .ok_or_else(note_not_found)
}

/// Unparseable ids cannot name a stored note, so they are reported as
/// missing rather than malformed.
fn parse_note_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| note_not_found())
}

fn parse_index(raw: &str) -> Result<usize> {
    raw.parse::<usize>()
        .map_err(|_| ApiError::InvalidRequest("Invalid index".into()))
}

fn note_not_found() -> ApiError {
    ApiError::NotFound("Note not found".into())
}
