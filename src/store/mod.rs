//! Document Store Module
//!
//! In-process collections of notes and users. Handlers share them through
//! `Arc<RwLock<..>>` in [`crate::api::AppState`].

mod notes;
mod users;

pub use notes::NoteStore;
pub use users::{NewUser, UserStore};
