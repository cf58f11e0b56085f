//! Note document

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display identity of whoever wrote a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// A stored note.
///
/// Serialized with `_id` as the identifier field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub author: Option<Author>,
    /// Owning user; `None` for notes nobody owns
    #[serde(default)]
    pub user: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a note with a fresh id and creation time.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: Option<Author>,
        user: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            author,
            user,
            created_at: Utc::now(),
        }
    }

    /// True when `user_id` may edit or delete this note.
    ///
    /// Notes without an owner can be changed by any authenticated user.
    pub fn is_editable_by(&self, user_id: Uuid) -> bool {
        self.user.map_or(true, |owner| owner == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_serializes_id_as_underscore_id() {
        let note = Note::new("Title", "Body", None, None);
        let json = serde_json::to_value(&note).unwrap();

        assert_eq!(json["_id"], note.id.to_string());
        assert!(json.get("id").is_none());
        assert!(json["author"].is_null());
    }

    #[test]
    fn test_note_deserializes_without_owner() {
        let json = r#"{
            "_id": "6f1c2a55-1b43-4a43-9d1c-2f9d0c1b3e11",
            "title": "t",
            "content": "c",
            "author": {"name": "Ann", "email": "ann@example.com"},
            "created_at": "2024-05-01T12:00:00Z"
        }"#;
        let note: Note = serde_json::from_str(json).unwrap();

        assert_eq!(note.author.unwrap().name, "Ann");
        assert!(note.user.is_none());
    }

    #[test]
    fn test_ownership() {
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();

        let owned = Note::new("t", "c", None, Some(owner));
        assert!(owned.is_editable_by(owner));
        assert!(!owned.is_editable_by(other));

        let unowned = Note::new("t", "c", None, None);
        assert!(unowned.is_editable_by(other));
    }
}
