//! Note Collection
//!
//! Notes are kept in insertion order and always listed newest first.

use uuid::Uuid;

use crate::models::Note;

// == Note Store ==
#[derive(Debug, Default)]
pub struct NoteStore {
    /// Oldest first
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    // == Page ==
    /// One page of notes, newest first, and the total number of notes.
    ///
    /// Pages are 1-based; a page past the end is empty.
    pub fn page(&self, page: u32, per_page: u32) -> (Vec<Note>, usize) {
        let skip = (page.saturating_sub(1) as usize).saturating_mul(per_page as usize);
        let notes = self
            .newest_first()
            .skip(skip)
            .take(per_page as usize)
            .cloned()
            .collect();
        (notes, self.notes.len())
    }

    pub fn get(&self, id: Uuid) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Id of the note at `index` in newest-first order.
    pub fn id_at(&self, index: usize) -> Option<Uuid> {
        self.newest_first().nth(index).map(|note| note.id)
    }

    // == Insert ==
    pub fn insert(&mut self, note: Note) -> Note {
        self.notes.push(note.clone());
        note
    }

    // == Update ==
    /// Replaces title and content, returning the updated note.
    pub fn update(&mut self, id: Uuid, title: String, content: String) -> Option<Note> {
        let note = self.notes.iter_mut().find(|note| note.id == id)?;
        note.title = title;
        note.content = content;
        Some(note.clone())
    }

    // == Remove ==
    pub fn remove(&mut self, id: Uuid) -> Option<Note> {
        let position = self.notes.iter().position(|note| note.id == id)?;
        Some(self.notes.remove(position))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn newest_first(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter().rev()
    }
}
