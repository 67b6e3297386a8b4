// src/application/note_viewer.rs
use crate::domain::{DomainError, Note};

/// Persisted note collection.
pub trait NoteRepository {
    /// Append a copy of `note` under a freshly assigned id and return that copy.
    fn save_note(&mut self, note: &Note) -> Result<Note, DomainError>;

    /// All saved notes in storage order. Read failures yield an empty list.
    fn list_notes(&self) -> Vec<Note>;

    /// Remove the note with `id`; unknown ids are a no-op.
    fn delete_note(&mut self, id: &str) -> Result<(), DomainError>;
}

pub struct NoteViewer<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn view_note(&self, note_id: &str) -> Result<Note, DomainError> {
        self.repository
            .list_notes()
            .into_iter()
            .find(|n| n.id.as_deref() == Some(note_id))
            .ok_or_else(|| DomainError::NoteNotFound(note_id.to_string()))
    }
}
