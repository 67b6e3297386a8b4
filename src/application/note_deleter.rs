// src/application/note_deleter.rs
use crate::application::NoteRepository;
use crate::domain::DomainError;
use tracing::info;

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete a saved note. Deleting an unknown id succeeds without changes.
    pub fn delete_note(&mut self, note_id: &str) -> Result<(), DomainError> {
        self.repository.delete_note(note_id)?;
        info!(note_id, "Deleted note");
        Ok(())
    }
}
