// src/application/note_saver.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};
use tracing::info;

pub struct NoteSaver<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteSaver<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Persist a generated note and return the stored copy with its new id.
    pub fn save_note(&mut self, note: &Note) -> Result<Note, DomainError> {
        let saved = self.repository.save_note(note)?;
        info!(note_id = saved.id.as_deref(), title = %saved.title, "Saved note");
        Ok(saved)
    }
}
