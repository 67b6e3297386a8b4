// src/application/note_lister.rs
use crate::application::NoteRepository;
use crate::domain::Note;

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List all saved notes, or only those whose title contains `search_query`
    /// (case-insensitive).
    pub fn list_notes(&self, search_query: Option<&str>) -> Vec<Note> {
        let notes = self.repository.list_notes();
        match search_query {
            None => notes,
            Some(query) => {
                let query = query.to_lowercase();
                notes
                    .into_iter()
                    .filter(|n| n.title.to_lowercase().contains(&query))
                    .collect()
            }
        }
    }
}
