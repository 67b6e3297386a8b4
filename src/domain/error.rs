// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Please enter a title for your notes")]
    MissingTitle,
    #[error("Please enter some text to process")]
    MissingText,
    #[error("Generation failed: {0}")]
    Generation(String),
    #[error("Inference endpoint returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Empty completion for {0}")]
    EmptyCompletion(&'static str),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Export error: {0}")]
    Export(String),
    #[error("Note not found: {0}")]
    NoteNotFound(String),
}

impl DomainError {
    /// Errors whose message is meant for the user as is; everything else is an
    /// operational failure reported with a generic notice.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DomainError::MissingTitle | DomainError::MissingText | DomainError::NoteNotFound(_)
        )
    }
}
