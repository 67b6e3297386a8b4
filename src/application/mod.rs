// src/application/mod.rs
pub mod note_deleter;
pub mod note_generator;
pub mod note_lister;
pub mod note_saver;
pub mod note_viewer;
pub mod prompts;

pub use note_deleter::NoteDeleter;
pub use note_generator::{NoteGenerator, TextGenerator};
pub use note_lister::NoteLister;
pub use note_saver::NoteSaver;
pub use note_viewer::{NoteRepository, NoteViewer};
