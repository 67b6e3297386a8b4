// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{NoteRepository, TextGenerator};
use crate::domain::{DomainError, Flashcard, Note};

/// Unsaved note with fixed content and timestamp.
pub fn sample_note(title: &str) -> Note {
    Note::new(
        title,
        format!("Original text about {title}."),
        format!("Summary of {title}."),
        vec![
            Flashcard::new(format!("What is {title}?"), "A topic."),
            Flashcard::new("Why does it matter?", "Because it is on the exam."),
        ],
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    )
}

/// Shared mock repository for testing use cases that depend on NoteRepository
///
/// Notes live in a vector in insertion order; ids handed out by `save_note`
/// are sequential. Failure switches simulate an unreadable or full store.
///
/// # Examples
///
/// ```
/// use smartnotes::application::NoteRepository;
/// use smartnotes::util::testing::{sample_note, MockNoteRepository};
///
/// let mut mock = MockNoteRepository::builder()
///     .with_note(sample_note("Trees").with_id("1"))
///     .build();
/// let saved = mock.save_note(&sample_note("Graphs")).unwrap();
/// assert_eq!(mock.list_notes().len(), 2);
/// assert!(saved.is_saved());
/// ```
pub struct MockNoteRepository {
    notes: Vec<Note>,
    next_id: u64,
    fail_list: bool,
    fail_write: bool,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }
}

impl NoteRepository for MockNoteRepository {
    fn save_note(&mut self, note: &Note) -> Result<Note, DomainError> {
        if self.fail_write {
            return Err(DomainError::Storage("quota exceeded".to_string()));
        }
        self.next_id += 1;
        let saved = note.with_id(format!("mock-{}", self.next_id));
        self.notes.push(saved.clone());
        Ok(saved)
    }

    fn list_notes(&self) -> Vec<Note> {
        if self.fail_list {
            return vec![];
        }
        self.notes.clone()
    }

    fn delete_note(&mut self, id: &str) -> Result<(), DomainError> {
        if self.fail_write {
            return Err(DomainError::Storage("quota exceeded".to_string()));
        }
        self.notes.retain(|n| n.id.as_deref() != Some(id));
        Ok(())
    }
}

/// Builder for MockNoteRepository
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    fail_list: bool,
    fail_write: bool,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            fail_list: false,
            fail_write: false,
        }
    }

    /// Add an already persisted note
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Make list_notes behave like a corrupt store
    pub fn with_list_failure(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Make save_note and delete_note fail with a storage error
    pub fn with_write_failure(mut self) -> Self {
        self.fail_write = true;
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            next_id: 0,
            fail_list: self.fail_list,
            fail_write: self.fail_write,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Scripted completion backend.
///
/// Answers flashcard prompts and summary prompts with separately configured
/// results and counts how often it was called.
pub struct MockTextGenerator {
    summary: Result<String, String>,
    flashcards: Result<String, String>,
    calls: Arc<AtomicUsize>,
}

impl MockTextGenerator {
    pub fn builder() -> MockTextGeneratorBuilder {
        MockTextGeneratorBuilder::new()
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let scripted = if prompt.contains("Q&A pairs") {
            &self.flashcards
        } else {
            &self.summary
        };
        scripted.clone().map_err(DomainError::Generation)
    }
}

pub struct MockTextGeneratorBuilder {
    summary: Result<String, String>,
    flashcards: Result<String, String>,
}

impl MockTextGeneratorBuilder {
    pub fn new() -> Self {
        Self {
            summary: Ok(String::new()),
            flashcards: Ok(String::new()),
        }
    }

    pub fn with_summary(mut self, text: &str) -> Self {
        self.summary = Ok(text.to_string());
        self
    }

    pub fn with_summary_error(mut self, message: &str) -> Self {
        self.summary = Err(message.to_string());
        self
    }

    pub fn with_flashcards(mut self, text: &str) -> Self {
        self.flashcards = Ok(text.to_string());
        self
    }

    pub fn with_flashcards_error(mut self, message: &str) -> Self {
        self.flashcards = Err(message.to_string());
        self
    }

    pub fn build(self) -> MockTextGenerator {
        MockTextGenerator {
            summary: self.summary,
            flashcards: self.flashcards,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Default for MockTextGeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "hyper_util", "reqwest", "rustls", "mio", "wiremock"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
