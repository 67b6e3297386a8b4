// src/application/note_generator.rs
use crate::application::prompts;
use crate::domain::{DomainError, Flashcard, Note};
use crate::infrastructure::card_parser;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, instrument};

/// Single-shot text completion backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;
}

pub struct NoteGenerator<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> NoteGenerator<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Generate summary and flashcards for `input_text`.
    ///
    /// Both requests are in flight at the same time. If either fails the whole
    /// call fails and nothing is returned. The note is unsaved (no id).
    #[instrument(level = "debug", skip(self, input_text), fields(text_len = input_text.len()))]
    pub async fn generate_note(&self, title: &str, input_text: &str) -> Result<Note, DomainError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::MissingTitle);
        }
        if input_text.trim().is_empty() {
            return Err(DomainError::MissingText);
        }

        let (summary, flashcards) = tokio::try_join!(
            self.generate_summary(input_text),
            self.generate_flashcards(input_text)
        )?;

        info!(title, flashcards = flashcards.len(), "Generated note");
        Ok(Note::new(title, input_text, summary, flashcards, Utc::now()))
    }

    pub async fn generate_summary(&self, input_text: &str) -> Result<String, DomainError> {
        let summary = self
            .generator
            .generate(&prompts::summary_prompt(input_text))
            .await?;
        if summary.trim().is_empty() {
            return Err(DomainError::EmptyCompletion("summary"));
        }
        debug!(len = summary.len(), "Received summary");
        Ok(summary)
    }

    pub async fn generate_flashcards(&self, input_text: &str) -> Result<Vec<Flashcard>, DomainError> {
        let completion = self
            .generator
            .generate(&prompts::flashcards_prompt(input_text))
            .await?;
        debug!(len = completion.len(), "Received flashcard completion");
        Ok(card_parser::parse_flashcards(&completion, input_text))
    }
}
