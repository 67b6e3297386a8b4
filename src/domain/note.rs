// src/domain/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A generated note. `id` stays `None` until the note has been saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub original_text: String,
    pub summary: String,
    pub flashcards: Vec<Flashcard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Note {
    pub fn new(
        title: impl Into<String>,
        original_text: impl Into<String>,
        summary: impl Into<String>,
        flashcards: Vec<Flashcard>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            original_text: original_text.into(),
            summary: summary.into(),
            flashcards,
            created_at: Some(created_at),
        }
    }

    pub fn is_saved(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Copy of this note carrying the given identity.
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_note() -> Note {
        Note::new(
            "Biology",
            "Cells are the basic unit of life.",
            "Cells are fundamental.",
            vec![Flashcard::new("What is a cell?", "The basic unit of life.")],
            Utc::now(),
        )
    }

    #[test]
    fn given_new_note_when_constructed_then_is_unsaved() {
        let note = sample_note();

        assert_eq!(note.id, None);
        assert!(!note.is_saved());
        assert!(note.created_at.is_some());
    }

    #[test]
    fn given_note_when_assigning_id_then_copy_is_saved_and_original_untouched() {
        let note = sample_note();

        let saved = note.with_id("1700000000000");

        assert!(saved.is_saved());
        assert_eq!(saved.id.as_deref(), Some("1700000000000"));
        assert_eq!(saved.title, note.title);
        assert_eq!(saved.flashcards, note.flashcards);
        assert!(!note.is_saved());
    }

    #[test]
    fn given_empty_id_when_checking_saved_then_is_not_saved() {
        let note = sample_note().with_id("");

        assert!(!note.is_saved());
    }

    #[test]
    fn given_unsaved_note_when_serializing_then_omits_id() {
        let json = serde_json::to_string(&sample_note()).unwrap();

        assert!(!json.contains(r#""id""#));
        assert!(json.contains(r#""originalText""#));
        assert!(json.contains(r#""createdAt""#));
    }

    #[test]
    fn given_record_without_timestamp_when_deserializing_then_created_at_is_none() {
        let json = r#"{
            "id": "1",
            "title": "T",
            "originalText": "O",
            "summary": "S",
            "flashcards": [{"question": "Q", "answer": "A"}]
        }"#;

        let note: Note = serde_json::from_str(json).unwrap();

        assert_eq!(note.id.as_deref(), Some("1"));
        assert_eq!(note.created_at, None);
        assert_eq!(note.flashcards, vec![Flashcard::new("Q", "A")]);
    }
}
