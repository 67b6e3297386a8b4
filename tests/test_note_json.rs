use anyhow::Result;
use smartnotes::domain::{Flashcard, Note};
use smartnotes::util::testing::sample_note;

#[test]
fn given_saved_note_when_serializing_to_json_then_contains_all_fields() -> Result<()> {
    // Arrange
    let note = sample_note("Optics").with_id("1700000000000");

    // Act
    let json = serde_json::to_string_pretty(&note)?;

    // Assert
    assert!(json.contains(r#""id": "1700000000000""#));
    assert!(json.contains(r#""title": "Optics""#));
    assert!(json.contains(r#""originalText": "Original text about Optics.""#));
    assert!(json.contains(r#""summary": "Summary of Optics.""#));
    assert!(json.contains(r#""flashcards": ["#));
    assert!(json.contains(r#""question": "What is Optics?""#));
    assert!(json.contains(r#""createdAt": "2024-05-01T12:00:00Z""#));
    Ok(())
}

#[test]
fn given_note_when_serializing_then_uses_camel_case_fields() -> Result<()> {
    let json = serde_json::to_string(&sample_note("Optics"))?;

    assert!(json.contains(r#""originalText""#));
    assert!(!json.contains(r#""original_text""#));
    assert!(!json.contains(r#""created_at""#));
    Ok(())
}

#[test]
fn given_stored_collection_when_deserializing_then_restores_notes() -> Result<()> {
    // Arrange
    let json = r#"[
      {
        "id": "1712345678901",
        "title": "Saved in the browser",
        "originalText": "Some text",
        "summary": "Short",
        "flashcards": [
          { "question": "Q1?", "answer": "A1." }
        ],
        "createdAt": "2024-04-05T19:34:38.901Z"
      }
    ]"#;

    // Act
    let notes: Vec<Note> = serde_json::from_str(json)?;

    // Assert
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id.as_deref(), Some("1712345678901"));
    assert_eq!(notes[0].flashcards, vec![Flashcard::new("Q1?", "A1.")]);
    assert!(notes[0].created_at.is_some());
    Ok(())
}
