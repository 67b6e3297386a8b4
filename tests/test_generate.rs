mod helpers;

use anyhow::Result;
use helpers::{completions, TestStore};
use smartnotes::application::{NoteGenerator, NoteSaver, NoteLister};
use smartnotes::constants::MODEL_ID;
use smartnotes::domain::{DomainError, Flashcard};
use smartnotes::infrastructure::{HuggingFaceClient, PdfExporter};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_completions(server: &MockServer, summary: ResponseTemplate, flashcards: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL_ID}")))
        .and(body_string_contains("Q&A pairs"))
        .respond_with(flashcards)
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL_ID}")))
        .and(body_string_contains("concise summaries"))
        .respond_with(summary)
        .mount(server)
        .await;
}

fn generated(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!([{ "generated_text": text }]))
}

#[tokio::test]
async fn given_model_output_when_generating_then_builds_note_from_both_completions() -> Result<()> {
    // Arrange
    let server = MockServer::start().await;
    mount_completions(&server, generated(completions::SUMMARY), generated(completions::FLASHCARDS)).await;
    let generator = NoteGenerator::new(HuggingFaceClient::with_endpoint("k".to_string(), server.uri()));

    // Act
    let note = generator.generate_note("Photosynthesis", completions::SOURCE_TEXT).await?;

    // Assert
    assert_eq!(note.id, None);
    assert_eq!(note.summary, completions::SUMMARY);
    assert_eq!(
        note.flashcards,
        vec![
            Flashcard::new("What does photosynthesis produce?", "Glucose and oxygen."),
            Flashcard::new("Where does it happen?", "In the chloroplasts."),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn given_one_failing_request_when_generating_then_no_note_is_produced() -> Result<()> {
    let server = MockServer::start().await;
    mount_completions(
        &server,
        generated(completions::SUMMARY),
        ResponseTemplate::new(503).set_body_string(r#"{"error":"Model is loading"}"#),
    )
    .await;
    let generator = NoteGenerator::new(HuggingFaceClient::with_endpoint("k".to_string(), server.uri()));

    let result = generator.generate_note("Photosynthesis", completions::SOURCE_TEXT).await;

    assert!(matches!(result, Err(DomainError::Api { status: 503, .. })));
    Ok(())
}

#[tokio::test]
async fn given_generated_note_when_saving_and_exporting_then_both_succeed() -> Result<()> {
    // Arrange
    let server = MockServer::start().await;
    mount_completions(&server, generated(completions::SUMMARY), generated("no pairs at all")).await;
    let generator = NoteGenerator::new(HuggingFaceClient::with_endpoint("k".to_string(), server.uri()));
    let store = TestStore::new()?;
    let export_dir = tempfile::tempdir()?;

    // Act
    let note = generator.generate_note("Photosynthesis", completions::SOURCE_TEXT).await?;
    let saved = NoteSaver::new(store.open_repository()).save_note(&note)?;
    let pdf = PdfExporter::new(export_dir.path()).export(&saved)?;

    // Assert
    assert_eq!(saved.flashcards.len(), 2, "fallback flashcards expected");
    assert!(saved.flashcards[0].answer.ends_with("..."));
    assert_eq!(NoteLister::new(store.open_repository()).list_notes(None), vec![saved]);
    assert!(std::fs::read(pdf)?.starts_with(b"%PDF"));
    Ok(())
}
