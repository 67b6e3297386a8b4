// src/infrastructure/card_parser.rs
use crate::constants::FALLBACK_EXCERPT_CHARS;
use crate::domain::Flashcard;
use crate::util::text::truncate_chars;
use tracing::{debug, warn};

const QUESTION_MARKER: &str = "Q:";
const ANSWER_MARKER: &str = "A:";

const FALLBACK_TOPIC_QUESTION: &str = "What is the main topic discussed in the text?";
const FALLBACK_KEY_POINTS_QUESTION: &str = "What are the key points mentioned?";
const FALLBACK_RETRY_ANSWER: &str = "Please try regenerating the flashcards for a better response.";

/// Recover flashcards from a model completion.
///
/// Lines are scanned in order: `Q:` sets the pending question, `A:` completes it.
/// Everything else is ignored. When no pair is found the fixed two-card fallback
/// built from `source_text` is returned, so the result is never empty.
pub fn parse_flashcards(completion: &str, source_text: &str) -> Vec<Flashcard> {
    let cards = scan_pairs(completion);
    if cards.is_empty() {
        warn!("No Q/A pairs found in completion, using fallback flashcards");
        return fallback_flashcards(source_text);
    }
    debug!(count = cards.len(), "Parsed flashcards");
    cards
}

/// Strict in-order pairing without fallback.
pub fn scan_pairs(completion: &str) -> Vec<Flashcard> {
    let mut cards = Vec::new();
    let mut pending: Option<String> = None;

    for line in completion.lines() {
        let line = line.trim();

        if let Some(question) = line.strip_prefix(QUESTION_MARKER) {
            let question = question.trim();
            // a blank question does not count as pending
            pending = (!question.is_empty()).then(|| question.to_string());
        } else if let Some(answer) = line.strip_prefix(ANSWER_MARKER) {
            if let Some(question) = pending.take() {
                cards.push(Flashcard::new(question, answer.trim()));
            }
        }
    }

    cards
}

pub fn fallback_flashcards(source_text: &str) -> Vec<Flashcard> {
    vec![
        Flashcard::new(
            FALLBACK_TOPIC_QUESTION,
            format!("{}...", truncate_chars(source_text, FALLBACK_EXCERPT_CHARS)),
        ),
        Flashcard::new(FALLBACK_KEY_POINTS_QUESTION, FALLBACK_RETRY_ANSWER),
    ]
}
