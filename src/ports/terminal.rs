// src/ports/terminal.rs
use crate::domain::Note;
use crate::util::text::extract_first_line;
use clap::ValueEnum;
use std::fmt::Write;

/// Which view of a note to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Tab {
    Summary,
    Flashcards,
    #[default]
    Both,
}

#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, note: &Note, tab: Tab) -> String {
        match tab {
            Tab::Summary => self.render_summary(note),
            Tab::Flashcards => self.render_flashcards(note),
            Tab::Both => format!("{}\n{}", self.render_summary(note), self.render_flashcards(note)),
        }
    }

    pub fn render_summary(&self, note: &Note) -> String {
        let underline = "=".repeat(note.title.chars().count());
        format!("{}\n{}\n\n{}\n", note.title, underline, note.summary)
    }

    pub fn render_flashcards(&self, note: &Note) -> String {
        let mut out = String::from("Flashcards\n----------\n");
        for card in &note.flashcards {
            // writing to a String cannot fail
            let _ = write!(out, "\nQ: {}\nA: {}\n", card.question, card.answer);
        }
        out
    }

    /// One line per saved note: id, title and the summary's first line.
    pub fn render_list(&self, notes: &[Note]) -> String {
        if notes.is_empty() {
            return "No saved notes.\n".to_string();
        }
        let id_width = notes
            .iter()
            .map(|n| n.id.as_deref().unwrap_or("-").len())
            .max()
            .unwrap_or(1);

        let mut out = String::new();
        for note in notes {
            let id = note.id.as_deref().unwrap_or("-");
            let preview = extract_first_line(&note.summary);
            let _ = writeln!(out, "{id:<id_width$}  {}  {}", note.title, preview);
        }
        out
    }
}
