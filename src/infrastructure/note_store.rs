// src/infrastructure/note_store.rs
use crate::application::NoteRepository;
use crate::constants::STORAGE_KEY;
use crate::domain::{DomainError, Note};
use crate::infrastructure::key_value::KeyValueStore;
use chrono::Utc;
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

/// Note collection kept as one JSON array under [`STORAGE_KEY`].
///
/// Every operation reads the whole collection and, when it changes anything,
/// writes the whole collection back.
pub struct LocalNoteRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> LocalNoteRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }

    fn read_all(&self) -> Result<Vec<Note>, DomainError> {
        match self.store.get(STORAGE_KEY)? {
            None => Ok(vec![]),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| DomainError::Storage(format!("Corrupt note collection: {e}"))),
        }
    }

    fn write_all(&mut self, notes: &[Note]) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(notes)
            .map_err(|e| DomainError::Storage(format!("Failed to serialize notes: {e}")))?;
        self.store.set(STORAGE_KEY, &json)
    }
}

/// Millisecond timestamp id, bumped past every numeric id already present.
///
/// When the highest stored id leaves no room above it, the first free id at or
/// after `now_millis` is used instead.
pub fn next_note_id(existing: &[Note], now_millis: i64) -> String {
    let taken: HashSet<i64> = existing
        .iter()
        .filter_map(|n| n.id.as_deref()?.parse::<i64>().ok())
        .collect();
    let next = match taken.iter().max() {
        Some(&max) if max >= now_millis => max.checked_add(1),
        _ => Some(now_millis),
    };
    next.unwrap_or_else(|| {
        warn!("Stored note ids exhausted the id range, searching for a free id");
        let mut candidate = now_millis;
        while taken.contains(&candidate) {
            candidate = candidate.wrapping_add(1);
        }
        candidate
    })
    .to_string()
}

impl<S: KeyValueStore> NoteRepository for LocalNoteRepository<S> {
    #[instrument(level = "debug", skip_all, fields(title = %note.title))]
    fn save_note(&mut self, note: &Note) -> Result<Note, DomainError> {
        let mut notes = self.list_notes();
        let saved = note.with_id(next_note_id(&notes, Utc::now().timestamp_millis()));
        notes.push(saved.clone());
        self.write_all(&notes)?;
        debug!(id = saved.id.as_deref(), total = notes.len(), "Appended note");
        Ok(saved)
    }

    fn list_notes(&self) -> Vec<Note> {
        self.read_all().unwrap_or_else(|e| {
            warn!(error = %e, "Could not read saved notes, treating collection as empty");
            vec![]
        })
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: &str) -> Result<(), DomainError> {
        let mut notes = self.list_notes();
        let before = notes.len();
        notes.retain(|n| n.id.as_deref() != Some(id));
        if notes.len() == before {
            debug!("No note with this id, nothing to delete");
            return Ok(());
        }
        self.write_all(&notes)
    }
}
