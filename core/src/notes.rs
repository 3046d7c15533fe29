use crate::storage::KeyValueStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const NOTES_KEY: &str = "notes";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Free-form notes persisted as a JSON array. Every mutation rewrites the
/// stored array; unreadable persisted data is discarded with a warning so the
/// app always starts.
pub struct NotesStore {
    store: Box<dyn KeyValueStore>,
    notes: Vec<Note>,
    next_id: u64,
}

impl NotesStore {
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let notes = read_notes(store.as_ref());
        let next_id = notes.iter().map(|note| note.id + 1).max().unwrap_or(1);
        Self {
            store,
            notes,
            next_id,
        }
    }

    /// Adds a note unless both title and content are blank.
    pub fn add(&mut self, title: &str, content: &str, now: DateTime<Utc>) -> Option<u64> {
        if title.trim().is_empty() && content.trim().is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.notes.push(Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
            created_at: now,
        });
        self.persist();
        Some(id)
    }

    pub fn edit(&mut self, id: u64, title: &str, content: &str) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return false;
        };
        note.title = title.to_string();
        note.content = content.to_string();
        self.persist();
        true
    }

    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let deleted = self.notes.len() != before;
        if deleted {
            self.persist();
        }
        deleted
    }

    /// Case-insensitive substring match over title and content.
    pub fn search(&self, term: &str) -> Vec<&Note> {
        let needle = term.to_lowercase();
        self.notes
            .iter()
            .filter(|note| {
                note.title.to_lowercase().contains(&needle)
                    || note.content.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn count(&self) -> usize {
        self.notes.len()
    }

    fn persist(&self) {
        let serialized = match serde_json::to_string(&self.notes) {
            Ok(serialized) => serialized,
            Err(err) => {
                crate::warn!("Failed to serialize notes: {}", err);
                return;
            }
        };
        if let Err(err) = self.store.set(NOTES_KEY, &serialized) {
            crate::warn!("Failed to persist notes: {}", err);
        }
    }
}

fn read_notes(store: &dyn KeyValueStore) -> Vec<Note> {
    let content = match store.get(NOTES_KEY) {
        Ok(Some(content)) => content,
        Ok(None) => return Vec::new(),
        Err(err) => {
            crate::warn!("Failed to read notes: {}", err);
            return Vec::new();
        }
    };
    match serde_json::from_str(&content) {
        Ok(notes) => notes,
        Err(err) => {
            crate::warn!("Discarding unreadable notes payload: {}", err);
            Vec::new()
        }
    }
}
