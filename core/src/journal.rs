use crate::storage::KeyValueStore;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const JOURNAL_KEY: &str = "journal_entries";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: u64,
    pub title: String,
    pub date: NaiveDate,
    pub content: String,
}

/// Dated journal entries, newest first. Unlike notes, an entry needs all three
/// fields filled in before it is accepted.
pub struct JournalStore {
    store: Box<dyn KeyValueStore>,
    entries: Vec<JournalEntry>,
    next_id: u64,
}

impl JournalStore {
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let entries = read_entries(store.as_ref());
        let next_id = entries.iter().map(|entry| entry.id + 1).max().unwrap_or(1);
        Self {
            store,
            entries,
            next_id,
        }
    }

    pub fn add(&mut self, title: &str, content: &str, date: NaiveDate) -> Result<u64, String> {
        if title.trim().is_empty() {
            return Err("Journal entry needs a title".to_string());
        }
        if content.trim().is_empty() {
            return Err("Journal entry needs a description".to_string());
        }

        let id = self.next_id;
        self.next_id += 1;
        // Newest first, matching the original page's display order.
        self.entries.insert(
            0,
            JournalEntry {
                id,
                title: title.to_string(),
                date,
                content: content.to_string(),
            },
        );
        self.persist();
        Ok(id)
    }

    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let deleted = self.entries.len() != before;
        if deleted {
            self.persist();
        }
        deleted
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    fn persist(&self) {
        let serialized = match serde_json::to_string(&self.entries) {
            Ok(serialized) => serialized,
            Err(err) => {
                crate::warn!("Failed to serialize journal: {}", err);
                return;
            }
        };
        if let Err(err) = self.store.set(JOURNAL_KEY, &serialized) {
            crate::warn!("Failed to persist journal: {}", err);
        }
    }
}

fn read_entries(store: &dyn KeyValueStore) -> Vec<JournalEntry> {
    let content = match store.get(JOURNAL_KEY) {
        Ok(Some(content)) => content,
        Ok(None) => return Vec::new(),
        Err(err) => {
            crate::warn!("Failed to read journal: {}", err);
            return Vec::new();
        }
    };
    match serde_json::from_str(&content) {
        Ok(entries) => entries,
        Err(err) => {
            crate::warn!("Discarding unreadable journal payload: {}", err);
            Vec::new()
        }
    }
}
