use super::KeyValueStore;
use std::io::ErrorKind;
use std::path::PathBuf;

/// One file per key inside a data directory. Keys map to `<key>.json`
/// file names, so they must stay simple identifiers.
pub struct FileKeyValueStore {
    data_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    fn ensure_data_dir(&self) -> Result<(), String> {
        std::fs::create_dir_all(&self.data_dir)
            .map_err(|e| format!("Failed to create data directory: {}", e))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!("Failed to read '{}': {}", key, err)),
            },
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.ensure_data_dir()?;
        std::fs::write(self.path_for(key), value)
            .map_err(|e| format!("Failed to write '{}': {}", key, e))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(()),
                _ => Err(format!("Failed to remove '{}': {}", key, err)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_data_dir() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("thinktank_store_test_{}", random_number));
        path
    }

    #[test]
    fn test_get_missing_key_returns_none() {
        let store = FileKeyValueStore::new(temp_data_dir());
        assert_eq!(store.get("notes").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let dir = temp_data_dir();
        let store = FileKeyValueStore::new(&dir);
        store.set("notes", "[1,2,3]").unwrap();
        assert_eq!(store.get("notes").unwrap(), Some("[1,2,3]".to_string()));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let dir = temp_data_dir();
        let store = FileKeyValueStore::new(&dir);
        store.set("stats", "{\"games_played\":1}").unwrap();
        store.set("stats", "{\"games_played\":2}").unwrap();
        assert_eq!(
            store.get("stats").unwrap(),
            Some("{\"games_played\":2}".to_string())
        );
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let store = FileKeyValueStore::new(temp_data_dir());
        assert!(store.remove("never_written").is_ok());
    }

    #[test]
    fn test_remove_deletes_value() {
        let dir = temp_data_dir();
        let store = FileKeyValueStore::new(&dir);
        store.set("journal_entries", "[]").unwrap();
        store.remove("journal_entries").unwrap();
        assert_eq!(store.get("journal_entries").unwrap(), None);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
