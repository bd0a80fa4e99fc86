use super::{KeyValueStore, StoreError};
use std::collections::HashMap;

/// In-process store. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("focus").unwrap(), None);

        store.set("focus", "Write report").unwrap();
        assert_eq!(store.get("focus").unwrap().as_deref(), Some("Write report"));

        store.set("focus", "").unwrap();
        assert_eq!(store.get("focus").unwrap().as_deref(), Some(""));

        store.remove("focus").unwrap();
        assert_eq!(store.get("focus").unwrap(), None);
        store.remove("focus").unwrap();
        assert!(store.entries.is_empty());
    }
}
