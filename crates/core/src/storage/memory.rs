//! In-memory key/value store.

use rustc_hash::FxHashMap;

use super::{KeyValueStore, StorageError, validate_key};

/// Key/value store that lives as long as the value itself.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;

        self.slots.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;

        Ok(self.slots.get(key).cloned())
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;

        self.slots.remove(key);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn write_then_read() -> TestResult {
        let mut store = MemoryStore::new();

        store.write("cart", "[]")?;

        assert_eq!(store.read("cart")?, Some("[]".to_string()));
        assert_eq!(store.len(), 1);

        Ok(())
    }

    #[test]
    fn last_write_wins() -> TestResult {
        let mut store = MemoryStore::new();

        store.write("cart", "first")?;
        store.write("cart", "second")?;

        assert_eq!(store.read("cart")?, Some("second".to_string()));

        Ok(())
    }

    #[test]
    fn delete_missing_key_is_noop() -> TestResult {
        let mut store = MemoryStore::new();

        store.delete("cart")?;

        assert!(store.is_empty());
        assert_eq!(store.read("cart")?, None);

        Ok(())
    }

    #[test]
    fn invalid_key_is_rejected() {
        let mut store = MemoryStore::new();

        assert!(matches!(
            store.write("../cart", "[]"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
