//! Key/Value Storage
//!
//! Durable, origin-scoped string slots used to hand the cart from the shop
//! page to the checkout page. Writers race with last-write-wins semantics;
//! there is no locking, expiry or versioning.

use thiserror::Error;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by key/value store backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error reading or writing a slot.
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Key is empty or contains characters outside `[A-Za-z0-9_-]`.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Durable string slots addressed by key.
pub trait KeyValueStore {
    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the key is invalid or the backend fails.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Read the value under `key`, or `None` when the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the key is invalid or the backend fails.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Remove the value under `key`. Removing an empty slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the key is invalid or the backend fails.
    fn delete(&mut self, key: &str) -> Result<(), StorageError>;
}

pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_keys() {
        assert!(validate_key("cart").is_ok());
        assert!(validate_key("cart_v-2").is_ok());
    }

    #[test]
    fn rejects_empty_and_path_like_keys() {
        for key in ["", "../cart", "a/b", "cart.json", "with space"] {
            assert!(
                matches!(validate_key(key), Err(StorageError::InvalidKey(ref k)) if k == key),
                "expected {key:?} to be rejected"
            );
        }
    }
}
