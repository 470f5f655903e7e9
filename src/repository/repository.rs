use crate::repository::storage_error::StorageError;

/// Key-value seam the coin repository persists through.
///
/// A single `insert` must replace the value under `key` atomically.
pub trait Store {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn insert(&self, key: &str, value: String) -> Result<(), StorageError>;
}
