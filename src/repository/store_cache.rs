use crate::repository::repository::Store;
use crate::repository::storage_error::StorageError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone, Default)]
pub struct StoreCache(Arc<Mutex<HashMap<String, String>>>);

impl StoreCache {
    pub fn new(repository: Arc<Mutex<HashMap<String, String>>>) -> Self {
        Self(repository)
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.0
            .lock()
            .map_err(|e| StorageError::StoreUnavailable(e.to_string()))
    }
}

impl Store for StoreCache {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn insert(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value);

        Ok(())
    }
}
