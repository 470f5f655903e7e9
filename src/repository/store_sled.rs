use crate::repository::repository::Store;
use crate::repository::storage_error::StorageError;
use std::str;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub struct StoreSled(Arc<Mutex<vsdbsled::Db>>);

impl StoreSled {
    pub fn new(db: Arc<Mutex<vsdbsled::Db>>) -> Self {
        Self(db)
    }

    pub fn open(path: &str) -> Result<Self, StorageError> {
        let db = vsdbsled::open(path)?;

        Ok(Self::new(Arc::new(Mutex::new(db))))
    }

    /// Throwaway database, removed when the last handle drops.
    #[cfg(test)]
    pub fn temporary() -> Result<Self, StorageError> {
        let db = vsdbsled::Config::new().temporary(true).open()?;

        Ok(Self::new(Arc::new(Mutex::new(db))))
    }

    fn lock(&self) -> Result<MutexGuard<'_, vsdbsled::Db>, StorageError> {
        self.0
            .lock()
            .map_err(|e| StorageError::StoreUnavailable(e.to_string()))
    }
}

impl Store for StoreSled {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self.lock()?.get(key)?;

        match value {
            Some(v) => str::from_utf8(&v)
                .map(|v| Some(v.to_string()))
                .map_err(|e| StorageError::MalformedData(e.to_string())),
            None => Ok(None),
        }
    }

    fn insert(&self, key: &str, value: String) -> Result<(), StorageError> {
        let db = self.lock()?;

        db.insert(key, value.as_bytes())?;
        db.flush()?;

        Ok(())
    }
}
