use crate::config_scheme::config_error::ConfigError;
use crate::repository::repository::Store;
use crate::repository::store_cache::StoreCache;
use crate::repository::store_sled::StoreSled;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub enum Storage {
    Cache(StoreCache),
    Sled(StoreSled),
}

impl Storage {
    fn make_sled(db_path: &str) -> Result<Self, ConfigError> {
        let store = StoreSled::open(db_path)?;

        Ok(Self::Sled(store))
    }

    pub fn from_str(name: &str, db_path: &str) -> Result<Self, ConfigError> {
        match name {
            "cache" => Ok(Self::Cache(StoreCache::new(Arc::new(Mutex::new(
                HashMap::new(),
            ))))),
            "sled" => Self::make_sled(db_path),
            other_storage => Err(ConfigError::WrongStorage(other_storage.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Cache(_) => "cache",
            Self::Sled(_) => "sled",
        }
    }

    pub fn into_store(self) -> Box<dyn Store + Send> {
        match self {
            Self::Cache(store) => Box::new(store),
            Self::Sled(store) => Box::new(store),
        }
    }
}
