use crate::repository::storage_error::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config source error: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Got wrong storage name: {0}")]
    WrongStorage(String),

    #[error("Got wrong log level: {0}")]
    WrongLogLevel(String),

    #[error("Open db error: {0}")]
    OpenDb(#[from] StorageError),
}
