use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Malformed data: {0}")]
    MalformedData(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<vsdbsled::Error> for StorageError {
    fn from(err: vsdbsled::Error) -> Self {
        StorageError::StoreUnavailable(err.to_string())
    }
}
