use crate::collection::coin::Coin;
use crate::repository::repository::Store;
use crate::repository::storage_error::StorageError;

pub const DEFAULT_COLLECTION_KEY: &str = "numismatic_collection";

/// Durable copy of the whole collection, stored as one JSON array under a
/// fixed key. Every mutation rewrites the full array.
pub struct CoinRepository {
    key: String,
    store: Box<dyn Store + Send>,
}

impl CoinRepository {
    pub fn new(key: String, store: Box<dyn Store + Send>) -> Self {
        Self { key, store }
    }

    /// Never fails: absent, malformed and unreadable data all come back as an
    /// empty collection.
    pub fn load_all(&self) -> Vec<Coin> {
        match self.try_load_all() {
            Ok(coins) => coins,
            Err(StorageError::MalformedData(e)) => {
                warn!("Stored collection \"{}\" is malformed: {}", self.key, e);

                Vec::new()
            }
            Err(e) => {
                error!("Cannot read collection \"{}\": {}", self.key, e);

                Vec::new()
            }
        }
    }

    pub fn try_load_all(&self) -> Result<Vec<Coin>, StorageError> {
        match self.store.read(&self.key)? {
            Some(payload) => serde_json::from_str(&payload)
                .map_err(|e| StorageError::MalformedData(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    /// Replaces the coin with the same id in place, or appends it. A payload
    /// that does not parse is copied to `<key>.corrupt` and the collection
    /// restarts from empty.
    pub fn save_one(&self, coin: Coin) -> Result<(), StorageError> {
        let mut coins = self.load_for_write()?;

        match coins.iter_mut().find(|v| v.id == coin.id) {
            Some(existing) => *existing = coin,
            None => coins.push(coin),
        }

        self.write_all(&coins)
    }

    /// Unknown ids are a no-op, including when the payload does not parse.
    pub fn delete_one(&self, id: &str) -> Result<(), StorageError> {
        let mut coins = match self.try_load_all() {
            Ok(coins) => coins,
            Err(StorageError::MalformedData(e)) => {
                warn!(
                    "Delete of {} on malformed collection \"{}\" skipped: {}",
                    id, self.key, e,
                );

                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let len_before = coins.len();

        coins.retain(|v| v.id != id);

        if coins.len() == len_before {
            debug!("Delete of unknown coin id {} skipped", id);

            return Ok(());
        }

        self.write_all(&coins)
    }

    pub fn corrupt_key(&self) -> String {
        format!("{}.corrupt", self.key)
    }

    fn load_for_write(&self) -> Result<Vec<Coin>, StorageError> {
        let payload = match self.store.read(&self.key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Ok(Vec::new()),
            Err(StorageError::MalformedData(e)) => {
                warn!(
                    "Stored collection \"{}\" is unreadable, starting over: {}",
                    self.key, e,
                );

                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        match serde_json::from_str(&payload) {
            Ok(coins) => Ok(coins),
            Err(e) => {
                warn!(
                    "Stored collection \"{}\" is malformed, moving it to \"{}\": {}",
                    self.key,
                    self.corrupt_key(),
                    e,
                );
                self.store.insert(&self.corrupt_key(), payload)?;

                Ok(Vec::new())
            }
        }
    }

    fn write_all(&self, coins: &[Coin]) -> Result<(), StorageError> {
        let payload =
            serde_json::to_string(coins).map_err(|e| StorageError::Serialization(e.to_string()))?;

        self.store.insert(&self.key, payload)
    }
}
