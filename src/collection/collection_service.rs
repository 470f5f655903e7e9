use crate::collection::coin::{Coin, CoinDraft};
use crate::collection::filter::filter;
use crate::repository::coin_repository::CoinRepository;
use crate::repository::storage_error::StorageError;

/// Operations the presentation layer drives. Mutations hand back the
/// collection re-read from the store, so callers replace their copy instead
/// of patching it.
pub struct CollectionService {
    repository: CoinRepository,
}

impl CollectionService {
    pub fn new(repository: CoinRepository) -> Self {
        Self { repository }
    }

    pub fn load(&self) -> Vec<Coin> {
        self.repository.load_all()
    }

    pub fn add(&self, draft: CoinDraft) -> Result<Vec<Coin>, StorageError> {
        let coin = draft.into_coin();
        info!("Adding coin {} ({})", coin.id, coin.title);

        self.repository.save_one(coin)?;

        Ok(self.load())
    }

    pub fn delete(&self, id: &str) -> Result<Vec<Coin>, StorageError> {
        info!("Deleting coin {}", id);

        self.repository.delete_one(id)?;

        Ok(self.load())
    }

    pub fn search(&self, query: &str) -> Vec<Coin> {
        filter(&self.load(), query)
    }

    pub fn find(&self, id: &str) -> Option<Coin> {
        self.load().into_iter().find(|v| v.id == id)
    }

    pub fn count(&self) -> usize {
        self.load().len()
    }
}
