use crate::config_scheme::service_config::ServiceConfig;
use crate::repository::coin_repository::CoinRepository;

pub struct Repositories {
    pub coins: CoinRepository,
}

impl Repositories {
    pub fn new(config: &ServiceConfig) -> Self {
        info!(
            "Using {} storage at \"{}\", collection key \"{}\"",
            config.storage.name(),
            config.db_path,
            config.collection_key,
        );

        let coins = CoinRepository::new(
            config.collection_key.clone(),
            config.storage.clone().into_store(),
        );

        Self { coins }
    }
}
