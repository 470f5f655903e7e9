use crate::config_scheme::config_error::ConfigError;
use crate::config_scheme::helper_functions::{
    get_config_from_config_files, get_default_collection_key, get_default_db_path,
    get_default_log_level, get_default_storage_name, parse_log_level,
};
use crate::config_scheme::storage::Storage;
use clap::ArgMatches;
use log::LevelFilter;

#[derive(Clone)]
pub struct ServiceConfig {
    pub storage: Storage,
    pub db_path: String,
    pub collection_key: String,
    pub log_level: LevelFilter,
}

impl ServiceConfig {
    pub fn new(matches: &ArgMatches) -> Result<Self, ConfigError> {
        let service_config = get_config_from_config_files(matches, "service_config")?;

        Self::from_config(&service_config)
    }

    pub fn from_config(service_config: &config::Config) -> Result<Self, ConfigError> {
        let log_level = parse_log_level(
            &service_config
                .get_str("log_level")
                .unwrap_or_else(|_| get_default_log_level()),
        )?;

        let db_path = service_config
            .get_str("db_path")
            .unwrap_or_else(|_| get_default_db_path());

        let collection_key = service_config
            .get_str("collection_key")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(get_default_collection_key);

        let storage_name = service_config
            .get_str("storage")
            .unwrap_or_else(|_| get_default_storage_name());
        let storage = Storage::from_str(&storage_name, &db_path)?;

        Ok(Self {
            storage,
            db_path,
            collection_key,
            log_level,
        })
    }
}
