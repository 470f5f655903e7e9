use crate::config_scheme::config_error::ConfigError;
use crate::repository::coin_repository::DEFAULT_COLLECTION_KEY;
use clap::ArgMatches;
use env_logger::Builder;
use log::LevelFilter;

pub fn get_config_file_path(matches: &ArgMatches, key: &str) -> Option<String> {
    matches.value_of(key).map(|v| v.to_string())
}

pub fn get_config_from_config_files(
    matches: &ArgMatches,
    key: &str,
) -> Result<config::Config, ConfigError> {
    match get_config_file_path(matches, key) {
        Some(path) => get_config_from_file(&path),
        None => get_config_from_env(key),
    }
}

pub fn get_config_from_file(path: &str) -> Result<config::Config, ConfigError> {
    let mut config = config::Config::default();
    config.merge(config::File::with_name(path))?;

    Ok(config)
}

pub fn get_config_from_env(key: &str) -> Result<config::Config, ConfigError> {
    let mut config = config::Config::default();
    let env_key = "APP__".to_string() + &key.to_uppercase() + "_";

    config.merge(config::Environment::with_prefix(&env_key).separator("__"))?;

    Ok(config)
}

pub fn parse_log_level(log_level: &str) -> Result<LevelFilter, ConfigError> {
    log_level
        .parse()
        .map_err(|_| ConfigError::WrongLogLevel(log_level.to_string()))
}

/// May run more than once per process (tests); later calls keep the first logger.
pub fn set_log_level(log_level: LevelFilter) {
    let mut builder = Builder::from_default_env();
    builder.filter(Some("coin_vault"), log_level);
    let _ = builder.try_init();
}

pub fn get_default_storage_name() -> String {
    "sled".to_string()
}

pub fn get_default_db_path() -> String {
    "db".to_string()
}

pub fn get_default_collection_key() -> String {
    DEFAULT_COLLECTION_KEY.to_string()
}

pub fn get_default_log_level() -> String {
    "warn".to_string()
}
