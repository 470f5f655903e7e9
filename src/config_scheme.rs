pub mod config_error;
pub mod config_scheme;
pub mod helper_functions;
pub mod service_config;
pub mod storage;
