pub mod coin_repository;
pub mod repositories;
pub mod repository;
pub mod storage_error;
pub mod store_cache;
pub mod store_sled;
