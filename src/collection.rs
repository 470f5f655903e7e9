pub mod coin;
pub mod collection_service;
pub mod filter;
pub mod helper_functions;
