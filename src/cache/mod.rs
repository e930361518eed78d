pub mod byte_store;
pub mod token;
pub mod token_cache;
