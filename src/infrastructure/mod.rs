// Infrastructure layer - External dependencies and adapters
pub mod category_store;
pub mod config;
pub mod fold_codec;
pub mod http_response;
