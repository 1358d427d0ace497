//! prodstore store - SQLite persistence for products
//!
//! Provides:
//! - `ProductRepository`: create / delete-by-id over a `DatabaseHandle`
//! - `DatabaseHandle` implemented for `rusqlite::Connection`
//! - Connection helpers, `products` schema bootstrap and `StoreConfig`

pub mod config;
pub mod db;
pub mod errors;
pub mod handle;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use crate::config::StoreConfig;
pub use errors::Result;
pub use handle::DatabaseHandle;
pub use repo::ProductRepository;
