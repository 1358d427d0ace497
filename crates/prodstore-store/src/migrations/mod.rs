//! Schema bootstrap for the `products` table
//!
//! The repository never runs this; embedders and tests call
//! `apply_migrations` once after opening a connection.

mod checksums;
mod embedded;
mod runner;

pub use embedded::{get_migrations, Migration};
pub use runner::apply_migrations;
