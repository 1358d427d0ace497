//! prodstore core - product model, error facility and logging facility
//!
//! This crate carries everything the store layer needs that does not touch
//! a database:
//! - `Product`, `ProductId` and the comma-joined `Properties` codec
//! - `ExError` / `RepositoryError` error facility with stable codes
//! - Structured logging initialisation, `log_op_*` macros and test capture

pub mod errors;
pub mod logging_facility;
pub mod model;

// Logging macros resolve schema constants through this path
pub use prodstore_core_types as types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, RepositoryError, Result};
pub use model::{Product, ProductId, Properties};
