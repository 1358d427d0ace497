//! Core types shared across prodstore facilities
//!
//! - **Correlation types**: RequestId
//! - **Schema constants**: Canonical field keys and event names for logging

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
