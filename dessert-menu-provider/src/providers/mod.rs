//! Catalog client implementations

/// Shared utilities used by client implementations.
pub mod common;

mod themealdb;

pub use themealdb::TheMealDbClient;
