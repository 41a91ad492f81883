//! 页面状态

mod catalog;
mod detail;

pub use catalog::{CatalogState, LoadPhase};
pub use detail::{DetailPhase, DetailState};
