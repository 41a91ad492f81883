//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! The whole presentation state lives in one owned [`App`]. Only the Update
//! layer mutates it; the View layer only reads it.
//!
//!     App
//!         · catalog: CatalogState     // recipe list, cursor, Idle/Loading/Loaded/Failed
//!         · detail:  DetailState      // selected record, visibility, pending request
//!         · status_message            // bottom bar text
//!

mod app;
mod state;

pub use app::App;
pub use state::{CatalogState, DetailPhase, DetailState, LoadPhase};
