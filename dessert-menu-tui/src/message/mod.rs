//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event/Backend → Update 之间的桥梁。
//! Key presses (from `event/`) and fetch completions (from `backend/`) are
//! both expressed as an [`AppMessage`]; Update consumes them one at a time on
//! the UI loop.
//!
//!     AppMessage
//!         · Quit, Noop
//!         · Catalog(CatalogMessage)       // list lifecycle and cursor
//!         · Detail(DetailMessage)         // detail lifecycle and sheet
//!

mod app;
mod catalog;
mod detail;

pub use app::AppMessage;
pub use catalog::CatalogMessage;
pub use detail::DetailMessage;
