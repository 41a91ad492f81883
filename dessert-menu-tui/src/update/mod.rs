//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//! `update` never performs I/O. When a message needs a fetch, it returns a
//! [`Command`] and the main loop hands it to the backend; the result comes
//! back later as another message. Every state change therefore happens on
//! the UI loop, one message at a time.
//!

mod catalog;
mod command;
mod detail;

pub use command::Command;

use dessert_menu_provider::FetchError;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Command {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Command::None
        }

        AppMessage::Catalog(catalog_msg) => catalog::update(app, catalog_msg),

        AppMessage::Detail(detail_msg) => detail::update(app, detail_msg),

        AppMessage::Noop => Command::None,
    }
}

/// Log a recovered fetch error at a level matching its severity.
fn log_fetch_error(context: &str, error: &FetchError) {
    if error.is_expected() {
        log::warn!("{context}: {error}");
    } else {
        log::error!("{context}: {error}");
    }
}
