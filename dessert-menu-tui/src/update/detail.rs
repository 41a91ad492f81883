//! 详情弹窗更新逻辑

use dessert_menu_provider::{DetailItem, FetchError};

use crate::message::DetailMessage;
use crate::model::App;

use super::{Command, log_fetch_error};

/// 处理详情消息
pub fn update(app: &mut App, msg: DetailMessage) -> Command {
    match msg {
        DetailMessage::Open => handle_open(app),
        DetailMessage::Loaded { generation, result } => {
            handle_loaded(app, generation, result);
            Command::None
        }
        DetailMessage::Dismiss => {
            app.detail.dismiss();
            Command::None
        }
        DetailMessage::ScrollUp => {
            app.detail.scroll_up();
            Command::None
        }
        DetailMessage::ScrollDown => {
            app.detail.scroll_down();
            Command::None
        }
    }
}

fn handle_open(app: &mut App) -> Command {
    let Some(item) = app.catalog.selected_item() else {
        return Command::None;
    };
    if app.detail.is_pending_for(&item.id) {
        log::debug!("detail {} already loading", item.id);
        return Command::None;
    }
    let id = item.id.clone();
    let name = item.name.clone();

    let generation = app.detail.begin_request(id.clone());
    app.set_status(format!("Loading {name}..."));
    Command::FetchDetail { id, generation }
}

fn handle_loaded(app: &mut App, generation: u64, result: Result<DetailItem, FetchError>) {
    if !app.detail.is_current(generation) {
        log::debug!("dropping stale detail completion (generation {generation})");
        return;
    }

    match result {
        Ok(item) => {
            app.detail.show(generation, item);
            app.clear_status();
        }
        Err(e) => {
            log_fetch_error("detail fetch failed", &e);
            app.detail.fail(generation);
            app.set_status(format!("Failed to load recipe: {e}"));
        }
    }
}
