//! 食谱列表更新逻辑

use dessert_menu_provider::{FetchError, ListResponse};

use crate::message::CatalogMessage;
use crate::model::App;

use super::{Command, log_fetch_error};

/// 处理食谱列表消息
pub fn update(app: &mut App, msg: CatalogMessage) -> Command {
    match msg {
        CatalogMessage::Load => handle_load(app),
        CatalogMessage::Loaded(result) => {
            handle_loaded(app, result);
            Command::None
        }

        // ========== 列表导航 ==========
        CatalogMessage::SelectPrevious => {
            app.catalog.select_previous();
            Command::None
        }
        CatalogMessage::SelectNext => {
            app.catalog.select_next();
            Command::None
        }
        CatalogMessage::SelectFirst => {
            app.catalog.select_first();
            Command::None
        }
        CatalogMessage::SelectLast => {
            app.catalog.select_last();
            Command::None
        }
    }
}

fn handle_load(app: &mut App) -> Command {
    if !app.catalog.begin_loading() {
        log::debug!("catalog fetch already in flight");
        return Command::None;
    }

    let category = app.config.category.clone();
    app.set_status(format!("Loading {category} recipes..."));
    Command::FetchCatalog { category }
}

fn handle_loaded(app: &mut App, result: Result<ListResponse, FetchError>) {
    match result {
        Ok(response) => {
            let count = response.len();
            app.catalog.replace_items(response.items);
            app.set_status(format!("{count} recipes"));
        }
        Err(e) => {
            log_fetch_error("catalog fetch failed", &e);
            app.catalog.fail(e.to_string());
            app.set_status(format!("Failed to load recipes: {e}"));
        }
    }
}
