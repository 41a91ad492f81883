//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, CatalogMessage, DetailMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 终端窗口大小改变时下一帧自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 详情弹窗打开时优先处理
    if app.detail.is_visible() {
        return handle_sheet_keys(&key);
    }

    handle_catalog_keys(&key)
}

/// 详情弹窗键盘处理
fn handle_sheet_keys(key: &KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(key) {
        AppMessage::Detail(DetailMessage::Dismiss)
    } else if DefaultKeymap::is_up(key) {
        AppMessage::Detail(DetailMessage::ScrollUp)
    } else if DefaultKeymap::is_down(key) {
        AppMessage::Detail(DetailMessage::ScrollDown)
    } else {
        AppMessage::Noop
    }
}

/// 列表键盘处理
fn handle_catalog_keys(key: &KeyEvent) -> AppMessage {
    if DefaultKeymap::is_up(key) {
        AppMessage::Catalog(CatalogMessage::SelectPrevious)
    } else if DefaultKeymap::is_down(key) {
        AppMessage::Catalog(CatalogMessage::SelectNext)
    } else if DefaultKeymap::NAV_FIRST.matches(key) {
        AppMessage::Catalog(CatalogMessage::SelectFirst)
    } else if DefaultKeymap::NAV_LAST.matches(key) {
        AppMessage::Catalog(CatalogMessage::SelectLast)
    } else if DefaultKeymap::NAV_CONFIRM.matches(key) {
        AppMessage::Detail(DetailMessage::Open)
    } else if DefaultKeymap::REFRESH.matches(key) {
        AppMessage::Catalog(CatalogMessage::Load)
    } else if DefaultKeymap::BACK.matches(key) {
        // Abandons a detail request that is still loading
        AppMessage::Detail(DetailMessage::Dismiss)
    } else {
        AppMessage::Noop
    }
}
