//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!     · handle_event    事件分发
//!
//!         Event::Key(KeyEvent)        键盘事件，只处理 Press
//!         其他事件                     AppMessage::Noop
//!
//!         判断顺序：
//!             - 全局快捷键（q / Ctrl+C 退出）
//!             - 详情弹窗打开时，↑↓ 滚动，Esc 关闭
//!             - 否则为列表按键
//!
//!     常用键盘映射：
//!         ↑ / k       → CatalogMessage::SelectPrevious
//!         ↓ / j       → CatalogMessage::SelectNext
//!         Home / End  → CatalogMessage::SelectFirst / SelectLast
//!         Enter       → DetailMessage::Open
//!         r           → CatalogMessage::Load
//!         Esc         → DetailMessage::Dismiss
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
