//!
//! app.rs
//! 应用主循环
//!
//! 启动时先分发一次 `CatalogMessage::Load`，随后：
//!
//! loop {
//!     terminal.draw(|f| view::render(&app, f))    // 渲染 UI
//!     if app.should_quit { break }                // 检查是否应该退出
//!     while let Ok(msg) = rx.try_recv() {         // 取出后台任务完成的消息
//!         dispatch(msg)
//!     }
//!     if let Some(event) = poll_event(100ms) {    // 轮询输入，最多等待 100ms
//!         dispatch(handle_event(event, &app))
//!     }
//! }
//!
//! dispatch = update::update 修改状态 + backend.execute 执行返回的 Command
//!

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::MealService;
use crate::event;
use crate::message::{AppMessage, CatalogMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &MealService,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    dispatch(app, backend, AppMessage::Catalog(CatalogMessage::Load));

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理后台任务结果
        while let Ok(msg) = rx.try_recv() {
            dispatch(app, backend, msg);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_TIMEOUT)? {
            let msg = event::handle_event(event, app);
            dispatch(app, backend, msg);
        }
    }

    Ok(())
}

/// 更新状态，并执行返回的命令
fn dispatch(app: &mut App, backend: &MealService, msg: AppMessage) {
    let command = update::update(app, msg);
    backend.execute(command);
}
