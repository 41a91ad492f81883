//! Dessert Menu TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)，返回 `Command`
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 在 tokio runtime 上执行 `Command` (`backend/`)
//!
//! 网络请求在后台任务中完成，结果通过 channel 回到主循环，
//! 因此所有状态修改都发生在 UI 线程上。
//!
//!
//! main.rs 执行：
//!
//!     init_logging()          // 日志写入缓存目录下的文件
//!     Runtime::new()          // 后台请求使用的 tokio runtime
//!     TheMealDbClient::new()  // 食谱目录客户端
//!     init_terminal()         // 原始模式 + 备用屏幕
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端

mod app;
mod backend;
mod config;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use dessert_menu_provider::TheMealDbClient;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use backend::MealService;
use config::AppConfig;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志
    let log_path = init_logging()?;
    tracing::info!("Dessert Menu starting, logging to {}", log_path.display());

    // 2. 创建后台服务
    let config = AppConfig::default();
    let runtime = Runtime::new()?;
    let client = TheMealDbClient::new(&config.client)?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let backend = MealService::new(Arc::new(client), runtime.handle().clone(), tx);

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用实例
    let mut app = model::App::new(config);

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &backend, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // In-flight lookups are abandoned
    drop(backend);
    runtime.shutdown_background();
    tracing::info!("Dessert Menu exiting");

    result
}
