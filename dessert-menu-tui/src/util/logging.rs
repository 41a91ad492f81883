//! 日志初始化
//!
//! The terminal is in raw mode on the alternate screen, so log output goes to
//! a file instead of stderr. `log` macros (used by the provider crate) reach
//! the same subscriber through its log bridge.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const APP_DIR: &str = "dessert-menu";
const LOG_FILE: &str = "dessert-menu.log";

/// 安装全局日志订阅器，返回日志文件路径
///
/// 默认级别为 `info`，可通过 `RUST_LOG` 覆盖。
pub fn init_logging() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR);
    fs::create_dir_all(&dir)?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()?;

    Ok(path)
}
