//! 应用主状态结构

use crate::config::AppConfig;

use super::{CatalogState, DetailState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 应用配置
    pub config: AppConfig,

    // === 各页面状态 ===
    /// 食谱列表状态
    pub catalog: CatalogState,
    /// 详情弹窗状态
    pub detail: DetailState,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: AppConfig) -> Self {
        Self {
            should_quit: false,
            status_message: None,
            config,
            catalog: CatalogState::new(),
            detail: DetailState::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
