//! 应用主消息

use super::{CatalogMessage, DetailMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,
    /// 食谱列表子消息
    Catalog(CatalogMessage),
    /// 详情子消息
    Detail(DetailMessage),
    /// 无操作
    Noop,
}
