//! 食谱列表消息

use dessert_menu_provider::{FetchError, ListResponse};

/// 食谱列表消息
#[derive(Debug, Clone)]
pub enum CatalogMessage {
    /// Fetch (or refetch) the catalog
    Load,
    /// A catalog fetch finished
    Loaded(Result<ListResponse, FetchError>),

    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
}
