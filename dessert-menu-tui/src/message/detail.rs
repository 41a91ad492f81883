//! 详情消息

use dessert_menu_provider::{DetailItem, FetchError};

/// 详情消息
#[derive(Debug, Clone)]
pub enum DetailMessage {
    /// Fetch the detail of the recipe under the cursor
    Open,
    /// A detail fetch finished; `generation` identifies the request
    Loaded {
        generation: u64,
        result: Result<DetailItem, FetchError>,
    },
    /// Hide the sheet (no fetch is issued)
    Dismiss,
    /// 向上滚动
    ScrollUp,
    /// 向下滚动
    ScrollDown,
}
