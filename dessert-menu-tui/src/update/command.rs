//! Side effects requested by the Update layer

/// 由 update 返回、由 backend 执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 无副作用
    None,
    /// Fetch the catalog of one category
    FetchCatalog { category: String },
    /// Fetch one recipe; the completion carries `generation` back
    FetchDetail { id: String, generation: u64 },
}
