use async_trait::async_trait;

use crate::error::Result;
use crate::types::{DetailItem, ListResponse};

/// Recipe catalog Trait
///
/// Both lookups are single round trips with no retry; callers decide what to
/// do with the error.
#[async_trait]
pub trait MealCatalog: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// Fetch the recipe summaries of one category, in server order.
    async fn fetch_catalog(&self, category: &str) -> Result<ListResponse>;

    /// Fetch the full record for one recipe id.
    ///
    /// An empty result sequence is reported as
    /// [`FetchError::NotFound`](crate::FetchError::NotFound).
    async fn fetch_detail(&self, id: &str) -> Result<DetailItem>;
}
