//! TheMealDB MealCatalog trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::MealCatalog;
use crate::types::{DetailItem, DetailResponse, ListResponse};

use super::types::{MealDbMeal, MealDbMealDetail, MealDbResponse};
use super::{FILTER_ENDPOINT, LOOKUP_ENDPOINT, TheMealDbClient};

#[async_trait]
impl MealCatalog for TheMealDbClient {
    fn id(&self) -> &'static str {
        "themealdb"
    }

    async fn fetch_catalog(&self, category: &str) -> Result<ListResponse> {
        let response: MealDbResponse<MealDbMeal> =
            self.get(FILTER_ENDPOINT, "c", category).await?;
        let list = ListResponse::from(response);
        log::info!("catalog '{category}': {} recipes", list.len());
        Ok(list)
    }

    async fn fetch_detail(&self, id: &str) -> Result<DetailItem> {
        let response: MealDbResponse<MealDbMealDetail> =
            self.get(LOOKUP_ENDPOINT, "i", id).await?;
        DetailResponse::from(response).into_single(id)
    }
}
