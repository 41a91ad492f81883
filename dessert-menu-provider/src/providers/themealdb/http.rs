//! TheMealDB HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::providers::common::endpoint_url;

use super::TheMealDbClient;

impl TheMealDbClient {
    /// 执行 GET 请求并解析 JSON
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        key: &str,
        value: &str,
    ) -> Result<T> {
        let url = endpoint_url(&self.base_url, endpoint, key, value);
        let (_, response_text) =
            HttpUtils::execute_request(self.client.get(&url), "GET", &url).await?;
        HttpUtils::parse_json(&response_text)
    }
}
