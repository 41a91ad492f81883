//! Client 公共工具函数

use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::{FetchError, Result};

// ============ HTTP Client ============

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(config: &ClientConfig) -> Result<Client> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| FetchError::InvalidConfig {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ URL ============

/// Join an API root and an endpoint with a single URL-encoded query parameter.
///
/// `("https://x/api/", "filter.php", "c", "Dessert")` → `https://x/api/filter.php?c=Dessert`
pub fn endpoint_url(base_url: &str, endpoint: &str, key: &str, value: &str) -> String {
    format!(
        "{}/{}?{}={}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/'),
        key,
        urlencoding::encode(value)
    )
}
