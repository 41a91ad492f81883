//! TheMealDB catalog client

mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::providers::common::create_http_client;

/// Category filter endpoint (`?c=<category>`)
pub(crate) const FILTER_ENDPOINT: &str = "filter.php";
/// Lookup-by-id endpoint (`?i=<id>`)
pub(crate) const LOOKUP_ENDPOINT: &str = "lookup.php";

/// TheMealDB catalog client
#[derive(Debug)]
pub struct TheMealDbClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl TheMealDbClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client: create_http_client(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
