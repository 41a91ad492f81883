//! 应用配置

use dessert_menu_provider::ClientConfig;

/// Category shown on the main screen.
pub const DEFAULT_CATEGORY: &str = "Dessert";

/// 应用配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Category filter passed to the catalog lookup
    pub category: String,
    /// Catalog client settings
    pub client: ClientConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            client: ClientConfig::default(),
        }
    }
}
