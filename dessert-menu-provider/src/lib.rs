//! # dessert-menu-provider
//!
//! A typed client for the [TheMealDB](https://www.themealdb.com/) recipe
//! catalog: list lookups by category, detail lookups by id, and ingredient
//! normalization for display.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dessert_menu_provider::{ClientConfig, MealCatalog, TheMealDbClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TheMealDbClient::new(&ClientConfig::default())?;
//!
//!     // 1. List the dessert catalog
//!     let catalog = client.fetch_catalog("Dessert").await?;
//!     for item in &catalog.items {
//!         println!("{} ({})", item.name, item.id);
//!     }
//!
//!     // 2. Look up one recipe
//!     let detail = client.fetch_detail(&catalog.items[0].id).await?;
//!     println!("{}", detail.ingredients_display());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All lookups return [`Result<T, FetchError>`](FetchError):
//!
//! - [`FetchError::Network`] / [`FetchError::Timeout`] / [`FetchError::HttpStatus`]: transport
//! - [`FetchError::Decode`]: malformed body, missing or mistyped fields
//! - [`FetchError::NotFound`]: detail lookup returned no record
//!
//! Nothing is retried.

#[cfg(test)]
#[macro_use]
mod test_macros;

mod config;
mod error;
mod http_client;
mod ingredients;
mod providers;
mod traits;
mod types;

// Re-export error types
pub use error::{FetchError, FetchErrorKind, Result};

// Re-export configuration
pub use config::{ClientConfig, DEFAULT_BASE_URL};

// Re-export core trait
pub use traits::MealCatalog;

// Re-export types
pub use types::{
    DetailItem, DetailResponse, INGREDIENT_SLOT_COUNT, IngredientSlots, ListItem, ListResponse,
};

// Re-export the normalizer
pub use ingredients::{INGREDIENT_SEPARATOR, normalize_ingredients, title_case};

// Re-export concrete clients
pub use providers::TheMealDbClient;
