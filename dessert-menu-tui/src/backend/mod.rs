//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有的网络请求。
//! 通过 dessert-menu-provider 访问 TheMealDB。
//!
//!
//! 数据流：
//!
//!     Update 返回 Command::FetchCatalog / Command::FetchDetail
//!         ↓
//!     MealService::execute 在 tokio runtime 上 spawn 一个任务
//!         ↓
//!     任务调用 MealCatalog（TheMealDbClient）
//!         ↓
//!     结果包装为 CatalogMessage::Loaded / DetailMessage::Loaded 发回 channel
//!         ↓
//!     主循环 try_recv 取出消息，交给 Update 层
//!
//! The UI loop never blocks on the network; a slow lookup only delays its
//! own completion message.
//!

mod meal_service;

pub use meal_service::MealService;
