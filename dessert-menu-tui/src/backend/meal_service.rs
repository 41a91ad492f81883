//! 食谱服务
//!
//! 在后台任务中执行 Update 层返回的 [`Command`]，
//! 并把结果作为消息送回主循环。

use std::sync::Arc;

use dessert_menu_provider::MealCatalog;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, CatalogMessage, DetailMessage};
use crate::update::Command;

/// TUI 食谱服务
pub struct MealService {
    catalog: Arc<dyn MealCatalog>,
    runtime: Handle,
    tx: UnboundedSender<AppMessage>,
}

impl MealService {
    pub fn new(
        catalog: Arc<dyn MealCatalog>,
        runtime: Handle,
        tx: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            catalog,
            runtime,
            tx,
        }
    }

    /// 执行命令；`Command::None` 不做任何事
    pub fn execute(&self, command: Command) {
        match command {
            Command::None => {}
            Command::FetchCatalog { category } => self.fetch_catalog(category),
            Command::FetchDetail { id, generation } => self.fetch_detail(id, generation),
        }
    }

    fn fetch_catalog(&self, category: String) {
        let catalog = Arc::clone(&self.catalog);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            log::debug!("[{}] fetching catalog: {category}", catalog.id());
            let result = catalog.fetch_catalog(&category).await;
            send(&tx, AppMessage::Catalog(CatalogMessage::Loaded(result)));
        });
    }

    fn fetch_detail(&self, id: String, generation: u64) {
        let catalog = Arc::clone(&self.catalog);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            log::debug!("[{}] fetching detail {id} (generation {generation})", catalog.id());
            let result = catalog.fetch_detail(&id).await;
            send(
                &tx,
                AppMessage::Detail(DetailMessage::Loaded { generation, result }),
            );
        });
    }
}

/// The receiver is gone once the UI loop has exited; late results are dropped.
fn send(tx: &UnboundedSender<AppMessage>, msg: AppMessage) {
    if tx.send(msg).is_err() {
        log::debug!("UI loop closed, dropping fetch result");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dessert_menu_provider::{
        DetailItem, FetchError, IngredientSlots, ListItem, ListResponse, Result,
    };
    use tokio::sync::mpsc;

    struct FakeCatalog;

    #[async_trait]
    impl MealCatalog for FakeCatalog {
        fn id(&self) -> &'static str {
            "fake"
        }

        async fn fetch_catalog(&self, category: &str) -> Result<ListResponse> {
            Ok(ListResponse {
                items: vec![ListItem {
                    id: "1".to_string(),
                    name: category.to_string(),
                    thumbnail_url: String::new(),
                }],
            })
        }

        async fn fetch_detail(&self, id: &str) -> Result<DetailItem> {
            if id == "missing" {
                return Err(FetchError::NotFound { id: id.to_string() });
            }
            Ok(DetailItem {
                id: id.to_string(),
                name: "Pie".to_string(),
                thumbnail_url: String::new(),
                instructions: String::new(),
                ingredients: IngredientSlots::default(),
            })
        }
    }

    fn service() -> (MealService, mpsc::UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let service = MealService::new(Arc::new(FakeCatalog), Handle::current(), tx);
        (service, rx)
    }

    #[tokio::test]
    async fn catalog_result_comes_back_as_message() {
        let (service, mut rx) = service();
        service.execute(Command::FetchCatalog {
            category: "Dessert".to_string(),
        });

        let msg = rx.recv().await;
        match msg {
            Some(AppMessage::Catalog(CatalogMessage::Loaded(Ok(list)))) => {
                assert_eq!(list.items[0].name, "Dessert");
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn detail_result_carries_generation() {
        let (service, mut rx) = service();
        service.execute(Command::FetchDetail {
            id: "missing".to_string(),
            generation: 7,
        });

        let msg = rx.recv().await;
        match msg {
            Some(AppMessage::Detail(DetailMessage::Loaded { generation, result })) => {
                assert_eq!(generation, 7);
                assert!(matches!(result, Err(FetchError::NotFound { .. })));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn none_sends_nothing() {
        let (service, mut rx) = service();
        service.execute(Command::None);
        drop(service);
        assert!(rx.recv().await.is_none());
    }
}
