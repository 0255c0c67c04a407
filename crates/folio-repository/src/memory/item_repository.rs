use crate::traits::ItemRepository;
use async_trait::async_trait;
use folio_core::{AuditInterceptor, Entity, FolioError, FolioResult, Item};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Item repository keyed by the caller-assigned item id.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    rows: RwLock<HashMap<String, Item>>,
    audit: AuditInterceptor,
}

impl InMemoryItemRepository {
    #[must_use]
    pub fn new(audit: AuditInterceptor) -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            audit,
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn save(&self, mut item: Item) -> FolioResult<Item> {
        let mut rows = self.rows.write().await;

        if item.is_new() {
            if rows.contains_key(&item.id) {
                return Err(FolioError::conflict(format!(
                    "Item '{}' already exists",
                    item.id
                )));
            }
            item.created_date = Some(self.audit.now());
            debug!(id = %item.id, "Repository: inserted item");
        } else {
            debug!(id = %item.id, "Repository: merged item");
        }

        rows.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: &str) -> FolioResult<Option<Item>> {
        Ok(self.rows.read().await.get(id).cloned())
    }
}
