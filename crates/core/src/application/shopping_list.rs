// Shopping List Service - CRUD use cases over an injected repository

use crate::domain::{ItemId, ItemUpdate, NewItem, ShoppingListItem};
use crate::error::Result;
use crate::port::ShoppingListRepository;
use std::sync::Arc;
use tracing::debug;

/// Stateless facade over [`ShoppingListRepository`].
///
/// Holds no state between calls beyond the repository handle, which is
/// constructed and closed by the caller.
pub struct ShoppingListService {
    repo: Arc<dyn ShoppingListRepository>,
}

impl ShoppingListService {
    pub fn new(repo: Arc<dyn ShoppingListRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_items(&self) -> Result<Vec<ShoppingListItem>> {
        let items = self.repo.get_all_items().await?;
        debug!(count = items.len(), "Loaded shopping list");
        Ok(items)
    }

    pub async fn get_by_id(&self, id: ItemId) -> Result<Option<ShoppingListItem>> {
        let item = self.repo.get_by_id(id).await?;
        debug!(id = %id, found = item.is_some(), "Looked up item");
        Ok(item)
    }

    pub async fn insert_item(&self, item: &NewItem) -> Result<ShoppingListItem> {
        let stored = self.repo.insert_item(item).await?;
        debug!(id = %stored.id, name = %stored.name, "Inserted item");
        Ok(stored)
    }

    /// Partial update. A missing id is not an error and yields 0.
    pub async fn update_item(&self, id: ItemId, fields: &ItemUpdate) -> Result<u64> {
        let affected = self.repo.update_item(id, fields).await?;
        debug!(id = %id, affected, "Updated item");
        Ok(affected)
    }

    /// Hard delete. A missing id is not an error and yields 0.
    pub async fn delete_item(&self, id: ItemId) -> Result<u64> {
        let affected = self.repo.delete_item(id).await?;
        debug!(id = %id, affected, "Deleted item");
        Ok(affected)
    }
}
