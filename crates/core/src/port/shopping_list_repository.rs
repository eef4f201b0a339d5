// Shopping List Repository Port (Interface)

use crate::domain::{ItemId, ItemUpdate, NewItem, ShoppingListItem};
use crate::error::Result;
use async_trait::async_trait;

/// CRUD access to the `shopping_list` table.
///
/// Every method issues exactly one statement. Missing rows are never errors:
/// lookups yield `None` and writes report zero affected rows.
#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    /// All rows, in id order
    async fn get_all_items(&self) -> Result<Vec<ShoppingListItem>>;

    /// Single row by id
    async fn get_by_id(&self, id: ItemId) -> Result<Option<ShoppingListItem>>;

    /// Insert and return the stored row, including generated fields
    async fn insert_item(&self, item: &NewItem) -> Result<ShoppingListItem>;

    /// Partial update, returns affected row count
    async fn update_item(&self, id: ItemId, fields: &ItemUpdate) -> Result<u64>;

    /// Hard delete, returns affected row count
    async fn delete_item(&self, id: ItemId) -> Result<u64>;
}
