// Item Queries Port (read-only lookups over shopping_list)

use crate::domain::{CategoryTotal, Page, ShoppingListItem};
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ItemQueries: Send + Sync {
    /// Case-insensitive substring match on `name`, no limit
    async fn search_by_name(&self, term: &str) -> Result<Vec<ShoppingListItem>>;

    /// One fixed-size page of rows
    async fn page(&self, page: Page) -> Result<Vec<ShoppingListItem>>;

    /// Rows whose `date_added` is strictly after `cutoff`
    async fn added_after(&self, cutoff: DateTime<Utc>) -> Result<Vec<ShoppingListItem>>;

    /// Sum of `price` grouped by `category`
    async fn totals_by_category(&self) -> Result<Vec<CategoryTotal>>;
}
