// Item Query Service - one-shot read queries

use crate::domain::{CategoryTotal, Page, ShoppingListItem};
use crate::error::Result;
use crate::port::{ItemQueries, TimeProvider};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tracing::debug;

pub struct ItemQueryService {
    queries: Arc<dyn ItemQueries>,
    time_provider: Arc<dyn TimeProvider>,
}

impl ItemQueryService {
    pub fn new(queries: Arc<dyn ItemQueries>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            queries,
            time_provider,
        }
    }

    pub async fn search_by_name(&self, term: &str) -> Result<Vec<ShoppingListItem>> {
        let items = self.queries.search_by_name(term).await?;
        debug!(term, count = items.len(), "Searched items by name");
        Ok(items)
    }

    /// Rows on the given 1-based page
    pub async fn page(&self, page_number: u32) -> Result<Vec<ShoppingListItem>> {
        let page = Page::new(page_number)?;
        let items = self.queries.page(page).await?;
        debug!(
            page = page_number,
            offset = page.offset(),
            count = items.len(),
            "Loaded page"
        );
        Ok(items)
    }

    /// Rows added during the last `days` days. A window reaching past the
    /// earliest representable date covers every row.
    pub async fn added_within_days(&self, days: u32) -> Result<Vec<ShoppingListItem>> {
        let cutoff = self
            .time_provider
            .now()
            .checked_sub_signed(Duration::days(i64::from(days)))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let items = self.queries.added_after(cutoff).await?;
        debug!(days, cutoff = %cutoff, count = items.len(), "Loaded recent items");
        Ok(items)
    }

    pub async fn totals_by_category(&self) -> Result<Vec<CategoryTotal>> {
        let totals = self.queries.totals_by_category().await?;
        debug!(groups = totals.len(), "Aggregated totals by category");
        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fakes::InMemoryStore;
    use crate::domain::NewItem;
    use crate::error::AppError;
    use crate::port::time_provider::FixedTimeProvider;
    use crate::port::ShoppingListRepository;
    use chrono::{TimeZone, Utc};

    async fn seeded() -> ItemQueryService {
        let store = Arc::new(InMemoryStore::default());
        let items = [
            ("Pepperphony", "1.40", "Breakfast", (2100, 5, 22)),
            ("Shamburger", "3.50", "Main", (2024, 6, 10)),
            ("Facon", "1.90", "Breakfast", (1993, 6, 23)),
            ("Salami-get-this-straight", "3.00", "Snack", (2024, 6, 14)),
            ("Mi-steak", "7.67", "Main", (1932, 1, 1)),
        ];
        for (name, price, category, (y, m, d)) in items {
            let when = Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
            store
                .insert_item(&NewItem::new(name, price, category).with_date_added(when))
                .await
                .unwrap();
        }

        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        ItemQueryService::new(store, Arc::new(FixedTimeProvider(now)))
    }

    #[tokio::test]
    async fn test_added_within_days_uses_injected_clock() {
        let service = seeded().await;
        let names: Vec<String> = service
            .added_within_days(7)
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();

        assert_eq!(names, vec!["Pepperphony", "Shamburger", "Salami-get-this-straight"]);
    }

    #[tokio::test]
    async fn test_added_within_days_beyond_min_date_returns_all() {
        let service = seeded().await;
        let items = service.added_within_days(200_000_000).await.unwrap();
        assert_eq!(items.len(), 5);

        let items = service.added_within_days(u32::MAX).await.unwrap();
        assert_eq!(items.len(), 5);
    }

    #[tokio::test]
    async fn test_page_zero_is_rejected() {
        let service = seeded().await;
        let result = service.page(0).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_first_page_holds_all_five() {
        let service = seeded().await;
        assert_eq!(service.page(1).await.unwrap().len(), 5);
        assert!(service.page(2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_totals_by_category() {
        let service = seeded().await;
        let totals = service.totals_by_category().await.unwrap();
        let main = totals.iter().find(|t| t.category == "Main").unwrap();
        assert_eq!(main.total_price, "11.17");
        assert_eq!(totals.len(), 3);
    }
}
