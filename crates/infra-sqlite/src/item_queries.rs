// SQLite ItemQueries Implementation

use crate::error::map_sqlx_error;
use crate::shopping_list_repository::ItemRow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shoplist_core::domain::money::format_cents;
use shoplist_core::domain::{CategoryTotal, Page, ShoppingListItem};
use shoplist_core::error::Result;
use shoplist_core::port::ItemQueries;
use sqlx::SqlitePool;

pub struct SqliteItemQueries {
    pool: SqlitePool,
}

impl SqliteItemQueries {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// `%term%` with LIKE wildcards in `term` escaped by `\`
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl ItemQueries for SqliteItemQueries {
    async fn search_by_name(&self, term: &str) -> Result<Vec<ShoppingListItem>> {
        // SQLite LIKE is case-insensitive for ASCII
        let rows: Vec<ItemRow> = sqlx::query_as(
            r#"
            SELECT id, name, price, date_added, checked, category
            FROM shopping_list
            WHERE name LIKE ? ESCAPE '\'
            ORDER BY id ASC
            "#,
        )
        .bind(contains_pattern(term))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(ItemRow::into_item).collect()
    }

    async fn page(&self, page: Page) -> Result<Vec<ShoppingListItem>> {
        let rows: Vec<ItemRow> = sqlx::query_as(
            r#"
            SELECT id, name, price, date_added, checked, category
            FROM shopping_list
            ORDER BY id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(ItemRow::into_item).collect()
    }

    async fn added_after(&self, cutoff: DateTime<Utc>) -> Result<Vec<ShoppingListItem>> {
        let rows: Vec<ItemRow> = sqlx::query_as(
            r#"
            SELECT id, name, price, date_added, checked, category
            FROM shopping_list
            WHERE date_added > ?
            ORDER BY id ASC
            "#,
        )
        .bind(cutoff.timestamp_millis())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(ItemRow::into_item).collect()
    }

    async fn totals_by_category(&self) -> Result<Vec<CategoryTotal>> {
        // Summed in integer cents so "3.50" + "7.67" is exactly 11.17
        let rows: Vec<TotalRow> = sqlx::query_as(
            r#"
            SELECT category,
                   SUM(CAST(ROUND(CAST(price AS REAL) * 100) AS INTEGER)) AS total_cents
            FROM shopping_list
            GROUP BY category
            ORDER BY category ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows
            .into_iter()
            .map(|row| CategoryTotal {
                category: row.category,
                total_price: format_cents(row.total_cents),
            })
            .collect())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TotalRow {
    category: String,
    total_cents: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bootstrap_schema, create_pool, DatabaseConfig, SqliteShoppingListRepository};
    use chrono::TimeZone;
    use shoplist_core::domain::NewItem;
    use shoplist_core::port::ShoppingListRepository;

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("lettuce"), "%lettuce%");
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }

    async fn seeded(names: &[&str]) -> SqliteItemQueries {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        bootstrap_schema(&pool).await.unwrap();
        let repo = SqliteShoppingListRepository::new(pool.clone());
        let when = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        for name in names {
            repo.insert_item(&NewItem::new(*name, "1.00", "Snack").with_date_added(when))
                .await
                .unwrap();
        }
        SqliteItemQueries::new(pool)
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let queries = seeded(&["Romaine Lettuce", "lettuce wrap", "Tomato"]).await;
        let found = queries.search_by_name("LETTUCE").await.unwrap();
        let names: Vec<_> = found.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Romaine Lettuce", "lettuce wrap"]);
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let queries = seeded(&["100% juice", "1000 juice"]).await;
        let found = queries.search_by_name("0%").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "100% juice");
    }

    #[tokio::test]
    async fn test_page_offsets() {
        let names: Vec<String> = (1..=14).map(|i| format!("item {}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let queries = seeded(&refs).await;

        let second = queries.page(Page::new(2).unwrap()).await.unwrap();
        assert_eq!(second.len(), 6);
        assert_eq!(second[0].name, "item 7");

        let third = queries.page(Page::new(3).unwrap()).await.unwrap();
        assert_eq!(third.len(), 2);

        assert!(queries.page(Page::new(4).unwrap()).await.unwrap().is_empty());
    }
}
