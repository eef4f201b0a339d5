// SQLite ShoppingListRepository Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shoplist_core::domain::{ItemId, ItemUpdate, NewItem, ShoppingListItem};
use shoplist_core::error::{AppError, Result};
use shoplist_core::port::ShoppingListRepository;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Repository over a caller-owned pool. Never opens or closes the pool.
pub struct SqliteShoppingListRepository {
    pool: SqlitePool,
}

impl SqliteShoppingListRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShoppingListRepository for SqliteShoppingListRepository {
    async fn get_all_items(&self) -> Result<Vec<ShoppingListItem>> {
        let rows: Vec<ItemRow> = sqlx::query_as(
            r#"
            SELECT id, name, price, date_added, checked, category
            FROM shopping_list
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(ItemRow::into_item).collect()
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Option<ShoppingListItem>> {
        let row = sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, price, date_added, checked, category FROM shopping_list WHERE id = ?",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(ItemRow::into_item).transpose()
    }

    async fn insert_item(&self, item: &NewItem) -> Result<ShoppingListItem> {
        // COALESCE mirrors the column default so a NULL bind still gets "now"
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO shopping_list (name, price, date_added, checked, category)
            VALUES (
                ?, ?,
                COALESCE(?, CAST((julianday('now') - 2440587.5) * 86400000 AS INTEGER)),
                ?, ?
            )
            RETURNING id, name, price, date_added, checked, category
            "#,
        )
        .bind(&item.name)
        .bind(&item.price)
        .bind(item.date_added.map(|d| d.timestamp_millis()))
        .bind(item.checked)
        .bind(&item.category)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.into_item()
    }

    async fn update_item(&self, id: ItemId, fields: &ItemUpdate) -> Result<u64> {
        if fields.is_empty() {
            return Err(AppError::Validation(
                "Update requires at least one field".to_string(),
            ));
        }

        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE shopping_list SET ");
        let mut assignments = builder.separated(", ");

        if let Some(name) = &fields.name {
            assignments.push("name = ");
            assignments.push_bind_unseparated(name.clone());
        }
        if let Some(price) = &fields.price {
            assignments.push("price = ");
            assignments.push_bind_unseparated(price.clone());
        }
        if let Some(date_added) = fields.date_added {
            assignments.push("date_added = ");
            assignments.push_bind_unseparated(date_added.timestamp_millis());
        }
        if let Some(checked) = fields.checked {
            assignments.push("checked = ");
            assignments.push_bind_unseparated(checked);
        }
        if let Some(category) = &fields.category {
            assignments.push("category = ");
            assignments.push_bind_unseparated(category.clone());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id.value());

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete_item(&self, id: ItemId) -> Result<u64> {
        let result = sqlx::query("DELETE FROM shopping_list WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ItemRow {
    id: i64,
    name: String,
    price: String,
    date_added: i64, // epoch millis
    checked: bool,
    category: String,
}

impl ItemRow {
    pub(crate) fn into_item(self) -> Result<ShoppingListItem> {
        let date_added =
            DateTime::<Utc>::from_timestamp_millis(self.date_added).ok_or_else(|| {
                AppError::Database(format!(
                    "date_added out of range for item {}: {}",
                    self.id, self.date_added
                ))
            })?;

        Ok(ShoppingListItem {
            id: ItemId(self.id),
            name: self.name,
            price: self.price,
            date_added,
            checked: self.checked,
            category: self.category,
        })
    }
}
