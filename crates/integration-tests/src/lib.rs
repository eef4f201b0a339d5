//! Shared fixtures for the integration suites

use chrono::{DateTime, Utc};
use shoplist_core::domain::{ItemId, ShoppingListItem};
use shoplist_infra_sqlite::{bootstrap_schema, create_pool, DatabaseConfig, SqlitePool};

/// Fresh in-memory store with the table in place
pub async fn test_pool() -> SqlitePool {
    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    bootstrap_schema(&pool).await.unwrap();
    pool
}

fn at(timestamp: &str) -> DateTime<Utc> {
    timestamp.parse().unwrap()
}

fn item(
    id: i64,
    name: &str,
    price: &str,
    date_added: &str,
    category: &str,
) -> ShoppingListItem {
    ShoppingListItem {
        id: ItemId(id),
        name: name.to_string(),
        price: price.to_string(),
        date_added: at(date_added),
        checked: false,
        category: category.to_string(),
    }
}

/// Five rows with fixed ids 1..=5
pub fn test_shopping_list() -> Vec<ShoppingListItem> {
    vec![
        item(1, "Pepperphony", "1.40", "2100-05-22T16:28:32.615Z", "Breakfast"),
        item(2, "Shamburger", "3.50", "1985-12-02T16:28:32.615Z", "Main"),
        item(3, "Facon", "1.90", "1993-06-23T16:28:32.615Z", "Breakfast"),
        item(4, "Salami-get-this-straight", "3.00", "1970-08-12T16:28:32.615Z", "Snack"),
        item(5, "Mi-steak", "7.67", "1932-01-01T16:28:32.615Z", "Main"),
    ]
}

/// Write rows directly, keeping their ids
pub async fn seed(pool: &SqlitePool, items: &[ShoppingListItem]) {
    for item in items {
        sqlx::query(
            r#"
            INSERT INTO shopping_list (id, name, price, date_added, checked, category)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(item.id.value())
        .bind(&item.name)
        .bind(&item.price)
        .bind(item.date_added.timestamp_millis())
        .bind(item.checked)
        .bind(&item.category)
        .execute(pool)
        .await
        .unwrap();
    }
}
