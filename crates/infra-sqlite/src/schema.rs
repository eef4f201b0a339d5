// Schema Bootstrap
//
// Idempotent DDL only. There is no version tracking: the table is owned by
// whoever operates the store, this just makes a local SQLite file usable.

use crate::error::map_sqlx_error;
use shoplist_core::error::Result;
use sqlx::SqlitePool;
use tracing::info;

const SHOPPING_LIST_DDL: &str = include_str!("../sql/shopping_list.sql");

/// Create `shopping_list` and its indexes if they are missing
pub async fn bootstrap_schema(pool: &SqlitePool) -> Result<()> {
    info!("Ensuring shopping_list schema exists");

    let mut tx = pool.begin().await.map_err(map_sqlx_error)?;

    for statement in split_statements(SHOPPING_LIST_DDL) {
        sqlx::query(&statement)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
    }

    tx.commit().await.map_err(map_sqlx_error)?;
    Ok(())
}

/// Remove every row and restart id generation at 1
pub async fn truncate_shopping_list(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await.map_err(map_sqlx_error)?;

    sqlx::query("DELETE FROM shopping_list")
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

    // AUTOINCREMENT counters live in sqlite_sequence
    sqlx::query("DELETE FROM sqlite_sequence WHERE name = 'shopping_list'")
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

    tx.commit().await.map_err(map_sqlx_error)?;
    Ok(())
}

/// Split a script on `;`, dropping `--` comment lines and empty statements
fn split_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|statement| {
            statement
                .lines()
                .filter(|line| !line.trim().starts_with("--"))
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string()
        })
        .filter(|statement| !statement.is_empty())
        .collect()
}
