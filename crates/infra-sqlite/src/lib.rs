// Shoplist Infrastructure - SQLite Adapter
// Implements: ShoppingListRepository, ItemQueries

mod connection;
mod error;
mod item_queries;
mod schema;
mod shopping_list_repository;

pub use connection::{create_pool, with_database, Database, DatabaseConfig};
pub use error::map_sqlx_error;
pub use item_queries::SqliteItemQueries;
pub use schema::{bootstrap_schema, truncate_shopping_list};
pub use shopping_list_repository::SqliteShoppingListRepository;

// Re-export the handle type so callers need not depend on sqlx directly
pub use sqlx::SqlitePool;
