// Domain Layer - Entities and value types

pub mod item;
pub mod money;
pub mod page;
pub mod report;

// Re-exports
pub use item::{ItemId, ItemUpdate, NewItem, ShoppingListItem};
pub use page::{Page, PAGE_SIZE};
pub use report::CategoryTotal;
