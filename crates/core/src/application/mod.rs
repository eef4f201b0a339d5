// Application Layer - Use Cases

pub mod item_queries;
pub mod shopping_list;

#[cfg(test)]
pub(crate) mod fakes;

// Re-exports
pub use item_queries::ItemQueryService;
pub use shopping_list::ShoppingListService;
