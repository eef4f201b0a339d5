// Port Layer - Interfaces for external dependencies

pub mod item_queries;
pub mod shopping_list_repository;
pub mod time_provider; // For deterministic testing

// Re-exports
pub use item_queries::ItemQueries;
pub use shopping_list_repository::ShoppingListRepository;
pub use time_provider::TimeProvider;
