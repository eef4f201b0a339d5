// Shoplist Core - Domain Model, Ports & Use Cases
// NO infrastructure dependencies (the SQLite adapter lives in shoplist-infra-sqlite)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};
