// sqlx::Error -> AppError
//
// Lives here because of the orphan rule: core cannot depend on sqlx, so
// From<sqlx::Error> for AppError cannot be implemented in either crate.

use shoplist_core::error::AppError;

/// Convert a driver error into `AppError::Database`, keeping the driver's
/// message and SQLite result code intact
pub fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.code() {
            // SQLite error codes: https://www.sqlite.org/rescode.html
            Some(code) => {
                let code_str = code.as_ref();
                let kind = match code_str {
                    "2067" | "1555" => "Unique constraint violation",
                    "1299" => "NOT NULL constraint violation",
                    "275" => "CHECK constraint violation",
                    "5" => "Database locked (SQLITE_BUSY)",
                    "13" => "Database full",
                    _ => "Database error",
                };
                AppError::Database(format!("{}: {} ({})", kind, db_err.message(), code_str))
            }
            None => AppError::Database(db_err.message().to_string()),
        },
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Database(format!("Column not found: {}", col))
        }
        // Connection, pool, protocol errors
        _ => AppError::Database(err.to_string()),
    }
}
