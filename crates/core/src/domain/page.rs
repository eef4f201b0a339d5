// Fixed-size pagination

use crate::error::{AppError, Result};

/// Rows per page
pub const PAGE_SIZE: i64 = 6;

/// A 1-based page number, translated into LIMIT/OFFSET values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: u32,
}

impl Page {
    pub fn new(number: u32) -> Result<Self> {
        if number == 0 {
            return Err(AppError::Validation(
                "Page numbers start at 1".to_string(),
            ));
        }
        Ok(Self { number })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }

    pub fn offset(&self) -> i64 {
        PAGE_SIZE * (i64::from(self.number) - 1)
    }
}
