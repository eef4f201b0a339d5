// Aggregated views over shopping_list

use serde::{Deserialize, Serialize};

/// Sum of `price` for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    /// Two-decimal string, e.g. "11.17"
    #[serde(rename = "total price")]
    pub total_price: String,
}
