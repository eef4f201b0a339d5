// Shopping List Item Domain Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-generated primary key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl ItemId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One persisted row of `shopping_list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: ItemId,
    pub name: String,
    /// Decimal amount kept in its textual form, e.g. "1.40"
    pub price: String,
    pub date_added: DateTime<Utc>,
    pub checked: bool,
    pub category: String,
}

/// Fields for a row that does not exist yet (the store assigns `id`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub price: String,

    /// `None` lets the store default to the insertion time
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,

    #[serde(default)]
    pub checked: bool,

    pub category: String,
}

impl NewItem {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            date_added: None,
            checked: false,
            category: category.into(),
        }
    }

    pub fn with_date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = Some(date_added);
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// Partial update: `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ItemUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn date_added(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = Some(date_added);
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// True when no field would be written
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.date_added.is_none()
            && self.checked.is_none()
            && self.category.is_none()
    }

    /// Apply this update to an in-memory row (used by fakes and callers that
    /// want the merged view without re-reading)
    pub fn apply_to(&self, item: &mut ShoppingListItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(price) = &self.price {
            item.price = price.clone();
        }
        if let Some(date_added) = self.date_added {
            item.date_added = date_added;
        }
        if let Some(checked) = self.checked {
            item.checked = checked;
        }
        if let Some(category) = &self.category {
            item.category = category.clone();
        }
    }
}
