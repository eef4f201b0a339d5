// In-memory port implementations for use case tests

use crate::domain::money::format_cents;
use crate::domain::{
    CategoryTotal, ItemId, ItemUpdate, NewItem, Page, ShoppingListItem,
};
use crate::error::{AppError, Result};
use crate::port::{ItemQueries, ShoppingListRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryStore {
    rows: Mutex<Vec<ShoppingListItem>>,
    statements: AtomicUsize,
}

impl InMemoryStore {
    /// Number of port calls served so far
    pub fn statements(&self) -> usize {
        self.statements.load(Ordering::SeqCst)
    }

    fn rows(&self) -> std::sync::MutexGuard<'_, Vec<ShoppingListItem>> {
        self.statements.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().expect("fake store poisoned")
    }
}

fn price_cents(price: &str) -> Result<i64> {
    let (whole, frac) = price.split_once('.').unwrap_or((price, "0"));
    let frac = format!("{:0<2}", frac);
    let whole: i64 = whole
        .parse()
        .map_err(|_| AppError::Database(format!("bad price {}", price)))?;
    let frac: i64 = frac[..2]
        .parse()
        .map_err(|_| AppError::Database(format!("bad price {}", price)))?;
    Ok(whole * 100 + frac)
}

#[async_trait]
impl ShoppingListRepository for InMemoryStore {
    async fn get_all_items(&self) -> Result<Vec<ShoppingListItem>> {
        Ok(self.rows().clone())
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Option<ShoppingListItem>> {
        Ok(self.rows().iter().find(|row| row.id == id).cloned())
    }

    async fn insert_item(&self, item: &NewItem) -> Result<ShoppingListItem> {
        let mut rows = self.rows();
        let next_id = rows.iter().map(|row| row.id.0).max().unwrap_or(0) + 1;
        let stored = ShoppingListItem {
            id: ItemId(next_id),
            name: item.name.clone(),
            price: item.price.clone(),
            date_added: item.date_added.unwrap_or_else(Utc::now),
            checked: item.checked,
            category: item.category.clone(),
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn update_item(&self, id: ItemId, fields: &ItemUpdate) -> Result<u64> {
        let mut rows = self.rows();
        match rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                fields.apply_to(row);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_item(&self, id: ItemId) -> Result<u64> {
        let mut rows = self.rows();
        let before = rows.len();
        rows.retain(|row| row.id != id);
        Ok((before - rows.len()) as u64)
    }
}

#[async_trait]
impl ItemQueries for InMemoryStore {
    async fn search_by_name(&self, term: &str) -> Result<Vec<ShoppingListItem>> {
        let needle = term.to_lowercase();
        Ok(self
            .rows()
            .iter()
            .filter(|row| row.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn page(&self, page: Page) -> Result<Vec<ShoppingListItem>> {
        Ok(self
            .rows()
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn added_after(&self, cutoff: DateTime<Utc>) -> Result<Vec<ShoppingListItem>> {
        Ok(self
            .rows()
            .iter()
            .filter(|row| row.date_added > cutoff)
            .cloned()
            .collect())
    }

    async fn totals_by_category(&self) -> Result<Vec<CategoryTotal>> {
        let mut sums: BTreeMap<String, i64> = BTreeMap::new();
        for row in self.rows().iter() {
            *sums.entry(row.category.clone()).or_default() += price_cents(&row.price)?;
        }
        Ok(sums
            .into_iter()
            .map(|(category, cents)| CategoryTotal {
                category,
                total_price: format_cents(cents),
            })
            .collect())
    }
}
