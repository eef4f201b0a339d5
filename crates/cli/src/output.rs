//! Rendering of rows and totals for the terminal

use anyhow::Result;
use shoplist_core::domain::{CategoryTotal, ShoppingListItem};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ItemDisplay {
    id: i64,
    name: String,
    price: String,
    #[tabled(rename = "date added")]
    date_added: String,
    checked: &'static str,
    category: String,
}

impl From<&ShoppingListItem> for ItemDisplay {
    fn from(item: &ShoppingListItem) -> Self {
        Self {
            id: item.id.value(),
            name: item.name.clone(),
            price: item.price.clone(),
            date_added: item.date_added.format("%Y-%m-%d %H:%M:%S").to_string(),
            checked: if item.checked { "✓" } else { "" },
            category: item.category.clone(),
        }
    }
}

#[derive(Tabled)]
struct TotalDisplay {
    category: String,
    #[tabled(rename = "total price")]
    total_price: String,
}

pub fn print_items(items: &[ShoppingListItem], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        let rows: Vec<ItemDisplay> = items.iter().map(ItemDisplay::from).collect();
        println!("{}", Table::new(rows));
    }
    Ok(())
}

pub fn print_totals(totals: &[CategoryTotal], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(totals)?);
    } else {
        let rows: Vec<TotalDisplay> = totals
            .iter()
            .map(|t| TotalDisplay {
                category: t.category.clone(),
                total_price: t.total_price.clone(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }
    Ok(())
}
