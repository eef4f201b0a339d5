//! Shoplist CLI - one-shot access to the shopping_list store
//!
//! Every subcommand opens the store, issues its statement(s), prints the
//! result and closes the store again.

mod logging;
mod output;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use shoplist_core::application::{ItemQueryService, ShoppingListService};
use shoplist_core::domain::{ItemId, ItemUpdate, NewItem};
use shoplist_core::port::time_provider::SystemTimeProvider;
use shoplist_infra_sqlite::{
    bootstrap_schema, Database, DatabaseConfig, SqliteItemQueries, SqlitePool,
    SqliteShoppingListRepository,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_DB_URL: &str = "sqlite://shopping_list.db";

#[derive(Parser)]
#[command(name = "shoplist")]
#[command(about = "Shopping list store CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Database connection string
    #[arg(long, env = "SHOPLIST_DB_URL", default_value = DEFAULT_DB_URL)]
    database_url: String,

    /// Upper bound on pooled connections
    #[arg(long, env = "SHOPLIST_DB_MAX_CONNECTIONS", default_value = "10")]
    max_connections: u32,

    /// Seconds to wait on a locked database before failing
    #[arg(long, env = "SHOPLIST_DB_BUSY_TIMEOUT", default_value = "5")]
    busy_timeout: u64,

    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the shopping_list table if it is missing
    Init,

    /// List every item
    List,

    /// Show one item
    Get {
        /// Item ID
        id: i64,
    },

    /// Add an item
    Add {
        #[arg(short, long)]
        name: String,

        /// Decimal amount, e.g. 3.50
        #[arg(short, long)]
        price: String,

        #[arg(short, long)]
        category: String,

        /// Mark the item as already checked off
        #[arg(long)]
        checked: bool,

        /// RFC 3339 timestamp (default: now)
        #[arg(long)]
        date_added: Option<DateTime<Utc>>,
    },

    /// Change some fields of an item
    Update {
        /// Item ID
        id: i64,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        price: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(long)]
        checked: Option<bool>,

        #[arg(long)]
        date_added: Option<DateTime<Utc>>,
    },

    /// Delete an item
    Delete {
        /// Item ID
        id: i64,
    },

    /// Find items whose name contains a term (case-insensitive)
    Search {
        term: String,
    },

    /// Show one page of six items
    Page {
        /// 1-based page number
        number: u32,
    },

    /// Show items added in the last N days
    Recent {
        #[arg(short, long, default_value = "7")]
        days: u32,
    },

    /// Sum prices per category
    Totals,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init_logging()?;

    info!("shoplist v{}", VERSION);

    let config = DatabaseConfig::new(&cli.database_url)
        .with_max_connections(cli.max_connections)
        .with_busy_timeout(Duration::from_secs(cli.busy_timeout));
    let database = Database::connect(&config)
        .await
        .with_context(|| format!("Failed to open database {}", cli.database_url))?;

    let outcome = run(cli.command, database.pool().clone(), cli.json).await;
    database.close().await;

    outcome
}

async fn run(command: Commands, pool: SqlitePool, json: bool) -> Result<()> {
    let items = ShoppingListService::new(Arc::new(SqliteShoppingListRepository::new(
        pool.clone(),
    )));
    let queries = ItemQueryService::new(
        Arc::new(SqliteItemQueries::new(pool.clone())),
        Arc::new(SystemTimeProvider),
    );

    match command {
        Commands::Init => {
            bootstrap_schema(&pool).await?;
            println!("{}", "✓ shopping_list table ready".green().bold());
        }

        Commands::List => {
            let all = items.get_all_items().await?;
            output::print_items(&all, json)?;
        }

        Commands::Get { id } => match items.get_by_id(ItemId(id)).await? {
            Some(item) => output::print_items(&[item], json)?,
            None => println!("{}", format!("No item with id {}", id).yellow()),
        },

        Commands::Add {
            name,
            price,
            category,
            checked,
            date_added,
        } => {
            let mut new_item = NewItem::new(name, price, category).with_checked(checked);
            new_item.date_added = date_added;

            let stored = items.insert_item(&new_item).await?;
            if !json {
                println!("{}", format!("✓ Item {} added", stored.id).green().bold());
                println!();
            }
            output::print_items(&[stored], json)?;
        }

        Commands::Update {
            id,
            name,
            price,
            category,
            checked,
            date_added,
        } => {
            let fields = ItemUpdate {
                name,
                price,
                date_added,
                checked,
                category,
            };
            let affected = items.update_item(ItemId(id), &fields).await?;
            report_affected("updated", id, affected, json);
        }

        Commands::Delete { id } => {
            let affected = items.delete_item(ItemId(id)).await?;
            report_affected("deleted", id, affected, json);
        }

        Commands::Search { term } => {
            let found = queries.search_by_name(&term).await?;
            output::print_items(&found, json)?;
        }

        Commands::Page { number } => {
            let page = queries.page(number).await?;
            output::print_items(&page, json)?;
        }

        Commands::Recent { days } => {
            let recent = queries.added_within_days(days).await?;
            output::print_items(&recent, json)?;
        }

        Commands::Totals => {
            let totals = queries.totals_by_category().await?;
            output::print_totals(&totals, json)?;
        }
    }

    Ok(())
}

fn report_affected(verb: &str, id: i64, affected: u64, json: bool) {
    if json {
        println!("{}", json!({ "id": id, "affected": affected }));
    } else if affected == 0 {
        println!("{}", format!("No item with id {}", id).yellow());
    } else {
        println!("{}", format!("✓ Item {} {}", id, verb).green().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_partial_update() {
        let cli = Cli::try_parse_from([
            "shoplist",
            "--database-url",
            "sqlite::memory:",
            "update",
            "3",
            "--price",
            "1.25",
            "--checked",
            "true",
        ])
        .unwrap();

        match cli.command {
            Commands::Update {
                id,
                name,
                price,
                checked,
                ..
            } => {
                assert_eq!(id, 3);
                assert!(name.is_none());
                assert_eq!(price.as_deref(), Some("1.25"));
                assert_eq!(checked, Some(true));
            }
            _ => panic!("expected update"),
        }
    }

    #[test]
    fn test_busy_timeout_flag() {
        let cli =
            Cli::try_parse_from(["shoplist", "--busy-timeout", "30", "list"]).unwrap();
        assert_eq!(cli.busy_timeout, 30);
    }

    #[test]
    fn test_recent_defaults_to_seven_days() {
        let cli = Cli::try_parse_from(["shoplist", "recent", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Recent { days: 7 }));
    }
}
