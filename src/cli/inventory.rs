use anyhow::Result;
use chrono::{Local, NaiveDate, Utc};
use clap::{Subcommand, ValueEnum};
use freshbite::config::Config;
use freshbite_inventory::{
    Inventory, InventoryQuery, NewFoodItem, days_remaining, expiry_status, format_expiry_message,
};
use freshbite_shared::inventory::FoodItem;
use freshbite_shared::{Category, StorageLocation};

use super::{parse_category, parse_storage};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExpiryFilter {
    Expiring,
    Fresh,
}

impl From<ExpiryFilter> for freshbite_inventory::ExpiryFilter {
    fn from(value: ExpiryFilter) -> Self {
        match value {
            ExpiryFilter::Expiring => Self::Expiring,
            ExpiryFilter::Fresh => Self::Fresh,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortBy {
    Expiry,
    Added,
    Name,
    Category,
}

impl From<SortBy> for freshbite_inventory::SortBy {
    fn from(value: SortBy) -> Self {
        match value {
            SortBy::Expiry => Self::Expiry,
            SortBy::Added => Self::DateAdded,
            SortBy::Name => Self::Name,
            SortBy::Category => Self::Category,
        }
    }
}

#[derive(Subcommand)]
pub enum InventoryCommand {
    /// Add a food item, category and storage are suggested when omitted
    Add {
        name: String,
        #[arg(long, short)]
        quantity: String,
        /// Expiry date (YYYY-MM-DD)
        #[arg(long, short)]
        expires: NaiveDate,
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
        #[arg(long, value_parser = parse_storage)]
        storage: Option<StorageLocation>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List items
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
        #[arg(long, value_parser = parse_storage)]
        storage: Option<StorageLocation>,
        #[arg(long, value_enum)]
        expiry: Option<ExpiryFilter>,
        #[arg(long, value_enum, default_value = "expiry")]
        sort: SortBy,
    },
    /// Remove an item without logging it as consumed
    Remove { id: String },
    /// Mark an item as eaten and put it back on the shopping list
    Consume { id: String },
    /// Summary of what needs eating soon
    Dashboard,
}

pub fn run(config: Config, command: InventoryCommand) -> Result<()> {
    let mut inventory = Inventory::new(freshbite::open_store(&config));
    let today = Local::now().date_naive();

    match command {
        InventoryCommand::Add {
            name,
            quantity,
            expires,
            category,
            storage,
            notes,
        } => {
            let item = inventory.add(NewFoodItem {
                name,
                quantity,
                expiry_date: expires,
                category,
                storage,
                notes,
            })?;
            print_item(&item, today);
        }
        InventoryCommand::List {
            search,
            category,
            storage,
            expiry,
            sort,
        } => {
            let query = InventoryQuery {
                search,
                category,
                storage,
                expiry: expiry.map(Into::into),
                sort_by: sort.into(),
            };
            for item in inventory.list(&query, today)? {
                print_item(&item, today);
            }
        }
        InventoryCommand::Remove { id } => {
            let item = inventory.remove(&id)?;
            println!("removed {}", item.name);
        }
        InventoryCommand::Consume { id } => {
            let consumed = inventory.consume(&id)?;
            println!("consumed {}, added to shopping list", consumed.item_name);
        }
        InventoryCommand::Dashboard => {
            let dashboard = inventory.dashboard(today, Utc::now())?;
            println!("Total items:          {}", dashboard.total_items);
            println!("Expiring in 3 days:   {}", dashboard.expiring_in_3_days);
            println!("Expiring in 7 days:   {}", dashboard.expiring_in_7_days);
            println!("Consumed this week:   {}", dashboard.consumed_this_week);
            if !dashboard.expiring_soon.is_empty() {
                println!();
                println!("Expiring soon:");
                for item in &dashboard.expiring_soon {
                    print_item(item, today);
                }
            }
        }
    }

    Ok(())
}

fn print_item(item: &FoodItem, today: NaiveDate) {
    let days = days_remaining(item.expiry_date, today);
    println!(
        "{}  {} ({})  {} / {}  {} [{}]",
        item.id,
        item.name,
        item.quantity,
        item.category,
        item.storage,
        format_expiry_message(days),
        expiry_status(item.expiry_date, today),
    );
}
