use anyhow::Result;
use clap::Subcommand;
use freshbite::config::Config;
use freshbite_shared::Category;
use freshbite_shared::shopping::ShoppingListItem;
use freshbite_shopping::{AddShoppingItem, ShoppingList};

use super::parse_category;

#[derive(Subcommand)]
pub enum ShoppingCommand {
    /// Add an item, the category is detected from the name when omitted
    Add {
        #[arg(required = true)]
        name: Vec<String>,
        #[arg(long, short)]
        quantity: Option<String>,
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
    },
    /// List items grouped by category
    List,
    /// Mark an item as bought
    Check { id: String },
    /// Mark an item as still needed
    Uncheck { id: String },
    Remove { id: String },
    /// Remove every bought item
    Clear,
    /// Print the pending items as plain text
    Share,
}

pub fn run(config: Config, command: ShoppingCommand) -> Result<()> {
    let mut list = ShoppingList::new(freshbite::open_store(&config));

    match command {
        ShoppingCommand::Add {
            name,
            quantity,
            category,
        } => {
            let item = list.add(AddShoppingItem {
                name: name.join(" "),
                category,
                quantity,
            })?;
            print_item(&item);
        }
        ShoppingCommand::List => {
            for (category, items) in list.grouped()? {
                println!("{category}");
                for item in &items {
                    print_item(item);
                }
            }
        }
        ShoppingCommand::Check { id } => print_item(&list.set_completed(&id, true)?),
        ShoppingCommand::Uncheck { id } => print_item(&list.set_completed(&id, false)?),
        ShoppingCommand::Remove { id } => {
            let item = list.remove(&id)?;
            println!("removed {}", item.name);
        }
        ShoppingCommand::Clear => {
            let removed = list.clear_completed()?;
            println!("removed {removed} completed items");
        }
        ShoppingCommand::Share => println!("{}", list.share_text()?),
    }

    Ok(())
}

fn print_item(item: &ShoppingListItem) {
    let mark = if item.is_completed { "x" } else { " " };
    println!(
        "  [{mark}] {}  {} ({}) {}",
        item.id, item.name, item.quantity, item.source
    );
}
