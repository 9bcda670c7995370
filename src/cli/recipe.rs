use anyhow::Result;
use chrono::Local;
use clap::Subcommand;
use freshbite::config::Config;
use freshbite_inventory::{IngredientAvailability, Inventory};
use freshbite_shared::recipe::RecipeIngredient;

#[derive(Subcommand)]
pub enum RecipeCommand {
    /// Show which ingredients are in stock
    Check {
        /// Ingredient as NAME[:QUANTITY[:UNIT]], e.g. paneer:200:g
        #[arg(required = true, value_parser = parse_ingredient)]
        ingredients: Vec<RecipeIngredient>,
    },
    /// Use up matching inventory items, logging them as consumed
    Cook {
        #[arg(required = true, value_parser = parse_ingredient)]
        ingredients: Vec<RecipeIngredient>,
    },
    /// Put ingredients that are not in stock on the shopping list
    Shop {
        #[arg(required = true, value_parser = parse_ingredient)]
        ingredients: Vec<RecipeIngredient>,
    },
}

pub fn run(config: Config, command: RecipeCommand) -> Result<()> {
    let mut inventory = Inventory::new(freshbite::open_store(&config));

    match command {
        RecipeCommand::Check { ingredients } => {
            let today = Local::now().date_naive();
            for ingredient in &ingredients {
                let status = match inventory.ingredient_availability(ingredient, today)? {
                    IngredientAvailability::Available => "available",
                    IngredientAvailability::Expiring => "expiring",
                    IngredientAvailability::Missing => "missing",
                };
                println!("{}\t{status}", ingredient.name);
            }
        }
        RecipeCommand::Cook { ingredients } => {
            for consumed in inventory.consume_ingredients(&ingredients)? {
                println!("used {} ({})", consumed.item_name, consumed.quantity);
            }
        }
        RecipeCommand::Shop { ingredients } => {
            let added = inventory.add_missing_to_shopping(&ingredients)?;
            if added == 0 {
                println!("all ingredients are available");
            } else {
                println!("{added} items added to shopping list");
            }
        }
    }

    Ok(())
}

pub fn parse_ingredient(value: &str) -> Result<RecipeIngredient, String> {
    let mut parts = value.splitn(3, ':').map(str::trim);
    let name = parts.next().unwrap_or_default();
    if name.is_empty() {
        return Err(format!("ingredient '{value}' has no name"));
    }

    let quantity = parts.next().unwrap_or("1");
    let unit = parts.next().unwrap_or_default();

    Ok(RecipeIngredient::new(name, quantity, unit))
}
