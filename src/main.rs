mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::inventory::InventoryCommand;
use cli::recipe::RecipeCommand;
use cli::shopping::ShoppingCommand;
use freshbite_shared::Category;

/// freshbite - Food inventory with smart category and storage suggestions
#[derive(Parser)]
#[command(name = "freshbite")]
#[command(about = "Track food at home, get category and storage suggestions", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest a category and storage location for a product name
    Suggest {
        #[arg(required = true)]
        name: Vec<String>,

        /// Print the suggestion as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remember a category for a product name
    Learn {
        name: String,
        #[arg(value_parser = cli::parse_category)]
        category: Category,
    },
    /// Drop a learned category
    Forget { name: String },
    /// List learned categories
    Learned,
    /// Manage food items
    #[command(subcommand)]
    Inventory(InventoryCommand),
    /// Manage the shopping list
    #[command(subcommand)]
    Shopping(ShoppingCommand),
    /// Cook from the inventory or shop for a recipe's ingredients
    #[command(subcommand)]
    Recipe(RecipeCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = freshbite::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    freshbite::observability::init_observability(
        "freshbite",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Suggest { name, json } => cli::suggest::suggest(config, name.join(" "), json),
        Commands::Learn { name, category } => cli::suggest::learn(config, name, category),
        Commands::Forget { name } => cli::suggest::forget(config, name),
        Commands::Learned => cli::suggest::learned(config),
        Commands::Inventory(command) => cli::inventory::run(config, command),
        Commands::Shopping(command) => cli::shopping::run(config, command),
        Commands::Recipe(command) => cli::recipe::run(config, command),
    }
}
