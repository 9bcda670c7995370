use anyhow::Result;
use freshbite::config::Config;
use freshbite_categorization::SmartSuggestions;
use freshbite_shared::Category;

pub fn suggest(config: Config, name: String, json: bool) -> Result<()> {
    let suggestions = SmartSuggestions::new(freshbite::open_store(&config));
    let suggestion = suggestions.suggest(&name);

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
        return Ok(());
    }

    println!("{name}");
    println!("  category:   {}", suggestion.category);
    println!("  confidence: {}", suggestion.confidence);
    if let Some(keyword) = &suggestion.matched_keyword {
        println!("  matched:    {keyword}");
    }
    println!("  storage:    {} ({})", suggestion.storage, suggestion.reason);
    println!("  quantity:   {}", suggestion.category.quantity_placeholder());

    Ok(())
}

pub fn learn(config: Config, name: String, category: Category) -> Result<()> {
    let mut suggestions = SmartSuggestions::new(freshbite::open_store(&config));
    suggestions.correct(&name, category)?;

    println!("{name} will be categorized as {category}");

    Ok(())
}

pub fn forget(config: Config, name: String) -> Result<()> {
    let mut suggestions = SmartSuggestions::new(freshbite::open_store(&config));

    if suggestions.preferences_mut().forget(&name)? {
        println!("forgot {name}");
    } else {
        tracing::warn!("no learned category for {name}");
    }

    Ok(())
}

pub fn learned(config: Config) -> Result<()> {
    let suggestions = SmartSuggestions::new(freshbite::open_store(&config));

    for (name, category) in suggestions.preferences().entries() {
        println!("{name}\t{category}");
    }

    Ok(())
}
