use chrono::{Local, NaiveDate, Utc};
use freshbite_categorization::{CUSTOM_MAPPINGS_KEY, SmartSuggestions};
use freshbite_inventory::{
    ExpiryFilter, FoodItemUpdate, ITEMS_KEY, IngredientAvailability, Inventory, InventoryQuery,
    NewFoodItem, SortBy,
};
use freshbite_shared::inventory::{ConsumeMethod, FoodItem};
use freshbite_shared::recipe::RecipeIngredient;
use freshbite_shared::shopping::ItemSource;
use freshbite_shared::store::save_json;
use freshbite_shared::{Category, Error, FileStore, KeyValueStore, MemoryStore, StorageLocation};
use freshbite_shopping::ShoppingList;
use temp_dir::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn stored_item(name: &str, category: Category, date_added: NaiveDate) -> FoodItem {
    FoodItem {
        id: name.to_owned(),
        name: name.to_owned(),
        category,
        quantity: "1".to_owned(),
        expiry_date: date(2027, 1, 1),
        storage: category.default_storage(),
        date_added,
        notes: None,
    }
}

fn expiring_on(name: &str, expiry_date: NaiveDate) -> FoodItem {
    FoodItem {
        expiry_date,
        ..stored_item(name, Category::Others, date(2026, 10, 1))
    }
}

fn new_item(name: &str, expiry_date: NaiveDate) -> NewFoodItem {
    NewFoodItem {
        name: name.to_owned(),
        quantity: "1".to_owned(),
        expiry_date,
        category: None,
        storage: None,
        notes: None,
    }
}

#[test]
fn add_fills_category_and_storage() -> anyhow::Result<()> {
    let mut inventory = Inventory::new(MemoryStore::new());

    let milk = inventory.add(new_item(" Milk ", date(2026, 10, 21)))?;
    assert_eq!(milk.name, "Milk");
    assert_eq!(milk.category, Category::MilkDairy);
    assert_eq!(milk.storage, StorageLocation::Fridge);
    assert_eq!(milk.date_added, Local::now().date_naive());

    let banana = inventory.add(new_item("banana", date(2026, 10, 21)))?;
    assert_eq!(banana.category, Category::VegetablesFruits);
    assert_eq!(banana.storage, StorageLocation::Cupboard);

    let chicken = inventory.add(new_item("chicken 2kg", date(2026, 10, 25)))?;
    assert_eq!(chicken.category, Category::MeatProtein);
    assert_eq!(chicken.storage, StorageLocation::Freezer);

    assert_eq!(inventory.items()?.len(), 3);

    Ok(())
}

#[test]
fn add_requires_name_and_quantity() {
    let mut inventory = Inventory::new(MemoryStore::new());

    let mut input = new_item("  ", date(2026, 10, 21));
    let result = inventory.add(input.clone());
    assert!(matches!(result, Err(Error::Validate(_))));

    input.name = "bread".to_owned();
    input.quantity = " ".to_owned();
    assert!(matches!(inventory.add(input), Err(Error::Validate(_))));
}

#[test]
fn chosen_category_is_learned() -> anyhow::Result<()> {
    let mut inventory = Inventory::new(MemoryStore::new());

    let mut input = new_item("Aloo Tikki", date(2026, 10, 21));
    input.category = Some(Category::Snacks);
    let item = inventory.add(input)?;
    assert_eq!(item.category, Category::Snacks);
    // storage follows the chosen category, with keyword overrides still applied
    assert_eq!(item.storage, StorageLocation::Cupboard);

    let store = inventory.into_inner();
    let suggestions = SmartSuggestions::new(store);
    let suggestion = suggestions.suggest("aloo tikki");
    assert_eq!(suggestion.category, Category::Snacks);
    assert_eq!(suggestion.matched_keyword.as_deref(), Some("learned"));

    Ok(())
}

#[test]
fn matching_category_is_not_learned() -> anyhow::Result<()> {
    let mut inventory = Inventory::new(MemoryStore::new());

    let mut input = new_item("paneer", date(2026, 10, 21));
    input.category = Some(Category::MilkDairy);
    inventory.add(input)?;

    let suggestions = SmartSuggestions::new(inventory.into_inner());
    assert!(suggestions.preferences().entries().is_empty());

    Ok(())
}

#[test]
fn update_changes_fields_and_learns_category() -> anyhow::Result<()> {
    let mut inventory = Inventory::new(MemoryStore::new());
    let tofu = inventory.add(new_item("tofu", date(2026, 10, 21)))?;
    assert_eq!(tofu.category, Category::MeatProtein);

    let updated = inventory.update(
        &tofu.id,
        FoodItemUpdate {
            category: Some(Category::VegetablesFruits),
            quantity: Some("400g".to_owned()),
            notes: Some("firm".to_owned()),
            ..Default::default()
        },
    )?;
    assert_eq!(updated.category, Category::VegetablesFruits);
    assert_eq!(updated.quantity, "400g");
    assert_eq!(updated.notes.as_deref(), Some("firm"));
    assert_eq!(inventory.get(&tofu.id)?, updated);

    let suggestions = SmartSuggestions::new(inventory.into_inner());
    assert_eq!(
        suggestions.preferences().lookup("tofu"),
        Some(Category::VegetablesFruits)
    );

    Ok(())
}

#[test]
fn unknown_ids_are_not_found() {
    let mut inventory = Inventory::new(MemoryStore::new());
    assert!(matches!(inventory.get("nope"), Err(Error::NotFound(_))));
    assert!(matches!(inventory.remove("nope"), Err(Error::NotFound(_))));
    assert!(matches!(inventory.consume("nope"), Err(Error::NotFound(_))));
    assert!(matches!(
        inventory.update("nope", FoodItemUpdate::default()),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn consume_logs_item_and_restocks_shopping_list() -> anyhow::Result<()> {
    let mut inventory = Inventory::new(MemoryStore::new());
    let mut input = new_item("Greek Yogurt", date(2026, 10, 21));
    input.quantity = "500g".to_owned();
    let yogurt = inventory.add(input)?;

    let consumed = inventory.consume(&yogurt.id)?;
    assert_eq!(consumed.item_name, "Greek Yogurt");
    assert_eq!(consumed.quantity, "500g");

    assert!(inventory.items()?.is_empty());
    assert_eq!(inventory.consumed()?.len(), 1);

    let shopping = ShoppingList::new(inventory.into_inner());
    let items = shopping.list()?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Greek Yogurt");
    assert_eq!(items[0].category, Category::MilkDairy);
    assert_eq!(items[0].quantity, "500g");
    assert_eq!(items[0].source, ItemSource::Auto);
    assert!(!items[0].is_completed);

    Ok(())
}

#[test]
fn list_filters_and_sorts() -> anyhow::Result<()> {
    let today = date(2026, 10, 19);
    let mut inventory = Inventory::new(MemoryStore::new());
    inventory.add(new_item("cheddar cheese", date(2026, 11, 20)))?;
    inventory.add(new_item("spinach", date(2026, 10, 20)))?;
    inventory.add(new_item("butter", date(2026, 10, 24)))?;
    inventory.add(new_item("oats", date(2027, 1, 1)))?;

    let all = inventory.list(&InventoryQuery::default(), today)?;
    let names: Vec<&str> = all.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["spinach", "butter", "cheddar cheese", "oats"]);

    let dairy = inventory.list(
        &InventoryQuery {
            category: Some(Category::MilkDairy),
            sort_by: SortBy::Name,
            ..Default::default()
        },
        today,
    )?;
    let names: Vec<&str> = dairy.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["butter", "cheddar cheese"]);

    let expiring = inventory.list(
        &InventoryQuery {
            expiry: Some(ExpiryFilter::Expiring),
            ..Default::default()
        },
        today,
    )?;
    assert_eq!(expiring.len(), 2);

    let fresh_pantry = inventory.list(
        &InventoryQuery {
            expiry: Some(ExpiryFilter::Fresh),
            storage: Some(StorageLocation::Pantry),
            ..Default::default()
        },
        today,
    )?;
    assert_eq!(fresh_pantry.len(), 1);
    assert_eq!(fresh_pantry[0].name, "oats");

    let search = inventory.list(
        &InventoryQuery {
            search: Some("CHEE".to_owned()),
            ..Default::default()
        },
        today,
    )?;
    assert_eq!(search.len(), 1);
    assert_eq!(search[0].name, "cheddar cheese");

    Ok(())
}

#[test]
fn list_sorts_by_date_added_and_category() -> anyhow::Result<()> {
    let today = date(2026, 10, 19);
    let mut store = MemoryStore::new();
    save_json(
        &mut store,
        ITEMS_KEY,
        &vec![
            stored_item("rice", Category::GrainsCereals, date(2026, 10, 2)),
            stored_item("chips", Category::Snacks, date(2026, 10, 18)),
            stored_item("milk", Category::MilkDairy, date(2026, 10, 10)),
            stored_item("ketchup", Category::CondimentsSauces, date(2026, 9, 1)),
        ],
    )?;
    let inventory = Inventory::new(store);

    let names = |sort_by: SortBy| -> anyhow::Result<Vec<String>> {
        let query = InventoryQuery {
            sort_by,
            ..Default::default()
        };
        Ok(inventory
            .list(&query, today)?
            .into_iter()
            .map(|item| item.name)
            .collect())
    };

    assert_eq!(
        names(SortBy::DateAdded)?,
        vec!["chips", "milk", "rice", "ketchup"]
    );
    assert_eq!(
        names(SortBy::Category)?,
        vec!["ketchup", "rice", "milk", "chips"]
    );

    Ok(())
}

#[test]
fn expiring_filter_includes_expired_items() -> anyhow::Result<()> {
    let today = date(2026, 10, 19);
    let mut store = MemoryStore::new();
    save_json(
        &mut store,
        ITEMS_KEY,
        &vec![
            expiring_on("old milk", date(2026, 10, 15)),
            expiring_on("bread", date(2026, 10, 24)),
            expiring_on("oats", date(2027, 1, 1)),
        ],
    )?;
    let inventory = Inventory::new(store);

    let expiring = inventory.list(
        &InventoryQuery {
            expiry: Some(ExpiryFilter::Expiring),
            ..Default::default()
        },
        today,
    )?;
    let names: Vec<&str> = expiring.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["old milk", "bread"]);

    let fresh = inventory.list(
        &InventoryQuery {
            expiry: Some(ExpiryFilter::Fresh),
            ..Default::default()
        },
        today,
    )?;
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].name, "oats");

    Ok(())
}

#[test]
fn failed_add_does_not_learn_category() -> anyhow::Result<()> {
    let mut store = MemoryStore::new();
    store.set(ITEMS_KEY, "{not json".to_owned())?;
    let mut inventory = Inventory::new(store);

    let mut input = new_item("Aloo Tikki", date(2026, 10, 21));
    input.category = Some(Category::Snacks);
    assert!(matches!(inventory.add(input), Err(Error::Serialization(_))));

    let store = inventory.into_inner();
    assert_eq!(store.get(CUSTOM_MAPPINGS_KEY)?, None);

    Ok(())
}

#[test]
fn cooking_consumes_matching_items() -> anyhow::Result<()> {
    let mut inventory = Inventory::new(MemoryStore::new());
    inventory.add(new_item("Amul Paneer", date(2026, 10, 21)))?;
    inventory.add(new_item("onion", date(2026, 10, 30)))?;
    inventory.add(new_item("rice", date(2027, 1, 1)))?;

    let cooked = inventory.consume_ingredients(&[
        RecipeIngredient::new("paneer", "200", "g"),
        RecipeIngredient::new("Onion", "2", ""),
        RecipeIngredient::new("capsicum", "1", ""),
    ])?;

    assert_eq!(cooked.len(), 2);
    assert_eq!(cooked[0].item_name, "Amul Paneer");
    assert_eq!(cooked[0].quantity, "200 g");
    assert_eq!(cooked[0].method, ConsumeMethod::Recipe);
    assert_eq!(cooked[1].item_name, "onion");
    assert_eq!(cooked[1].quantity, "2");

    let remaining = inventory.items()?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "rice");
    assert_eq!(inventory.consumed()?, cooked);

    // cooking never restocks the shopping list
    let shopping = ShoppingList::new(inventory.into_inner());
    assert!(shopping.list()?.is_empty());

    Ok(())
}

#[test]
fn ingredient_availability_reflects_expiry() -> anyhow::Result<()> {
    let today = date(2026, 10, 19);
    let mut inventory = Inventory::new(MemoryStore::new());
    inventory.add(new_item("spinach", date(2026, 10, 20)))?;
    inventory.add(new_item("basmati rice", date(2027, 1, 1)))?;

    let availability = |name: &str| {
        let ingredient = RecipeIngredient::new(name, "1", "");
        inventory.ingredient_availability(&ingredient, today)
    };
    assert_eq!(availability("Spinach")?, IngredientAvailability::Expiring);
    assert_eq!(availability("rice")?, IngredientAvailability::Available);
    assert_eq!(availability("tofu")?, IngredientAvailability::Missing);

    Ok(())
}

#[test]
fn missing_ingredients_go_to_shopping_list() -> anyhow::Result<()> {
    let mut inventory = Inventory::new(MemoryStore::new());
    inventory.add(new_item("onion", date(2026, 10, 30)))?;

    let ingredients = [
        RecipeIngredient::new("onion", "2", ""),
        RecipeIngredient::new("paneer", "200", "g"),
    ];
    assert_eq!(inventory.add_missing_to_shopping(&ingredients)?, 1);

    let shopping = ShoppingList::new(inventory.into_inner());
    let items = shopping.list()?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "paneer");
    assert_eq!(items[0].quantity, "200 g");
    assert_eq!(items[0].category, Category::Others);
    assert_eq!(items[0].source, ItemSource::Manual);

    Ok(())
}

#[test]
fn inventory_persists_to_files() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let data_dir = dir.child("freshbite");

    let mut inventory = Inventory::new(FileStore::new(&data_dir));
    let item = inventory.add(new_item("bread", date(2026, 10, 22)))?;

    let reopened = Inventory::new(FileStore::new(&data_dir));
    assert_eq!(reopened.get(&item.id)?, item);
    assert!(data_dir.join("freshbite_items.json").exists());

    Ok(())
}

#[test]
fn dashboard_reflects_inventory() -> anyhow::Result<()> {
    let today = date(2026, 10, 19);
    let mut inventory = Inventory::new(MemoryStore::new());
    inventory.add(new_item("milk", date(2026, 10, 20)))?;
    inventory.add(new_item("oats", date(2026, 10, 25)))?;
    inventory.add(new_item("honey", date(2027, 10, 25)))?;

    let dashboard = inventory.dashboard(today, Utc::now())?;
    assert_eq!(dashboard.total_items, 3);
    assert_eq!(dashboard.expiring_in_3_days, 1);
    assert_eq!(dashboard.expiring_in_7_days, 1);
    assert_eq!(dashboard.expiring_soon.len(), 2);
    assert_eq!(dashboard.expiring_soon[0].name, "milk");

    Ok(())
}
