//! Static keyword tables for category detection and storage overrides
//!
//! Keywords are lowercase and mix English with transliterated Hindi names
//! ("doodh", "aloo", "murgi") so that items logged either way are recognised.

use freshbite_shared::Category;

/// Per-category keyword dictionary.
///
/// Table order matters: when several categories match the first word of a
/// product name, the category listed first here wins.
pub static CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::MilkDairy,
        &[
            "milk",
            "doodh",
            "cheese",
            "yogurt",
            "yoghurt",
            "curd",
            "dahi",
            "butter",
            "cream",
            "paneer",
            "ghee",
            "lassi",
            "kheer",
            "condensed",
            "mozzarella",
            "cheddar",
            "parmesan",
            "cottage",
            "whey",
        ],
    ),
    (
        Category::VegetablesFruits,
        &[
            "apple",
            "seb",
            "banana",
            "kela",
            "orange",
            "mango",
            "aam",
            "grape",
            "angur",
            "berry",
            "tomato",
            "tamatar",
            "potato",
            "aloo",
            "onion",
            "pyaz",
            "carrot",
            "gajar",
            "spinach",
            "palak",
            "lettuce",
            "cabbage",
            "patta",
            "gobi",
            "broccoli",
            "cucumber",
            "kakdi",
            "pumpkin",
            "kaddu",
            "bhindi",
            "okra",
            "capsicum",
            "shimla",
            "lemon",
            "nimbu",
            "garlic",
            "lehsun",
            "ginger",
            "adrak",
            "peas",
            "matar",
            "cauliflower",
            "beans",
            "melon",
            "papaya",
            "guava",
            "amrud",
            "pomegranate",
            "anaar",
        ],
    ),
    (
        Category::GrainsCereals,
        &[
            "rice", "chawal", "wheat", "gehun", "bread", "pav", "roti", "chapati", "pasta",
            "noodles", "oats", "cereal", "flour", "maida", "atta", "besan", "poha", "upma",
            "dalia", "quinoa", "barley", "jau", "ragi", "semolina", "suji", "corn", "makki",
        ],
    ),
    (
        Category::MeatProtein,
        &[
            "chicken", "murgi", "mutton", "gosht", "fish", "machli", "egg", "anda", "beef",
            "pork", "sausage", "bacon", "ham", "tofu", "salmon", "tuna", "prawn", "jhinga",
            "turkey", "lamb", "keema", "tikka", "kebab", "protein",
        ],
    ),
    (
        Category::Beverages,
        &[
            "juice",
            "ras",
            "soda",
            "water",
            "pani",
            "tea",
            "chai",
            "coffee",
            "cola",
            "pepsi",
            "coke",
            "sprite",
            "fanta",
            "lassi",
            "milkshake",
            "smoothie",
            "beer",
            "wine",
            "alcohol",
            "whiskey",
            "drink",
            "beverage",
            "shake",
        ],
    ),
    (
        Category::CondimentsSauces,
        &[
            "sauce",
            "ketchup",
            "mayo",
            "mayonnaise",
            "mustard",
            "rai",
            "pickle",
            "achar",
            "chutney",
            "vinegar",
            "sirka",
            "masala",
            "spice",
            "mirch",
            "garam",
            "turmeric",
            "haldi",
            "salt",
            "namak",
            "sugar",
            "chini",
            "honey",
            "shahad",
            "jam",
            "jelly",
            "oil",
            "tel",
            "chilli",
            "powder",
            "paste",
            "spread",
        ],
    ),
    (
        Category::Snacks,
        &[
            "chips", "wafers", "biscuit", "cookie", "chocolate", "candy", "toffee", "namkeen",
            "mixture", "bhujia", "sev", "popcorn", "cake", "pastry", "muffin", "samosa", "pakora",
            "mathri", "papad", "crackers", "nuts", "badam", "cashew", "kaju",
        ],
    ),
];

/// Tie-break order used when no match sits on the first word
pub static PRIORITY_ORDER: &[Category] = &[
    Category::MeatProtein,
    Category::MilkDairy,
    Category::VegetablesFruits,
    Category::GrainsCereals,
    Category::Beverages,
    Category::CondimentsSauces,
    Category::Snacks,
    Category::Others,
];

/// Produce that keeps better at room temperature than in the fridge
pub static CUPBOARD_EXCEPTIONS: &[&str] = &[
    "banana", "kela", "potato", "aloo", "onion", "pyaz", "tomato", "tamatar", "garlic", "lehsun",
];

pub static FREEZER_KEYWORDS: &[&str] = &["frozen", "ice cream", "ice", "freeze"];

/// Quantity markers that push meat into the freezer
pub static BULK_MARKERS: &[&str] = &["kg", "kilogram"];
