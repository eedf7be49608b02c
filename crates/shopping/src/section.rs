use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use fridgeplan_shared::{CategoryConfig, KeywordBucket, KeywordTable};

/// Grocery store department an item is bought in. Parallel to but distinct
/// from the fridge categories: this set describes aisles, not home storage.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreSection {
    Produce,
    Bakery,
    Dairy,
    Meat,
    Frozen,
    Pantry,
    Beverages,
    #[default]
    Other,
}

impl StoreSection {
    pub fn id(&self) -> &'static str {
        match self {
            StoreSection::Produce => "produce",
            StoreSection::Bakery => "bakery",
            StoreSection::Dairy => "dairy",
            StoreSection::Meat => "meat",
            StoreSection::Frozen => "frozen",
            StoreSection::Pantry => "pantry",
            StoreSection::Beverages => "beverages",
            StoreSection::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StoreSection::Produce => "Fruits & Vegetables",
            StoreSection::Bakery => "Bakery",
            StoreSection::Dairy => "Dairy & Eggs",
            StoreSection::Meat => "Meat & Seafood",
            StoreSection::Frozen => "Frozen Foods",
            StoreSection::Pantry => "Pantry & Dry Goods",
            StoreSection::Beverages => "Beverages",
            StoreSection::Other => "Other Items",
        }
    }
}

/// Keyword buckets for filing a grocery item into a store section.
///
/// Bucket order is the match priority and must stay fixed: frozen comes
/// first so that "frozen strawberry" or "frozen pizza" land in the freezer
/// aisle even though they also match produce or pantry keywords. This
/// priority is independent of the shopping-path display order below.
const SECTION_TABLE: KeywordTable<StoreSection> = KeywordTable::new(
    &[
        KeywordBucket {
            category: StoreSection::Frozen,
            keywords: &[
                "frozen", "freezer", "ice cream", "popsicle", "gelato", "sorbet", "tv dinner",
            ],
        },
        KeywordBucket {
            category: StoreSection::Produce,
            keywords: &[
                "apple",
                "banana",
                "orange",
                "lettuce",
                "tomato",
                "cucumber",
                "carrot",
                "onion",
                "potato",
                "garlic",
                "lemon",
                "lime",
                "avocado",
                "strawberry",
                "blueberry",
                "grape",
                "watermelon",
                "spinach",
                "kale",
                "pepper",
                "zucchini",
                "broccoli",
                "celery",
                "cauliflower",
                "mushroom",
                "squash",
                "melon",
                "pear",
                "peach",
                "plum",
                "cherry",
                "mango",
                "pineapple",
                "berry",
                "cabbage",
                "arugula",
                "fruit",
                "vegetable",
                "veggie",
                "salad",
            ],
        },
        KeywordBucket {
            category: StoreSection::Dairy,
            keywords: &[
                "milk",
                "cheese",
                "yogurt",
                "butter",
                "cream",
                "egg",
                "margarine",
                "buttermilk",
                "kefir",
                "half and half",
                "dairy",
                "cheddar",
                "mozzarella",
                "parmesan",
                "feta",
                "ricotta",
                "brie",
                "gouda",
            ],
        },
        KeywordBucket {
            category: StoreSection::Meat,
            keywords: &[
                "chicken",
                "beef",
                "pork",
                "turkey",
                "lamb",
                "steak",
                "sausage",
                "bacon",
                "ham",
                "fish",
                "salmon",
                "tuna",
                "shrimp",
                "crab",
                "lobster",
                "scallop",
                "fillet",
                "roast",
                "chop",
                "rib",
                "burger",
                "meatball",
                "meat",
                "seafood",
                "tilapia",
                "cod",
                "halibut",
                "oyster",
                "clam",
                "mussel",
                "trout",
                "anchovy",
                "salami",
                "pepperoni",
                "prosciutto",
                "hot dog",
                "patty",
            ],
        },
        KeywordBucket {
            category: StoreSection::Bakery,
            keywords: &[
                "bread",
                "bagel",
                "roll",
                "muffin",
                "croissant",
                "cake",
                "pie",
                "cookie",
                "donut",
                "pastry",
                "tortilla",
                "pita",
                "baguette",
                "loaf",
                "sourdough",
                "rye",
                "brioche",
                "bun",
                "bakery",
                "baked",
                "dough",
                "pancake",
                "waffle",
                "cinnamon roll",
                "pretzel",
                "biscuit",
                "cracker",
                "naan",
                "focaccia",
                "ciabatta",
            ],
        },
        KeywordBucket {
            category: StoreSection::Pantry,
            keywords: &[
                "pasta",
                "rice",
                "cereal",
                "flour",
                "sugar",
                "oil",
                "vinegar",
                "bean",
                "lentil",
                "spice",
                "herb",
                "sauce",
                "condiment",
                "snack",
                "chip",
                "nut",
                "peanut butter",
                "jam",
                "honey",
                "syrup",
                "granola",
                "oatmeal",
                "quinoa",
                "couscous",
                "noodle",
                "macaroni",
                "spaghetti",
                "ramen",
                "soup",
                "broth",
                "stock",
                "bouillon",
                "salsa",
                "mustard",
                "ketchup",
                "mayo",
                "mayonnaise",
                "dressing",
                "baking powder",
                "baking soda",
                "yeast",
                "vanilla extract",
                "chocolate chip",
                "canned",
                "salt",
                "cumin",
                "paprika",
                "oregano",
                "basil",
                "thyme",
            ],
        },
        KeywordBucket {
            category: StoreSection::Beverages,
            keywords: &[
                "water",
                "soda",
                "juice",
                "tea",
                "coffee",
                "beer",
                "wine",
                "liquor",
                "energy drink",
                "lemonade",
                "cola",
                "drink",
                "beverage",
                "ginger ale",
                "root beer",
                "chai",
                "hot chocolate",
                "cocoa",
                "smoothie",
                "shake",
            ],
        },
    ],
    StoreSection::Other,
);

/// Assign a store section to a grocery item name.
pub fn classify_section(name: &str) -> StoreSection {
    SECTION_TABLE.classify(name)
}

/// Default section display order: the walking path through a typical store
/// (produce at the entrance, perimeter next, inner aisles last). Editable
/// by the user and persisted as a permutation.
pub fn default_section_order() -> Vec<CategoryConfig> {
    [
        StoreSection::Produce,
        StoreSection::Bakery,
        StoreSection::Dairy,
        StoreSection::Meat,
        StoreSection::Frozen,
        StoreSection::Pantry,
        StoreSection::Beverages,
        StoreSection::Other,
    ]
    .iter()
    .enumerate()
    .map(|(position, section)| {
        CategoryConfig::new(section.id(), section.display_name(), position as u32)
    })
    .collect()
}
