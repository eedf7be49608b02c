use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use fridgeplan_shared::{CategoryConfig, KeywordBucket, KeywordTable};

/// Where an item lives in the kitchen. Distinct from the grocery store
/// sections: this set describes storage at home, not aisles in a shop.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FridgeCategory {
    Refrigerator,
    Freezer,
    Pantry,
    Spices,
    Fruits,
    Drinks,
    #[default]
    Other,
}

impl FridgeCategory {
    pub fn id(&self) -> &'static str {
        match self {
            FridgeCategory::Refrigerator => "refrigerator",
            FridgeCategory::Freezer => "freezer",
            FridgeCategory::Pantry => "pantry",
            FridgeCategory::Spices => "spices",
            FridgeCategory::Fruits => "fruits",
            FridgeCategory::Drinks => "drinks",
            FridgeCategory::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FridgeCategory::Refrigerator => "Refrigerator",
            FridgeCategory::Freezer => "Freezer",
            FridgeCategory::Pantry => "Pantry",
            FridgeCategory::Spices => "Spices & Herbs",
            FridgeCategory::Fruits => "Fruits & Vegetables",
            FridgeCategory::Drinks => "Drinks & Beverages",
            FridgeCategory::Other => "Other Items",
        }
    }
}

/// Keyword buckets for filing a new item by name.
///
/// Bucket order is the match priority and must stay fixed: the freezer
/// bucket precedes refrigerator and fruits so that "frozen strawberry" and
/// "frozen chicken" land in the freezer, not with their fresh counterparts.
const FRIDGE_TABLE: KeywordTable<FridgeCategory> = KeywordTable::new(
    &[
        // "ice cream" rather than bare "ice": "rice" would match it.
        KeywordBucket {
            category: FridgeCategory::Freezer,
            keywords: &["frozen", "freeze", "ice cream"],
        },
        KeywordBucket {
            category: FridgeCategory::Refrigerator,
            keywords: &[
                "milk", "cheese", "yogurt", "butter", "egg", "cream", "meat", "chicken", "beef",
                "fish", "cold",
            ],
        },
        KeywordBucket {
            category: FridgeCategory::Fruits,
            keywords: &[
                "apple",
                "banana",
                "orange",
                "grape",
                "berry",
                "fruit",
                "vegetable",
                "lettuce",
                "tomato",
                "carrot",
                "onion",
            ],
        },
        KeywordBucket {
            category: FridgeCategory::Pantry,
            keywords: &[
                "pasta", "rice", "bean", "can", "jar", "flour", "sugar", "cereal", "snack", "chip",
                "crackers", "bread",
            ],
        },
        KeywordBucket {
            category: FridgeCategory::Spices,
            keywords: &[
                "spice",
                "herb",
                "salt",
                "pepper",
                "seasoning",
                "oregano",
                "basil",
                "thyme",
            ],
        },
        KeywordBucket {
            category: FridgeCategory::Drinks,
            keywords: &[
                "water", "soda", "juice", "drink", "beverage", "coffee", "tea", "wine", "beer",
                "alcohol",
            ],
        },
    ],
    FridgeCategory::Other,
);

/// Assign a fridge category to an item name.
pub fn classify_fridge(name: &str) -> FridgeCategory {
    FRIDGE_TABLE.classify(name)
}

/// Default display order for the fridge view, editable by the user.
pub fn default_fridge_order() -> Vec<CategoryConfig> {
    [
        FridgeCategory::Refrigerator,
        FridgeCategory::Freezer,
        FridgeCategory::Pantry,
        FridgeCategory::Spices,
        FridgeCategory::Fruits,
        FridgeCategory::Drinks,
        FridgeCategory::Other,
    ]
    .iter()
    .enumerate()
    .map(|(position, category)| {
        CategoryConfig::new(category.id(), category.display_name(), position as u32)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_common_items() {
        assert_eq!(classify_fridge("Milk"), FridgeCategory::Refrigerator);
        assert_eq!(classify_fridge("Cheddar cheese"), FridgeCategory::Refrigerator);
        assert_eq!(classify_fridge("Banana"), FridgeCategory::Fruits);
        assert_eq!(classify_fridge("Basmati rice"), FridgeCategory::Pantry);
        assert_eq!(classify_fridge("Dried oregano"), FridgeCategory::Spices);
        assert_eq!(classify_fridge("Orange juice"), FridgeCategory::Fruits);
        assert_eq!(classify_fridge("Green tea"), FridgeCategory::Drinks);
    }

    #[test]
    fn test_unmatched_names_fall_back_to_other() {
        assert_eq!(classify_fridge("Aluminum foil"), FridgeCategory::Other);
        assert_eq!(classify_fridge(""), FridgeCategory::Other);
    }

    #[test]
    fn test_freezer_bucket_takes_priority() {
        // "strawberry" and "chicken" match later buckets; "frozen" wins.
        assert_eq!(classify_fridge("Frozen Strawberry"), FridgeCategory::Freezer);
        assert_eq!(classify_fridge("Frozen chicken"), FridgeCategory::Freezer);
        assert_eq!(classify_fridge("Strawberry"), FridgeCategory::Fruits);
    }

    #[test]
    fn test_default_order_covers_every_category() {
        let order = default_fridge_order();
        assert_eq!(order.len(), 7);
        assert_eq!(order[0].id, "refrigerator");
        assert_eq!(order[6].id, "other");
        for (position, config) in order.iter().enumerate() {
            assert_eq!(config.order, position as u32);
        }
    }
}
