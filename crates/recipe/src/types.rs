use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Main protein of a recipe, for filtering and weekly variety at the UI.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Protein {
    Tofu,
    Lentils,
    Chickpeas,
    Beans,
    Eggs,
    Fish,
    Chicken,
    Dairy,
    Mixed,
    None,
}

/// One ingredient requirement, quantified per serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    /// Amount needed for a single serving; scaled by headcount at use.
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

/// A catalog recipe. Immutable once loaded; the catalog owns construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<String>,
    /// Number of servings the recipe text was written for. Ingredient
    /// quantities are already per serving, so this is display metadata.
    pub servings_base: u32,
    pub protein: Option<Protein>,
    pub cooking_time_minutes: Option<u16>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, ingredients: Vec<RecipeIngredient>) -> Self {
        Self {
            name: name.into(),
            ingredients,
            instructions: Vec::new(),
            servings_base: 1,
            protein: None,
            cooking_time_minutes: None,
        }
    }
}
