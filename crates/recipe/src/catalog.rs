use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use fridgeplan_shared::normalize_name;

use crate::error::RecipeError;
use crate::types::{Protein, Recipe, RecipeIngredient};

/// Default recipe content shipped with the application.
const EMBEDDED_RECIPES: &str = include_str!("../data/recipes.json");

/// Read-only, name-keyed recipe collection.
///
/// The catalog is the only constructor of [`Recipe`] values: all source data
/// goes through the load-time adapter, which accepts both historical shapes
/// (a bare ingredient array, or an object carrying `ingredients` plus
/// metadata) and produces one normalized type, so nothing downstream ever
/// branches on document shape. Lookup is case-insensitive.
#[derive(Debug, Default, Clone)]
pub struct RecipeCatalog {
    recipes: BTreeMap<String, Recipe>,
}

impl RecipeCatalog {
    /// Load the embedded default recipes.
    pub fn embedded() -> Result<Self, RecipeError> {
        Self::from_json(EMBEDDED_RECIPES)
    }

    /// Parse a recipe document: a JSON object mapping recipe name to either
    /// an ingredient array or a recipe object. Tolerates a leading BOM;
    /// any other decode problem is reported with its original context.
    pub fn from_json(source: &str) -> Result<Self, RecipeError> {
        let trimmed = source.trim_start_matches('\u{feff}').trim_start();
        let root: Value =
            serde_json::from_str(trimmed).map_err(|source| RecipeError::Malformed {
                context: "recipe document".to_string(),
                source,
            })?;

        let Value::Object(entries) = root else {
            return Err(RecipeError::UnsupportedShape {
                name: "<document root>".to_string(),
            });
        };

        let mut recipes = BTreeMap::new();
        for (name, raw) in entries {
            let recipe = adapt_recipe(&name, raw)?;
            recipes.insert(normalize_name(&name), recipe);
        }

        Ok(Self { recipes })
    }

    /// Case-insensitive lookup by recipe name.
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(&normalize_name(name))
    }

    /// All recipes, in stable name order.
    pub fn all(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Sorted, deduplicated display names of every ingredient any recipe
    /// uses. Backs name auto-completion.
    pub fn ingredient_names(&self) -> BTreeSet<String> {
        self.recipes
            .values()
            .flat_map(|recipe| recipe.ingredients.iter())
            .map(|ingredient| ingredient.name.clone())
            .collect()
    }
}

fn adapt_recipe(name: &str, raw: Value) -> Result<Recipe, RecipeError> {
    let (ingredients_value, extras) = match raw {
        Value::Array(_) => (raw, None),
        Value::Object(mut map) => {
            let ingredients = map
                .remove("ingredients")
                .ok_or_else(|| RecipeError::UnsupportedShape {
                    name: name.to_string(),
                })?;
            (ingredients, Some(map))
        }
        _ => {
            return Err(RecipeError::UnsupportedShape {
                name: name.to_string(),
            });
        }
    };

    let ingredients: Vec<RecipeIngredient> =
        serde_json::from_value(ingredients_value).map_err(|source| RecipeError::Malformed {
            context: format!("ingredients of {name:?}"),
            source,
        })?;

    let mut recipe = Recipe::new(name, ingredients);

    if let Some(map) = extras {
        if let Some(value) = map.get("instructions") {
            recipe.instructions =
                serde_json::from_value(value.clone()).map_err(|source| RecipeError::Malformed {
                    context: format!("instructions of {name:?}"),
                    source,
                })?;
        }
        if let Some(value) = map.get("servings") {
            let servings: u32 =
                serde_json::from_value(value.clone()).map_err(|source| RecipeError::Malformed {
                    context: format!("servings of {name:?}"),
                    source,
                })?;
            recipe.servings_base = servings.max(1);
        }
        if let Some(value) = map.get("cookingTime") {
            recipe.cooking_time_minutes = Some(serde_json::from_value(value.clone()).map_err(
                |source| RecipeError::Malformed {
                    context: format!("cookingTime of {name:?}"),
                    source,
                },
            )?);
        }
        recipe.protein = adapt_protein(name, map.get("protein"))?;
    }

    Ok(recipe)
}

// The protein tag appears both as a single string and as a list in existing
// documents; a multi-protein list collapses to `Mixed`.
fn adapt_protein(name: &str, value: Option<&Value>) -> Result<Option<Protein>, RecipeError> {
    let malformed = |source| RecipeError::Malformed {
        context: format!("protein of {name:?}"),
        source,
    };

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value @ Value::String(_)) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(malformed),
        Some(Value::Array(items)) => {
            let proteins: Vec<Protein> = items
                .iter()
                .map(|item| serde_json::from_value(item.clone()).map_err(malformed))
                .collect::<Result<_, _>>()?;
            Ok(match proteins.as_slice() {
                [] => None,
                [single] => Some(*single),
                _ => Some(Protein::Mixed),
            })
        }
        Some(_) => Err(RecipeError::UnsupportedShape {
            name: name.to_string(),
        }),
    }
}
