use serde::Serialize;

use fridgeplan_inventory::InventoryStore;
use fridgeplan_recipe::{Recipe, RecipeCatalog, RecipeIngredient};
use fridgeplan_shared::same_name;

use crate::calendar::CalendarSlot;
use crate::error::MealPlanError;

/// The computed shortfall for one ingredient: how much more is needed than
/// is on hand. Never zero or negative: covered ingredients produce no
/// entry. The unit is always the recipe's unit; inventory may display the
/// same ingredient differently ("" vs "g") and units are not reconciled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingEntry {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

/// Scaling and reconciliation over recipes and the fridge.
///
/// Stateless domain service: every operation takes the stores it reads or
/// mutates as arguments and computes synchronously over them.
pub struct ReconciliationService;

impl ReconciliationService {
    /// Shortfalls for cooking `recipe` for `people`, in recipe order.
    pub fn compute_missing(
        recipe: &Recipe,
        people: u32,
        inventory: &InventoryStore,
    ) -> Vec<MissingEntry> {
        let mut missing = Vec::new();
        for ingredient in &recipe.ingredients {
            let required = Self::required(ingredient, people);
            if required <= 0.0 {
                continue;
            }
            if let Some(quantity) = Self::shortfall(inventory, &ingredient.name, required) {
                missing.push(MissingEntry {
                    name: ingredient.name.clone(),
                    quantity,
                    unit: ingredient.unit.clone(),
                });
            }
        }
        missing
    }

    /// Whether the fridge covers every ingredient of `recipe` at `people`.
    pub fn is_satisfiable(recipe: &Recipe, people: u32, inventory: &InventoryStore) -> bool {
        recipe.ingredients.iter().all(|ingredient| {
            let required = Self::required(ingredient, people);
            required <= 0.0 || Self::shortfall(inventory, &ingredient.name, required).is_none()
        })
    }

    /// Cook a recipe: consume every scaled ingredient quantity from the
    /// fridge. All-or-nothing: sufficiency of every ingredient is verified
    /// before anything is decremented, and a failure names every short
    /// ingredient while mutating nothing. An ingredient consumed down to
    /// zero is removed from the fridge rather than left at quantity 0.
    pub fn cook(
        recipe: &Recipe,
        people: u32,
        inventory: &mut InventoryStore,
    ) -> Result<(), MealPlanError> {
        let short: Vec<String> = Self::compute_missing(recipe, people, inventory)
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        if !short.is_empty() {
            return Err(MealPlanError::InsufficientIngredients { missing: short });
        }

        for ingredient in &recipe.ingredients {
            let required = Self::required(ingredient, people);
            if required <= 0.0 {
                continue;
            }
            let on_hand = inventory
                .find(&ingredient.name)
                .map(|item| item.quantity)
                .unwrap_or(0.0);
            let left = on_hand - required;
            if left > 0.0 {
                inventory.set_quantity(&ingredient.name, left)?;
            } else {
                inventory.remove(&ingredient.name)?;
            }
        }
        Ok(())
    }

    /// Shortfalls for a whole week of planned meals.
    ///
    /// Demand is summed across all populated slots per distinct ingredient
    /// name *before* diffing against the fridge once per name. Diffing per
    /// slot instead would double-count shortfalls for ingredients shared by
    /// several meals: supply is shared across the week, since nothing is
    /// consumed until a meal is actually cooked. Slots naming a recipe the
    /// catalog no longer has are skipped with a warning.
    pub fn compute_weekly_missing<'a>(
        slots: impl IntoIterator<Item = &'a CalendarSlot>,
        catalog: &RecipeCatalog,
        inventory: &InventoryStore,
    ) -> Vec<MissingEntry> {
        // Demand per ingredient, merged case-insensitively, first-seen
        // display name and order kept.
        let mut demand: Vec<(String, f64, String)> = Vec::new();
        for slot in slots {
            let Some(name) = slot.recipe.as_deref() else {
                continue;
            };
            let Some(recipe) = catalog.get(name) else {
                tracing::warn!(recipe = name, "planned recipe not in catalog, slot skipped");
                continue;
            };
            for ingredient in &recipe.ingredients {
                let required = Self::required(ingredient, slot.people as u32);
                if required <= 0.0 {
                    continue;
                }
                match demand
                    .iter_mut()
                    .find(|(existing, _, _)| same_name(existing, &ingredient.name))
                {
                    Some(entry) => entry.1 += required,
                    None => demand.push((
                        ingredient.name.clone(),
                        required,
                        ingredient.unit.clone(),
                    )),
                }
            }
        }

        demand
            .into_iter()
            .filter_map(|(name, required, unit)| {
                Self::shortfall(inventory, &name, required).map(|quantity| MissingEntry {
                    name,
                    quantity,
                    unit,
                })
            })
            .collect()
    }

    fn required(ingredient: &RecipeIngredient, people: u32) -> f64 {
        ingredient.quantity * people as f64
    }

    fn shortfall(inventory: &InventoryStore, name: &str, required: f64) -> Option<f64> {
        match inventory.find(name) {
            None => Some(required),
            Some(item) if item.quantity < required => Some(required - item.quantity),
            Some(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, quantity: f64, unit: &str) -> RecipeIngredient {
        RecipeIngredient {
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
        }
    }

    fn pancake() -> Recipe {
        Recipe::new(
            "Pancake",
            vec![
                ingredient("flour", 125.0, "g"),
                ingredient("egg", 1.0, ""),
                ingredient("milk", 200.0, "g"),
            ],
        )
    }

    #[test]
    fn test_missing_from_empty_inventory_is_full_requirement() {
        let inventory = InventoryStore::new();
        let missing = ReconciliationService::compute_missing(&pancake(), 2, &inventory);

        assert_eq!(
            missing,
            vec![
                MissingEntry {
                    name: "flour".to_string(),
                    quantity: 250.0,
                    unit: "g".to_string()
                },
                MissingEntry {
                    name: "egg".to_string(),
                    quantity: 2.0,
                    unit: "".to_string()
                },
                MissingEntry {
                    name: "milk".to_string(),
                    quantity: 400.0,
                    unit: "g".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_covered_ingredient_emits_no_entry() {
        let mut inventory = InventoryStore::new();
        inventory.upsert("flour", 300.0, "g", None).unwrap();

        let missing = ReconciliationService::compute_missing(&pancake(), 2, &inventory);
        let names: Vec<&str> = missing.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["egg", "milk"]);
    }

    #[test]
    fn test_partial_stock_reports_difference_only() {
        let mut inventory = InventoryStore::new();
        inventory.upsert("Flour", 100.0, "g", None).unwrap();

        let missing = ReconciliationService::compute_missing(&pancake(), 2, &inventory);
        assert_eq!(missing[0].name, "flour");
        assert_eq!(missing[0].quantity, 150.0);
    }

    #[test]
    fn test_every_missing_quantity_is_positive() {
        let mut inventory = InventoryStore::new();
        inventory.upsert("flour", 250.0, "g", None).unwrap();
        inventory.upsert("egg", 5.0, "", None).unwrap();
        inventory.upsert("milk", 100.0, "g", None).unwrap();

        for people in 0..5 {
            let missing = ReconciliationService::compute_missing(&pancake(), people, &inventory);
            assert!(missing.iter().all(|entry| entry.quantity > 0.0));
        }
    }

    #[test]
    fn test_zero_requirement_never_emits_even_when_absent() {
        let recipe = Recipe::new("Decoration", vec![ingredient("parsley", 0.0, "")]);
        let inventory = InventoryStore::new();

        assert!(ReconciliationService::compute_missing(&recipe, 4, &inventory).is_empty());
        assert!(ReconciliationService::compute_missing(&pancake(), 0, &inventory).is_empty());
    }

    #[test]
    fn test_missing_entry_uses_recipe_unit() {
        let mut inventory = InventoryStore::new();
        // Same ingredient, unitless in the fridge, grams in the recipe.
        inventory.upsert("milk", 100.0, "", None).unwrap();

        let missing = ReconciliationService::compute_missing(&pancake(), 2, &inventory);
        let milk = missing.iter().find(|m| m.name == "milk").unwrap();
        assert_eq!(milk.unit, "g");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut inventory = InventoryStore::new();
        inventory.upsert("FLOUR", 250.0, "g", None).unwrap();
        inventory.upsert("Egg", 2.0, "", None).unwrap();
        inventory.upsert("Milk", 400.0, "g", None).unwrap();

        assert!(ReconciliationService::compute_missing(&pancake(), 2, &inventory).is_empty());
        assert!(ReconciliationService::is_satisfiable(&pancake(), 2, &inventory));
    }

    #[test]
    fn test_cook_decrements_each_ingredient_exactly() {
        let mut inventory = InventoryStore::new();
        inventory.upsert("flour", 300.0, "g", None).unwrap();
        inventory.upsert("egg", 6.0, "", None).unwrap();
        inventory.upsert("milk", 500.0, "g", None).unwrap();

        ReconciliationService::cook(&pancake(), 2, &mut inventory).unwrap();

        assert_eq!(inventory.find("flour").unwrap().quantity, 50.0);
        assert_eq!(inventory.find("egg").unwrap().quantity, 4.0);
        assert_eq!(inventory.find("milk").unwrap().quantity, 100.0);
    }

    #[test]
    fn test_cook_removes_items_consumed_to_zero() {
        let mut inventory = InventoryStore::new();
        inventory.upsert("flour", 125.0, "g", None).unwrap();
        inventory.upsert("egg", 1.0, "", None).unwrap();
        inventory.upsert("milk", 300.0, "g", None).unwrap();

        ReconciliationService::cook(&pancake(), 1, &mut inventory).unwrap();

        assert!(inventory.find("flour").is_none());
        assert!(inventory.find("egg").is_none());
        assert_eq!(inventory.find("milk").unwrap().quantity, 100.0);
    }

    #[test]
    fn test_failed_cook_mutates_nothing() {
        let mut inventory = InventoryStore::new();
        inventory.upsert("flour", 300.0, "g", None).unwrap();
        inventory.upsert("egg", 1.0, "", None).unwrap();
        inventory.upsert("milk", 500.0, "g", None).unwrap();
        let before = inventory.clone();

        let err = ReconciliationService::cook(&pancake(), 2, &mut inventory).unwrap_err();
        match err {
            MealPlanError::InsufficientIngredients { missing } => {
                assert_eq!(missing, vec!["egg".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_failed_cook_names_every_short_ingredient() {
        let mut inventory = InventoryStore::new();
        inventory.upsert("flour", 10.0, "g", None).unwrap();

        let err = ReconciliationService::cook(&pancake(), 2, &mut inventory).unwrap_err();
        match err {
            MealPlanError::InsufficientIngredients { missing } => {
                assert_eq!(missing, vec!["flour", "egg", "milk"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_is_satisfiable() {
        let mut inventory = InventoryStore::new();
        inventory.upsert("flour", 125.0, "g", None).unwrap();
        inventory.upsert("egg", 1.0, "", None).unwrap();
        inventory.upsert("milk", 200.0, "g", None).unwrap();

        assert!(ReconciliationService::is_satisfiable(&pancake(), 1, &inventory));
        assert!(!ReconciliationService::is_satisfiable(&pancake(), 2, &inventory));
    }
}
