use thiserror::Error;

use fridgeplan_inventory::InventoryError;

#[derive(Error, Debug)]
pub enum MealPlanError {
    /// A cook attempt found at least one ingredient short. The fridge is
    /// untouched; `missing` names every short ingredient.
    #[error("missing ingredients: {}", missing.join(", "))]
    InsufficientIngredients { missing: Vec<String> },

    #[error("no meal slot at day {day}, position {slot}")]
    SlotOutOfRange { day: usize, slot: usize },

    #[error("people count {0} is out of range 1..=8")]
    InvalidPeopleCount(u8),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
