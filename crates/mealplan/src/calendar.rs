use serde::{Deserialize, Serialize};

use fridgeplan_inventory::InventoryStore;
use fridgeplan_recipe::RecipeCatalog;

use crate::error::MealPlanError;
use crate::reconcile::{MissingEntry, ReconciliationService};

pub const DAYS_PER_WEEK: usize = 7;
pub const SLOTS_PER_DAY: usize = 3;
pub const DEFAULT_PEOPLE: u8 = 2;
pub const MAX_PEOPLE: u8 = 8;

/// One cell of the weekly grid: an optional recipe assignment and the
/// headcount it will be cooked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarSlot {
    #[serde(default)]
    pub recipe: Option<String>,
    #[serde(default = "default_people")]
    pub people: u8,
}

fn default_people() -> u8 {
    DEFAULT_PEOPLE
}

impl Default for CalendarSlot {
    fn default() -> Self {
        Self {
            recipe: None,
            people: DEFAULT_PEOPLE,
        }
    }
}

/// The weekly meal plan: a fixed 7-day × 3-slot grid.
///
/// Thin orchestration only: the grid holds assignments and delegates all
/// reconciliation to [`ReconciliationService`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealCalendar {
    days: Vec<Vec<CalendarSlot>>,
}

impl Default for MealCalendar {
    fn default() -> Self {
        Self {
            days: (0..DAYS_PER_WEEK)
                .map(|_| vec![CalendarSlot::default(); SLOTS_PER_DAY])
                .collect(),
        }
    }
}

impl MealCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign one cell. An empty recipe name clears the assignment; the
    /// headcount must be within 1..=8.
    pub fn set_slot(
        &mut self,
        day: usize,
        slot: usize,
        recipe: Option<String>,
        people: u8,
    ) -> Result<(), MealPlanError> {
        if !(1..=MAX_PEOPLE).contains(&people) {
            return Err(MealPlanError::InvalidPeopleCount(people));
        }
        let cell = self
            .days
            .get_mut(day)
            .and_then(|slots| slots.get_mut(slot))
            .ok_or(MealPlanError::SlotOutOfRange { day, slot })?;

        cell.recipe = recipe.filter(|name| !name.trim().is_empty());
        cell.people = people;
        Ok(())
    }

    pub fn slot(&self, day: usize, slot: usize) -> Option<&CalendarSlot> {
        self.days.get(day).and_then(|slots| slots.get(slot))
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// All slots in grid order, day by day.
    pub fn slots(&self) -> impl Iterator<Item = &CalendarSlot> {
        self.days.iter().flatten()
    }

    /// Slots that have a recipe assigned.
    pub fn populated(&self) -> impl Iterator<Item = &CalendarSlot> {
        self.slots().filter(|slot| slot.recipe.is_some())
    }

    /// Shortfalls for the whole planned week; see
    /// [`ReconciliationService::compute_weekly_missing`].
    pub fn weekly_missing(
        &self,
        catalog: &RecipeCatalog,
        inventory: &InventoryStore,
    ) -> Vec<MissingEntry> {
        ReconciliationService::compute_weekly_missing(self.populated(), catalog, inventory)
    }

    /// Repair a grid loaded from persistence: missing days or slots are
    /// padded with empty cells, extra ones dropped, so the grid shape is
    /// always 7×3 regardless of what the backing file held.
    pub fn normalized(mut self) -> Self {
        self.days.resize_with(DAYS_PER_WEEK, Vec::new);
        for slots in &mut self.days {
            slots.resize_with(SLOTS_PER_DAY, CalendarSlot::default);
        }
        self
    }
}
