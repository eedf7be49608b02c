mod calendar;
mod error;
mod reconcile;

pub use calendar::{
    CalendarSlot, DAYS_PER_WEEK, DEFAULT_PEOPLE, MAX_PEOPLE, MealCalendar, SLOTS_PER_DAY,
};
pub use error::MealPlanError;
pub use reconcile::{MissingEntry, ReconciliationService};
