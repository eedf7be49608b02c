use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use fridgeplan_mealplan::{CalendarSlot, DEFAULT_PEOPLE, MealCalendar, MissingEntry};
use fridgeplan_recipe::RecipeError;

use super::{AppData, AppState};
use crate::error::AppError;

#[derive(Deserialize)]
pub struct SlotInput {
    #[serde(default)]
    pub recipe: Option<String>,
    #[serde(default = "default_people")]
    pub people: u8,
}

fn default_people() -> u8 {
    DEFAULT_PEOPLE
}

pub async fn get_calendar(State(app): State<AppState>) -> Json<MealCalendar> {
    let data = app.lock();
    Json(data.calendar.clone())
}

pub async fn set_slot(
    State(app): State<AppState>,
    Path((day, slot)): Path<(usize, usize)>,
    Json(input): Json<SlotInput>,
) -> Result<impl IntoResponse, AppError> {
    // Assignments are checked against the catalog up front; names that go
    // stale later are skipped with a warning during weekly aggregation.
    if let Some(name) = input.recipe.as_deref()
        && !name.trim().is_empty()
        && app.catalog().get(name).is_none()
    {
        return Err(RecipeError::NotFound(name.to_string()).into());
    }

    let mut data = app.lock();
    data.calendar
        .set_slot(day, slot, input.recipe, input.people)?;
    app.persist_calendar(&data)?;

    let cell: Option<CalendarSlot> = data.calendar.slot(day, slot).cloned();
    Ok(Json(cell))
}

pub async fn clear(State(app): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut data = app.lock();
    data.calendar.clear();
    app.persist_calendar(&data)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Shortfalls for the whole planned week, demand aggregated before the
/// fridge is diffed once per ingredient.
pub async fn missing(State(app): State<AppState>) -> Json<Vec<MissingEntry>> {
    let data = app.lock();
    Json(data.calendar.weekly_missing(app.catalog(), &data.inventory))
}

/// Feed the week's shortfalls into the grocery list, staples excluded.
pub async fn add_to_grocery(State(app): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut data = app.lock();
    let AppData {
        calendar,
        inventory,
        always_have,
        grocery,
        ..
    } = &mut *data;

    let missing = always_have.filter_missing(calendar.weekly_missing(app.catalog(), inventory));
    grocery.add_missing(&missing)?;
    app.persist_grocery(&data)?;

    Ok(Json(json!({ "added": missing.len(), "entries": missing })))
}
