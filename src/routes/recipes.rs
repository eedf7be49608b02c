use std::collections::{BTreeMap, BTreeSet};

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use fridgeplan_mealplan::{MAX_PEOPLE, MealPlanError, MissingEntry, ReconciliationService};
use fridgeplan_recipe::{Recipe, RecipeError};

use super::AppState;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct PeopleQuery {
    #[serde(default = "default_people")]
    pub people: u8,
}

#[derive(Deserialize)]
pub struct CookInput {
    #[serde(default = "default_people")]
    pub people: u8,
}

fn default_people() -> u8 {
    2
}

fn checked_people(people: u8) -> Result<u32, AppError> {
    if !(1..=MAX_PEOPLE).contains(&people) {
        return Err(MealPlanError::InvalidPeopleCount(people).into());
    }
    Ok(people as u32)
}

pub async fn list(State(app): State<AppState>) -> Json<Vec<Recipe>> {
    Json(app.catalog().all().cloned().collect())
}

pub async fn detail(
    State(app): State<AppState>,
    Path((name,)): Path<(String,)>,
) -> Result<Json<Recipe>, AppError> {
    let recipe = app.catalog().get(&name).cloned();
    recipe.map(Json).ok_or_else(|| RecipeError::NotFound(name).into())
}

/// Shortfalls for cooking one recipe at the given headcount.
pub async fn missing(
    State(app): State<AppState>,
    Path((name,)): Path<(String,)>,
    Query(query): Query<PeopleQuery>,
) -> Result<Json<Vec<MissingEntry>>, AppError> {
    let people = checked_people(query.people)?;
    let recipe = app
        .catalog()
        .get(&name)
        .ok_or_else(|| RecipeError::NotFound(name.clone()))?;

    let data = app.lock();
    Ok(Json(ReconciliationService::compute_missing(
        recipe,
        people,
        &data.inventory,
    )))
}

pub async fn cook(
    State(app): State<AppState>,
    Path((name,)): Path<(String,)>,
    Json(input): Json<CookInput>,
) -> Result<impl IntoResponse, AppError> {
    let people = checked_people(input.people)?;
    let recipe = app
        .catalog()
        .get(&name)
        .ok_or_else(|| RecipeError::NotFound(name.clone()))?
        .clone();

    let mut data = app.lock();
    ReconciliationService::cook(&recipe, people, &mut data.inventory)?;
    app.persist_inventory(&data)?;

    Ok(Json(json!({
        "cooked": recipe.name,
        "people": input.people,
    })))
}

/// Which catalog recipes the fridge currently covers, at one headcount.
pub async fn availability(
    State(app): State<AppState>,
    Query(query): Query<PeopleQuery>,
) -> Result<Json<BTreeMap<String, bool>>, AppError> {
    let people = checked_people(query.people)?;
    let data = app.lock();

    let availability = app
        .catalog()
        .all()
        .map(|recipe| {
            (
                recipe.name.clone(),
                ReconciliationService::is_satisfiable(recipe, people, &data.inventory),
            )
        })
        .collect();
    Ok(Json(availability))
}

/// Every known ingredient name - catalog and fridge combined - sorted.
/// Backs name auto-completion in clients.
pub async fn ingredient_names(State(app): State<AppState>) -> Json<Vec<String>> {
    let mut names: BTreeSet<String> = app.catalog().ingredient_names();
    let data = app.lock();
    names.extend(data.inventory.all().map(|item| item.name.clone()));
    Json(names.into_iter().collect())
}
