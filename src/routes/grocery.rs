use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use fridgeplan_mealplan::{MAX_PEOPLE, MealPlanError, MissingEntry, ReconciliationService};
use fridgeplan_recipe::RecipeError;
use fridgeplan_shared::{CategoryConfig, sorted_for_display};
use fridgeplan_shopping::{DEFAULT_SEARCH_BASE_URL, GroceryItem, export_links, export_text};

use super::{AppData, AppState};
use crate::error::AppError;

#[derive(Deserialize, Validate)]
pub struct AddItemInput {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
}

#[derive(Deserialize)]
pub struct QuantityInput {
    pub quantity: f64,
}

#[derive(Deserialize)]
pub struct RecipeMissingInput {
    pub recipe: String,
    #[serde(default = "default_people")]
    pub people: u8,
}

fn default_people() -> u8 {
    2
}

#[derive(Deserialize)]
pub struct LinksQuery {
    pub base: Option<String>,
}

/// One store section with its items, for the grouped view.
#[derive(Serialize)]
pub struct SectionGroup {
    pub id: String,
    pub name: String,
    pub items: Vec<GroceryItem>,
}

pub async fn list(State(app): State<AppState>) -> Json<Vec<GroceryItem>> {
    let data = app.lock();
    Json(data.grocery.items().to_vec())
}

pub async fn grouped(State(app): State<AppState>) -> Json<Vec<SectionGroup>> {
    let data = app.lock();
    let groups = data
        .grocery
        .grouped(&data.section_order)
        .into_iter()
        .map(|(config, items)| SectionGroup {
            id: config.id,
            name: config.name,
            items: items.into_iter().cloned().collect(),
        })
        .collect();
    Json(groups)
}

pub async fn add(
    State(app): State<AppState>,
    Json(input): Json<AddItemInput>,
) -> Result<impl IntoResponse, AppError> {
    input.validate()?;

    let mut data = app.lock();
    data.grocery.add(&input.name, input.quantity, &input.unit)?;
    app.persist_grocery(&data)?;

    let item = data.grocery.find_by_name(&input.name).cloned();
    Ok((StatusCode::CREATED, Json(item)))
}

/// Add one recipe's shortfalls to the list, staples excluded.
pub async fn add_recipe_missing(
    State(app): State<AppState>,
    Json(input): Json<RecipeMissingInput>,
) -> Result<impl IntoResponse, AppError> {
    if !(1..=MAX_PEOPLE).contains(&input.people) {
        return Err(MealPlanError::InvalidPeopleCount(input.people).into());
    }
    let recipe = app
        .catalog()
        .get(&input.recipe)
        .ok_or_else(|| RecipeError::NotFound(input.recipe.clone()))?
        .clone();

    let mut data = app.lock();
    let missing = ReconciliationService::compute_missing(
        &recipe,
        input.people as u32,
        &data.inventory,
    );
    let missing: Vec<MissingEntry> = data.always_have.filter_missing(missing);
    data.grocery.add_missing(&missing)?;
    app.persist_grocery(&data)?;

    Ok(Json(json!({ "added": missing.len(), "entries": missing })))
}

pub async fn set_quantity(
    State(app): State<AppState>,
    Path((id,)): Path<(String,)>,
    Json(input): Json<QuantityInput>,
) -> Result<impl IntoResponse, AppError> {
    let mut data = app.lock();
    data.grocery.set_quantity(&id, input.quantity)?;
    app.persist_grocery(&data)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn increase(
    State(app): State<AppState>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, AppError> {
    let mut data = app.lock();
    data.grocery.increase(&id)?;
    app.persist_grocery(&data)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn decrease(
    State(app): State<AppState>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, AppError> {
    let mut data = app.lock();
    data.grocery.decrease(&id)?;
    app.persist_grocery(&data)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove(
    State(app): State<AppState>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, AppError> {
    let mut data = app.lock();
    let removed = data.grocery.remove(&id)?;
    app.persist_grocery(&data)?;
    Ok(Json(removed))
}

pub async fn clear(State(app): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut data = app.lock();
    data.grocery.clear();
    app.persist_grocery(&data)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Move every purchased item into the fridge and empty the list, as one
/// logical operation; both files are persisted before the response.
pub async fn send_to_fridge(State(app): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut data = app.lock();
    let AppData {
        grocery, inventory, ..
    } = &mut *data;
    let transferred = grocery.send_to_inventory(inventory)?;

    app.persist_inventory(&data)?;
    app.persist_grocery(&data)?;
    Ok(Json(json!({ "transferred": transferred })))
}

pub async fn export(State(app): State<AppState>) -> impl IntoResponse {
    let data = app.lock();
    let text = export_text(&data.grocery, &data.section_order);
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    )
}

pub async fn links(
    State(app): State<AppState>,
    Query(query): Query<LinksQuery>,
) -> impl IntoResponse {
    let base = query
        .base
        .unwrap_or_else(|| DEFAULT_SEARCH_BASE_URL.to_string());
    let data = app.lock();
    let text = export_links(&data.grocery, &base);
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    )
}

pub async fn sections(State(app): State<AppState>) -> Json<Vec<CategoryConfig>> {
    let data = app.lock();
    Json(sorted_for_display(&data.section_order))
}

pub async fn set_sections(
    State(app): State<AppState>,
    Json(order): Json<Vec<CategoryConfig>>,
) -> Result<impl IntoResponse, AppError> {
    if order.is_empty() {
        return Err(AppError::ValidationError(
            "section order must not be empty".to_string(),
        ));
    }

    let mut data = app.lock();
    data.section_order = order;
    app.persist_section_order(&data)?;
    Ok(Json(sorted_for_display(&data.section_order)))
}
