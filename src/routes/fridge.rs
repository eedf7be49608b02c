use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use validator::Validate;

use fridgeplan_inventory::{FridgeCategory, InventoryItem};
use fridgeplan_shared::{CategoryConfig, sorted_for_display};

use super::AppState;
use crate::error::AppError;

#[derive(Deserialize, Validate)]
pub struct AddFoodInput {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: Option<FridgeCategory>,
}

#[derive(Deserialize)]
pub struct QuantityInput {
    pub quantity: f64,
}

pub async fn list(State(app): State<AppState>) -> Json<Vec<InventoryItem>> {
    let data = app.lock();
    Json(data.inventory.all().cloned().collect())
}

pub async fn add(
    State(app): State<AppState>,
    Json(input): Json<AddFoodInput>,
) -> Result<impl IntoResponse, AppError> {
    input.validate()?;
    if input.quantity.is_nan() || input.quantity <= 0.0 {
        return Err(AppError::ValidationError(
            "quantity must be greater than zero".to_string(),
        ));
    }

    let mut data = app.lock();
    data.inventory
        .upsert(&input.name, input.quantity, &input.unit, input.category)?;
    app.persist_inventory(&data)?;

    let item = data.inventory.find(&input.name).cloned();
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn set_quantity(
    State(app): State<AppState>,
    Path((name,)): Path<(String,)>,
    Json(input): Json<QuantityInput>,
) -> Result<impl IntoResponse, AppError> {
    let mut data = app.lock();
    data.inventory.set_quantity(&name, input.quantity)?;
    app.persist_inventory(&data)?;

    let item = data.inventory.find(&name).cloned();
    Ok(Json(item))
}

pub async fn remove(
    State(app): State<AppState>,
    Path((name,)): Path<(String,)>,
) -> Result<impl IntoResponse, AppError> {
    let mut data = app.lock();
    let removed = data.inventory.remove(&name)?;
    app.persist_inventory(&data)?;
    Ok(Json(removed))
}

pub async fn clear(State(app): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut data = app.lock();
    data.inventory.clear();
    app.persist_inventory(&data)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn categories(State(app): State<AppState>) -> Json<Vec<CategoryConfig>> {
    let data = app.lock();
    Json(sorted_for_display(&data.fridge_order))
}

pub async fn set_categories(
    State(app): State<AppState>,
    Json(order): Json<Vec<CategoryConfig>>,
) -> Result<impl IntoResponse, AppError> {
    if order.is_empty() {
        return Err(AppError::ValidationError(
            "category order must not be empty".to_string(),
        ));
    }

    let mut data = app.lock();
    data.fridge_order = order;
    app.persist_fridge_order(&data)?;
    Ok(Json(sorted_for_display(&data.fridge_order)))
}
