use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use fridgeplan_inventory::InventoryError;
use fridgeplan_mealplan::MealPlanError;
use fridgeplan_recipe::RecipeError;
use fridgeplan_shared::StorageError;
use fridgeplan_shopping::ShoppingError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    InventoryError(#[from] InventoryError),

    #[error(transparent)]
    RecipeError(#[from] RecipeError),

    #[error(transparent)]
    MealPlanError(#[from] MealPlanError),

    #[error(transparent)]
    ShoppingError(#[from] ShoppingError),

    #[error(transparent)]
    PersistenceError(#[from] StorageError),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, body) = match &self {
            AppError::ValidationError(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": msg }),
            ),
            AppError::InventoryError(err) => inventory_response(err),
            AppError::RecipeError(RecipeError::NotFound(name)) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("recipe not found: {name}") }),
            ),
            AppError::RecipeError(err) => {
                tracing::error!("Recipe data error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "recipe data could not be read" }),
                )
            }
            AppError::MealPlanError(MealPlanError::InsufficientIngredients { missing }) => (
                StatusCode::CONFLICT,
                json!({
                    "error": format!("missing ingredients: {}", missing.join(", ")),
                    "missing": missing,
                }),
            ),
            AppError::MealPlanError(err @ MealPlanError::SlotOutOfRange { .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": err.to_string() }),
            ),
            AppError::MealPlanError(err @ MealPlanError::InvalidPeopleCount(_)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": err.to_string() }),
            ),
            AppError::MealPlanError(MealPlanError::Inventory(err)) => inventory_response(err),
            AppError::ShoppingError(err @ ShoppingError::InvalidQuantity { .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": err.to_string() }),
            ),
            AppError::ShoppingError(err @ ShoppingError::NotFound(_)) => (
                StatusCode::NOT_FOUND,
                json!({ "error": err.to_string() }),
            ),
            AppError::ShoppingError(err @ ShoppingError::AlreadyListed(_)) => (
                StatusCode::CONFLICT,
                json!({ "error": err.to_string() }),
            ),
            AppError::ShoppingError(ShoppingError::Inventory(err)) => inventory_response(err),
            AppError::PersistenceError(err) => {
                // In-memory state is still valid; the client may retry the
                // write by repeating the request.
                tracing::error!("Persistence failure: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "failed to persist changes" }),
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}

fn inventory_response(err: &InventoryError) -> (StatusCode, serde_json::Value) {
    match err {
        InventoryError::InvalidQuantity { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "error": err.to_string() }),
        ),
        InventoryError::NotFound(_) => (
            StatusCode::NOT_FOUND,
            json!({ "error": err.to_string() }),
        ),
    }
}
