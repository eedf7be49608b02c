use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use validator::Validate;

use fridgeplan_shopping::AlwaysHaveItem;

use super::AppState;
use crate::error::AppError;

#[derive(Deserialize, Validate)]
pub struct AddStapleInput {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
}

pub async fn list(State(app): State<AppState>) -> Json<Vec<AlwaysHaveItem>> {
    let data = app.lock();
    Json(data.always_have.sorted().into_iter().cloned().collect())
}

pub async fn add(
    State(app): State<AppState>,
    Json(input): Json<AddStapleInput>,
) -> Result<impl IntoResponse, AppError> {
    input.validate()?;

    let mut data = app.lock();
    let item = data.always_have.add(&input.name)?;
    app.persist_always_have(&data)?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn remove(
    State(app): State<AppState>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, AppError> {
    let mut data = app.lock();
    let removed = data.always_have.remove(&id)?;
    app.persist_always_have(&data)?;
    Ok(Json(removed))
}

pub async fn clear(State(app): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut data = app.lock();
    data.always_have.clear();
    app.persist_always_have(&data)?;
    Ok(StatusCode::NO_CONTENT)
}
