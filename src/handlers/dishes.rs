//! Dish handlers: list, create, read, update.

use crate::error::AppError;
use crate::extractors::DataBody;
use crate::response::{success_many, success_one, success_one_ok};
use crate::service::DishService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let dishes = DishService::list(&*state.read()?);
    Ok(success_many(dishes))
}

pub async fn create(
    State(state): State<AppState>,
    DataBody(body): DataBody,
) -> Result<impl IntoResponse, AppError> {
    let dish = DishService::create(&mut *state.write()?, &body)?;
    Ok(success_one(dish))
}

pub async fn read(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let dish = DishService::read(&*state.read()?, &dish_id)?;
    Ok(success_one_ok(dish))
}

pub async fn update(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
    DataBody(body): DataBody,
) -> Result<impl IntoResponse, AppError> {
    let dish = DishService::update(&mut *state.write()?, &dish_id, &body)?;
    Ok(success_one_ok(dish))
}
