//! Order handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::extractors::DataBody;
use crate::response::{success_many, success_one, success_one_ok};
use crate::service::OrderService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::list(&*state.read()?);
    Ok(success_many(orders))
}

pub async fn create(
    State(state): State<AppState>,
    DataBody(body): DataBody,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::create(&mut *state.write()?, &body)?;
    Ok(success_one(order))
}

pub async fn read(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::read(&*state.read()?, &order_id)?;
    Ok(success_one_ok(order))
}

pub async fn update(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    DataBody(body): DataBody,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::update(&mut *state.write()?, &order_id, &body)?;
    Ok(success_one_ok(order))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    OrderService::delete(&mut *state.write()?, &order_id)?;
    Ok(StatusCode::NO_CONTENT)
}
