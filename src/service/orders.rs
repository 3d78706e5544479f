//! Order operations over the store.

use crate::error::AppError;
use crate::model::{Order, OrderDish, OrderDraft, OrderStatus};
use crate::service::validation::{
    check_id_matches, positive_number, required_str, run_chain, Check, Submission,
};
use crate::store::Store;
use serde_json::{Map, Number, Value};

const DELIVER_TO_MISSING: &str = "Order must include a deliverTo property.";
const MOBILE_NUMBER_MISSING: &str = "Order must include a mobileNumber property.";
const DISHES_MISSING: &str = "Order must include at least one dish.";
const STATUS_INVALID: &str =
    "Order must have a status of pending, preparing, out-for-delivery, or delivered.";
const DELIVERED_IMMUTABLE: &str = "A delivered order cannot be changed.";
const DELETE_NOT_PENDING: &str = "An order cannot be deleted unless it is pending.";

fn has_deliver_to(s: &Submission<'_>) -> Result<(), AppError> {
    required_str(s.body, "deliverTo", DELIVER_TO_MISSING).map(drop)
}

fn has_mobile_number(s: &Submission<'_>) -> Result<(), AppError> {
    required_str(s.body, "mobileNumber", MOBILE_NUMBER_MISSING).map(drop)
}

fn has_dishes(s: &Submission<'_>) -> Result<(), AppError> {
    dish_entries(s.body).map(drop)
}

/// Every entry is inspected so the message can list all offenders at once.
fn has_valid_quantities(s: &Submission<'_>) -> Result<(), AppError> {
    let invalid = invalid_quantity_indices(dish_entries(s.body)?);
    match invalid.as_slice() {
        [] => Ok(()),
        [index] => Err(AppError::BadRequest(format!(
            "Dish {index} must have a quantity that is an integer greater than 0."
        ))),
        many => {
            let listed = many
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            Err(AppError::BadRequest(format!(
                "Dishes {listed} must have a quantity that is an integer greater than 0."
            )))
        }
    }
}

fn id_matches_route(s: &Submission<'_>) -> Result<(), AppError> {
    check_id_matches(s, "Order")
}

/// Only the submitted status is inspected; the stored status plays no part.
fn has_changeable_status(s: &Submission<'_>) -> Result<(), AppError> {
    match status(s.body)? {
        OrderStatus::Delivered => Err(AppError::bad_request(DELIVERED_IMMUTABLE)),
        _ => Ok(()),
    }
}

fn dish_entries(body: &Map<String, Value>) -> Result<&[Value], AppError> {
    body.get("dishes")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .filter(|dishes| !dishes.is_empty())
        .ok_or_else(|| AppError::bad_request(DISHES_MISSING))
}

fn invalid_quantity_indices(dishes: &[Value]) -> Vec<usize> {
    dishes
        .iter()
        .enumerate()
        .filter(|(_, dish)| quantity(dish).is_none())
        .map(|(index, _)| index)
        .collect()
}

fn quantity(dish: &Value) -> Option<Number> {
    positive_number(dish.get("quantity"))
}

fn status(body: &Map<String, Value>) -> Result<OrderStatus, AppError> {
    body.get("status")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| AppError::bad_request(STATUS_INVALID))
}

fn order_dish(entry: &Value) -> Result<OrderDish, AppError> {
    let quantity = quantity(entry).ok_or_else(|| AppError::bad_request(DISHES_MISSING))?;
    let mut dish = entry.as_object().cloned().unwrap_or_default();
    dish.remove("quantity");
    Ok(OrderDish { dish, quantity })
}

const CREATE_CHECKS: &[Check] = &[
    has_deliver_to,
    has_mobile_number,
    has_dishes,
    has_valid_quantities,
];
const UPDATE_CHECKS: &[Check] = &[
    has_deliver_to,
    has_mobile_number,
    has_dishes,
    has_valid_quantities,
    id_matches_route,
    has_changeable_status,
];

fn draft(submission: &Submission<'_>, chain: &[Check]) -> Result<OrderDraft, AppError> {
    run_chain(submission, chain)?;
    let body = submission.body;
    let status = match submission.route_id {
        Some(_) => Some(status(body)?),
        None => None,
    };
    Ok(OrderDraft {
        deliver_to: required_str(body, "deliverTo", DELIVER_TO_MISSING)?.to_owned(),
        mobile_number: required_str(body, "mobileNumber", MOBILE_NUMBER_MISSING)?.to_owned(),
        status,
        dishes: dish_entries(body)?
            .iter()
            .map(order_dish)
            .collect::<Result<_, _>>()?,
    })
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("No matching order found for orderId {id}."))
}

pub struct OrderService;

impl OrderService {
    pub fn list(store: &Store) -> Vec<Order> {
        store.orders().to_vec()
    }

    /// New orders always start out pending.
    pub fn create(store: &mut Store, body: &Map<String, Value>) -> Result<Order, AppError> {
        let draft = draft(&Submission::new(body), CREATE_CHECKS)?;
        let order = store.insert_order(draft).clone();
        tracing::info!(order_id = %order.id, dishes = order.dishes.len(), "order created");
        Ok(order)
    }

    pub fn read(store: &Store, id: &str) -> Result<Order, AppError> {
        store.order(id).cloned().ok_or_else(|| not_found(id))
    }

    pub fn update(store: &mut Store, id: &str, body: &Map<String, Value>) -> Result<Order, AppError> {
        let order = store.order_mut(id).ok_or_else(|| not_found(id))?;
        let draft = draft(&Submission::for_route(id, body), UPDATE_CHECKS)?;
        order.apply(draft);
        tracing::info!(order_id = %order.id, status = %order.status, "order updated");
        Ok(order.clone())
    }

    pub fn delete(store: &mut Store, id: &str) -> Result<(), AppError> {
        let order = store.order(id).ok_or_else(|| not_found(id))?;
        if order.status != OrderStatus::Pending {
            return Err(AppError::bad_request(DELETE_NOT_PENDING));
        }
        store.remove_order(id);
        tracing::info!(order_id = %id, "order deleted");
        Ok(())
    }
}
