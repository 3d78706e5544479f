//! Dish operations over the store.

use crate::error::AppError;
use crate::model::{Dish, DishDraft};
use crate::service::validation::{
    check_id_matches, positive_number, required_str, run_chain, Check, Submission,
};
use crate::store::Store;
use serde_json::{Map, Number, Value};

const NAME_MISSING: &str = "Dish must include a name.";
const DESCRIPTION_MISSING: &str = "Dish must include a description.";
const PRICE_INVALID: &str = "Dish must include a price and it must be an integer greater than 0.";
const IMAGE_URL_MISSING: &str = "Dish must include an image_url.";

fn has_name(s: &Submission<'_>) -> Result<(), AppError> {
    required_str(s.body, "name", NAME_MISSING).map(drop)
}

fn has_description(s: &Submission<'_>) -> Result<(), AppError> {
    required_str(s.body, "description", DESCRIPTION_MISSING).map(drop)
}

fn has_price(s: &Submission<'_>) -> Result<(), AppError> {
    price(s.body).map(drop)
}

fn has_image_url(s: &Submission<'_>) -> Result<(), AppError> {
    required_str(s.body, "image_url", IMAGE_URL_MISSING).map(drop)
}

fn id_matches_route(s: &Submission<'_>) -> Result<(), AppError> {
    check_id_matches(s, "Dish")
}

fn price(body: &Map<String, Value>) -> Result<Number, AppError> {
    positive_number(body.get("price")).ok_or_else(|| AppError::bad_request(PRICE_INVALID))
}

const CREATE_CHECKS: &[Check] = &[has_name, has_description, has_price, has_image_url];
const UPDATE_CHECKS: &[Check] = &[
    has_name,
    has_description,
    has_price,
    has_image_url,
    id_matches_route,
];

fn draft(submission: &Submission<'_>, chain: &[Check]) -> Result<DishDraft, AppError> {
    run_chain(submission, chain)?;
    let body = submission.body;
    Ok(DishDraft {
        name: required_str(body, "name", NAME_MISSING)?.to_owned(),
        description: required_str(body, "description", DESCRIPTION_MISSING)?.to_owned(),
        price: price(body)?,
        image_url: required_str(body, "image_url", IMAGE_URL_MISSING)?.to_owned(),
    })
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Dish does not exist: {id}."))
}

pub struct DishService;

impl DishService {
    pub fn list(store: &Store) -> Vec<Dish> {
        store.dishes().to_vec()
    }

    pub fn create(store: &mut Store, body: &Map<String, Value>) -> Result<Dish, AppError> {
        let draft = draft(&Submission::new(body), CREATE_CHECKS)?;
        let dish = store.insert_dish(draft).clone();
        tracing::info!(dish_id = %dish.id, "dish created");
        Ok(dish)
    }

    pub fn read(store: &Store, id: &str) -> Result<Dish, AppError> {
        store.dish(id).cloned().ok_or_else(|| not_found(id))
    }

    /// Existence is checked before the body; the body's id never replaces the route id.
    pub fn update(store: &mut Store, id: &str, body: &Map<String, Value>) -> Result<Dish, AppError> {
        let dish = store.dish_mut(id).ok_or_else(|| not_found(id))?;
        let draft = draft(&Submission::for_route(id, body), UPDATE_CHECKS)?;
        dish.apply(draft);
        tracing::info!(dish_id = %dish.id, "dish updated");
        Ok(dish.clone())
    }
}
