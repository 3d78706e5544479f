use crate::handlers::dishes::{create, list, read, update};
use crate::handlers::fallback::method_not_allowed;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn dish_routes(state: AppState) -> Router {
    Router::new()
        .route("/dishes", get(list).post(create).fallback(method_not_allowed))
        .route(
            "/dishes/:dish_id",
            get(read).put(update).fallback(method_not_allowed),
        )
        .with_state(state)
}
