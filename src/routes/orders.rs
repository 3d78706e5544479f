use crate::handlers::fallback::method_not_allowed;
use crate::handlers::orders::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn order_routes(state: AppState) -> Router {
    Router::new()
        .route("/orders", get(list).post(create).fallback(method_not_allowed))
        .route(
            "/orders/:order_id",
            get(read)
                .put(update)
                .delete(delete_handler)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}
