//! Route tables and the assembled application router.

mod common;
mod dishes;
mod orders;

pub use common::common_routes;
pub use dishes::dish_routes;
pub use orders::order_routes;

use crate::handlers::fallback::not_found;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

/// Every route plus the not-found fallback, with request bodies capped at `body_limit` bytes.
/// The cap is enforced while the body is read, so an oversized request gets the usual
/// `{"message"}` error whether or not it declares a `Content-Length`.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(dish_routes(state.clone()))
        .merge(order_routes(state))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}
