//! GrubDash: REST backend for a restaurant ordering app, with dishes and orders held in memory.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod id;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{IdStrategy, Settings};
pub use error::{AppError, ConfigError};
pub use id::{IdGenerator, SequentialIds, UuidIds};
pub use model::{Dish, Order, OrderDish, OrderStatus};
pub use response::{success_many, success_one, success_one_ok};
pub use routes::{app, common_routes, dish_routes, order_routes};
pub use service::{DishService, OrderService};
pub use state::AppState;
pub use store::{load_seed, Seed, Store};
