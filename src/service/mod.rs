//! Dish and order services: validation chains plus the store mutation they guard.

mod dishes;
mod orders;
pub mod validation;
pub use dishes::DishService;
pub use orders::OrderService;
