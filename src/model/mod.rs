//! Record types as they appear on the wire and in the store.

pub mod dish;
pub mod order;

pub use dish::{Dish, DishDraft};
pub use order::{Order, OrderDish, OrderDraft, OrderStatus};
