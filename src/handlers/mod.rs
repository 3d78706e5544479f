//! HTTP handlers for dishes and orders, plus fallbacks.

pub mod dishes;
pub mod fallback;
pub mod orders;
