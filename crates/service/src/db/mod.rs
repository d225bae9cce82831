//! SeaORM-backed catalogue and customer operations.

pub mod category_service;
pub mod customer_service;
pub mod game_service;
pub mod query;
