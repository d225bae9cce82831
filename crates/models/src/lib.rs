//! SeaORM entities for the rental store plus the input validators.
//! - `category`, `game`, `customer`, `rental`: one module per table
//! - `validation`: field rules producing ordered violation lists
//! - `db`: pool construction from `configs::DatabaseConfig`

pub mod errors;
pub mod db;
pub mod validation;
pub mod category;
pub mod game;
pub mod customer;
pub mod rental;

#[cfg(test)]
mod tests;
