//! Service layer providing the rental business operations on top of models.
//! - `rental`: rental lifecycle (pricing, returns, delay fees, deletion)
//! - `db`: category, game and customer CRUD
//! - `errors`: the error taxonomy surfaced to the HTTP layer

pub mod errors;
pub mod pagination;
pub mod db;
pub mod rental;
#[cfg(test)]
pub mod test_support;
