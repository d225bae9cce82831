//! Rental lifecycle: create (price), close (delay fee), delete, list.
//!
//! `rules` holds the pure decisions; `service` runs them inside one
//! transaction per operation with the affected row locked `FOR UPDATE`.

pub mod rules;
pub mod service;

pub use service::{
    close_rental, close_rental_at, create_rental, create_rental_at, delete_rental, get_rental,
    list_rentals, CustomerSummary, GameSummary, RentalFilter, RentalView,
};
