//! Shared building blocks for the rental API crates.
//! - `utils::logging`: tracing subscriber setup used by every binary and test harness
//! - `types`: small response types shared across the HTTP layer

pub mod types;
pub mod utils;
