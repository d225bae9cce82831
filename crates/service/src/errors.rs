use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input broke one or more field rules; messages are ordered.
    #[error("validation error: {}", .0.join("; "))]
    Validation(Vec<String>),
    /// A foreign id in the input does not resolve to a row.
    #[error("reference error: {0}")]
    Reference(String),
    /// Every copy of the game is currently rented out.
    #[error("unavailable: {0}")]
    Unavailable(String),
    /// Duplicate unique key or an invalid state transition.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn reference(entity: &str) -> Self { Self::Reference(format!("{} not found", entity)) }

    pub fn invalid(msg: impl Into<String>) -> Self { Self::Validation(vec![msg.into()]) }

    /// Map a store error, turning unique-key violations into `Conflict(msg)`.
    pub fn from_db(e: DbErr, conflict_msg: &str) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(conflict_msg.to_string()),
            _ => Self::Db(e.to_string()),
        }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::Reference(_) => 1002,
            ServiceError::Unavailable(_) => 1003,
            ServiceError::Conflict(_) => 1004,
            ServiceError::NotFound(_) => 1005,
            ServiceError::Db(_) => 1200,
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { Self::Db(e.to_string()) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(v) => Self::Validation(v),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}
