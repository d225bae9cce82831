use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Ordered list of every rule the input broke.
    #[error("validation error: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(vec![msg.into()])
    }
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Db(e.to_string())
    }
}
