use thiserror::Error;

/// Order store failures
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Integrity violation: {0}")]
    Integrity(String),
}

/// Order service failures
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Wrong order number: {0}")]
    InvalidOrderNumber(String),

    #[error("Order {0} doesn't exist")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
