use thiserror::Error;

/// Failure modes of the external quote fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("exchange API returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed quote payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("fetch deadline exceeded")]
    DeadlineExceeded,
}

/// Failure modes of the quote insert.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("persist deadline exceeded")]
    DeadlineExceeded,
}
