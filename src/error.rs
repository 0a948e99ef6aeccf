use thiserror::Error;

/// Caller mistakes in a query. User input problems are normalized instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Page size must be greater than zero, got {0}")]
    InvalidPageSize(i64),

    #[error("Unsupported sort key `{0}` (supported: price)")]
    UnsupportedSortKey(String),

    #[error("Unsupported sort order `{0}` (expected ascending or descending)")]
    UnsupportedSortOrder(String),
}

pub type QueryResult<T> = Result<T, QueryError>;
