use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrudError {
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    /// Statement failures surface unchanged, e.g. "no rows returned by a query ..."
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, CrudError>;
