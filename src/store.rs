/// Store-originated failures, classified from the driver error. Handlers
/// report every variant through the same flat text line; the classification
/// only feeds the logs.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("connection failure: {0}")]
    ConnectionFailure(sqlx::Error),
    #[error("constraint violation: {0}")]
    ConstraintViolation(sqlx::Error),
    #[error("query execution failure: {0}")]
    QueryExecutionFailure(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => Self::ConnectionFailure(e),
            sqlx::Error::Database(db)
                if db.is_unique_violation()
                    || db.is_check_violation()
                    || db.is_foreign_key_violation() =>
            {
                Self::ConstraintViolation(e)
            }
            _ => Self::QueryExecutionFailure(e),
        }
    }
}
