use business::domain::errors::RepositoryError;

/// Translates a driver error into the domain's repository error.
pub(crate) fn to_repository_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::Duplicated
        }
        sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_) => {
            tracing::error!(error = %err, "stored row does not match the domain model");
            RepositoryError::Persistence
        }
        _ => {
            tracing::error!(error = %err, "database query failed");
            RepositoryError::DatabaseError
        }
    }
}
