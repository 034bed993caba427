/// Errors raised by repository ports.
/// Variants use code-style identifiers so the HTTP layer can forward them as-is.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// A stored row could not be turned back into a domain value.
    #[error("repository.persistence")]
    Persistence,
    /// A uniqueness constraint rejected the write.
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}
