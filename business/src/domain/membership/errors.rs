use super::model::Relation;

#[derive(Debug, thiserror::Error)]
pub enum MembershipError {
    #[error("recipe.not_found")]
    RecipeNotFound,
    #[error("{0}.already_exists")]
    AlreadyExists(Relation),
    #[error("{0}.not_a_member")]
    NotAMember(Relation),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
