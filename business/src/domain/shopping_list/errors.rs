use crate::domain::membership::model::Relation;

#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    /// The list was wired to a store other than the shopping cart.
    #[error("shopping_list.misconfigured_store")]
    MisconfiguredStore(Relation),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
