use std::sync::Arc;

use logger::TracingLogger;
use persistence::catalog::repository::CatalogRepositoryPostgres;
use persistence::membership::repository::MembershipRepositoryPostgres;
use persistence::recipe::repository::RecipeRepositoryPostgres;

use business::application::catalog::list_tags::ListTagsUseCaseImpl;
use business::application::catalog::search_ingredients::SearchIngredientsUseCaseImpl;
use business::application::membership::add::AddMembershipUseCaseImpl;
use business::application::membership::remove::RemoveMembershipUseCaseImpl;
use business::application::recipe::create::CreateRecipeUseCaseImpl;
use business::application::recipe::delete::DeleteRecipeUseCaseImpl;
use business::application::recipe::flags::MembershipFlags;
use business::application::recipe::get_all::GetAllRecipesUseCaseImpl;
use business::application::recipe::get_by_id::GetRecipeByIdUseCaseImpl;
use business::application::recipe::update::UpdateRecipeUseCaseImpl;
use business::application::shopping_list::generate::GenerateShoppingListUseCaseImpl;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::logger::Logger;
use business::domain::membership::model::Relation;
use business::domain::membership::repository::MembershipRepository;
use business::domain::recipe::repository::RecipeRepository;

use crate::api::catalog::routes::CatalogApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::membership::routes::{MembershipApi, MembershipHandlers};
use crate::api::recipe::routes::RecipeApi;
use crate::api::shopping_list::routes::ShoppingListApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub recipe_api: RecipeApi,
    pub catalog_api: CatalogApi,
    pub membership_api: MembershipApi,
    pub shopping_list_api: ShoppingListApi,
}

fn membership_handlers(
    memberships: Arc<dyn MembershipRepository>,
    recipes: Arc<dyn RecipeRepository>,
    logger: Arc<dyn Logger>,
) -> MembershipHandlers {
    MembershipHandlers {
        add: Arc::new(AddMembershipUseCaseImpl {
            memberships: memberships.clone(),
            recipes: recipes.clone(),
            logger: logger.clone(),
        }),
        remove: Arc::new(RemoveMembershipUseCaseImpl {
            memberships,
            recipes,
            logger,
        }),
    }
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let recipe_repository: Arc<dyn RecipeRepository> =
            Arc::new(RecipeRepositoryPostgres::new(pool.clone()));
        let cart_repository: Arc<dyn MembershipRepository> = Arc::new(
            MembershipRepositoryPostgres::new(pool.clone(), Relation::ShoppingCart),
        );
        let favorites_repository: Arc<dyn MembershipRepository> = Arc::new(
            MembershipRepositoryPostgres::new(pool.clone(), Relation::Favorites),
        );
        let catalog_repository: Arc<dyn CatalogRepository> =
            Arc::new(CatalogRepositoryPostgres::new(pool));
        let flags = || MembershipFlags {
            shopping_cart: cart_repository.clone(),
            favorites: favorites_repository.clone(),
        };

        // Recipe use cases
        let create_use_case = Arc::new(CreateRecipeUseCaseImpl {
            repository: recipe_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllRecipesUseCaseImpl {
            repository: recipe_repository.clone(),
            flags: flags(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetRecipeByIdUseCaseImpl {
            repository: recipe_repository.clone(),
            flags: flags(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateRecipeUseCaseImpl {
            repository: recipe_repository.clone(),
            flags: flags(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteRecipeUseCaseImpl {
            repository: recipe_repository.clone(),
            logger: logger.clone(),
        });

        // Catalogs
        let list_tags_use_case = Arc::new(ListTagsUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let search_ingredients_use_case = Arc::new(SearchIngredientsUseCaseImpl {
            repository: catalog_repository,
            logger: logger.clone(),
        });

        // Shopping list
        let generate_use_case = Arc::new(GenerateShoppingListUseCaseImpl {
            cart: cart_repository.clone(),
            recipes: recipe_repository.clone(),
            logger: logger.clone(),
        });

        let recipe_api = RecipeApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );
        let catalog_api = CatalogApi::new(list_tags_use_case, search_ingredients_use_case);
        let membership_api = MembershipApi::new(
            membership_handlers(cart_repository, recipe_repository.clone(), logger.clone()),
            membership_handlers(favorites_repository, recipe_repository, logger),
        );
        let shopping_list_api = ShoppingListApi::new(generate_use_case);

        Ok(Self {
            health_api,
            recipe_api,
            catalog_api,
            membership_api,
            shopping_list_api,
        })
    }
}
