// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            categories::CategoryCommandService, portfolios::PortfolioCommandService,
            posts::PostCommandService, users::UserCommandService,
        },
        dto::{AuthenticatedUser, TokenType},
        error::ApplicationError,
        ports::{
            i18n::Translator,
            security::{PasswordHasher, TokenService},
            storage::BlobStorage,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            categories::CategoryQueryService,
            portfolios::{ListingSettings, PortfolioQueryService},
            posts::PostQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        category::CategoryRepository,
        message::MessageKey,
        portfolio::{PortfolioImageRepository, PortfolioInfoRepository, PortfolioRepository},
        post::PostRepository,
        user::{ProfileRepository, UserRepository},
    },
};

/// Every repository and adapter the services are built from.
#[derive(Clone)]
pub struct ServiceDependencies {
    pub user_repo: Arc<dyn UserRepository>,
    pub profile_repo: Arc<dyn ProfileRepository>,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub portfolio_repo: Arc<dyn PortfolioRepository>,
    pub image_repo: Arc<dyn PortfolioImageRepository>,
    pub info_repo: Arc<dyn PortfolioInfoRepository>,
    pub post_repo: Arc<dyn PostRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_service: Arc<dyn TokenService>,
    pub storage: Arc<dyn BlobStorage>,
    pub translator: Arc<dyn Translator>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub listing: ListingSettings,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub portfolio_commands: Arc<PortfolioCommandService>,
    pub portfolio_queries: Arc<PortfolioQueryService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    user_repo: Arc<dyn UserRepository>,
    token_service: Arc<dyn TokenService>,
    translator: Arc<dyn Translator>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.profile_repo),
            Arc::clone(&deps.info_repo),
            Arc::clone(&deps.password_hasher),
            Arc::clone(&deps.token_service),
            Arc::clone(&deps.storage),
            Arc::clone(&deps.clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.info_repo),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&deps.category_repo),
            Arc::clone(&deps.portfolio_repo),
            Arc::clone(&deps.slugger),
            Arc::clone(&deps.clock),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(
            &deps.category_repo,
        )));

        let portfolio_commands = Arc::new(PortfolioCommandService::new(
            Arc::clone(&deps.portfolio_repo),
            Arc::clone(&deps.image_repo),
            Arc::clone(&deps.category_repo),
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.storage),
            Arc::clone(&deps.clock),
        ));
        let portfolio_queries = Arc::new(PortfolioQueryService::new(
            Arc::clone(&deps.portfolio_repo),
            Arc::clone(&deps.image_repo),
            Arc::clone(&deps.info_repo),
            Arc::clone(&deps.user_repo),
            deps.listing,
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&deps.post_repo),
            Arc::clone(&deps.user_repo),
            Arc::clone(&deps.clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&deps.post_repo),
            Arc::clone(&deps.user_repo),
        ));

        Self {
            user_commands,
            user_queries,
            category_commands,
            category_queries,
            portfolio_commands,
            portfolio_queries,
            post_commands,
            post_queries,
            user_repo: deps.user_repo,
            token_service: deps.token_service,
            translator: deps.translator,
        }
    }

    pub fn translator(&self) -> Arc<dyn Translator> {
        Arc::clone(&self.translator)
    }

    /// Resolves a raw bearer token into the identity of an active user.
    ///
    /// Only access tokens are accepted. A token for a user that no longer
    /// exists or has been deactivated is rejected like an invalid one.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let verified = self.token_service.verify(token, TokenType::Access).await?;
        let user = self
            .user_repo
            .find_by_id(verified.user_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| {
                tracing::debug!(user_id = %verified.user_id, "token subject missing or inactive");
                ApplicationError::unauthorized(MessageKey::TokenInvalid)
            })?;
        Ok(AuthenticatedUser::from(&user))
    }
}
