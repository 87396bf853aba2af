// tests/support/mocks/store.rs
use async_trait::async_trait;
use folio_core::domain::{
    category::{Category, CategoryId, CategoryRepository, CategoryUpdate, NewCategory},
    errors::{DomainError, DomainResult},
    message::MessageKey,
    portfolio::{
        NewPortfolio, NewPortfolioImage, Portfolio, PortfolioFilter, PortfolioId, PortfolioImage,
        PortfolioImageId, PortfolioImageRepository, PortfolioInfo, PortfolioInfoChanges,
        PortfolioInfoRepository, PortfolioRepository, PortfolioUpdate, Window,
    },
    post::{NewPost, Post, PostId, PostRepository, PostUpdate},
    user::{NewUser, ProfileFields, ProfileRepository, User, UserId, UserRepository, UserUpdate, Username},
};
use std::sync::Mutex;

#[derive(Default)]
struct Tables {
    next_id: i64,
    users: Vec<User>,
    categories: Vec<Category>,
    portfolios: Vec<Portfolio>,
    images: Vec<PortfolioImage>,
    infos: Vec<PortfolioInfo>,
    posts: Vec<Post>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Every repository over one set of in-memory tables, enforcing the same
/// uniqueness and foreign-key rules as the migrations.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_info(&self, info: PortfolioInfo) {
        self.tables.lock().unwrap().infos.push(info);
    }

    pub fn portfolio_count(&self) -> usize {
        self.tables.lock().unwrap().portfolios.len()
    }

    pub fn image_count(&self) -> usize {
        self.tables.lock().unwrap().images.len()
    }

    pub fn category(&self, id: i64) -> Option<Category> {
        self.tables
            .lock()
            .unwrap()
            .categories
            .iter()
            .find(|c| c.id.0 == id)
            .cloned()
    }

    pub fn user(&self, id: i64) -> Option<User> {
        self.tables
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.id.0 == id)
            .cloned()
    }
}

fn matches(filter: PortfolioFilter, portfolio: &Portfolio) -> bool {
    filter
        .category_id
        .is_none_or(|id| portfolio.category_id == Some(id))
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.tables.lock().unwrap().users.len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict(MessageKey::UsernameTaken.into()));
        }
        let user = User {
            id: UserId(tables.next_id()),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            is_staff: new_user.is_staff,
            is_superuser: new_user.is_superuser,
            is_active: true,
            job_title: None,
            phone_number: None,
            location: None,
            about_me: None,
            about_me_ar: None,
            date_joined: new_user.date_joined,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| &u.username == username).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut tables = self.tables.lock().unwrap();
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| DomainError::not_found(MessageKey::UserNotFound))?;
        if let Some(hash) = update.password_hash {
            user.set_password(hash);
        }
        Ok(user.clone())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryStore {
    async fn update_profile(
        &self,
        user_id: UserId,
        fields: ProfileFields,
        info: Option<PortfolioInfoChanges>,
    ) -> DomainResult<(User, Option<PortfolioInfo>)> {
        let mut tables = self.tables.lock().unwrap();
        let user = {
            let user = tables
                .users
                .iter_mut()
                .find(|u| u.id == user_id)
                .ok_or_else(|| DomainError::not_found(MessageKey::UserNotFound))?;
            fields.apply_to(user);
            user.clone()
        };

        let existing = tables
            .infos
            .iter()
            .position(|i| i.user_id == Some(user_id));
        let info = match (info, existing) {
            (Some(changes), Some(index)) => {
                changes.apply_to(&mut tables.infos[index]);
                Some(tables.infos[index].clone())
            }
            (Some(changes), None) => {
                let id = tables.next_id();
                let info = changes.into_new(id, user_id);
                tables.infos.push(info.clone());
                Some(info)
            }
            (None, Some(index)) => Some(tables.infos[index].clone()),
            (None, None) => None,
        };
        Ok((user, info))
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut tables = self.tables.lock().unwrap();
        let duplicate = tables
            .categories
            .iter()
            .any(|c| c.user_id == category.user_id && c.slug == category.slug);
        if duplicate {
            return Err(DomainError::Conflict(MessageKey::CategoryAlreadyExists.into()));
        }
        let created = Category {
            id: CategoryId(tables.next_id()),
            user_id: category.user_id,
            name: category.name,
            name_ar: category.name_ar,
            slug: category.slug,
            icon: category.icon,
            description: category.description,
            description_ar: category.description_ar,
            features: category.features,
            order: category.order,
            created_at: category.created_at,
            updated_at: category.created_at,
        };
        tables.categories.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: CategoryUpdate) -> DomainResult<Category> {
        let mut tables = self.tables.lock().unwrap();
        let category = tables
            .categories
            .iter_mut()
            .find(|c| c.id == update.id)
            .ok_or_else(|| DomainError::not_found(MessageKey::CategoryNotFound))?;
        update.apply_to(category);
        Ok(category.clone())
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        if tables.portfolios.iter().any(|p| p.category_id == Some(id)) {
            return Err(DomainError::Protected(MessageKey::CategoryProtected.into()));
        }
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        if tables.categories.len() == before {
            return Err(DomainError::not_found(MessageKey::CategoryNotFound));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut categories = self.tables.lock().unwrap().categories.clone();
        categories.sort_by(|a, b| {
            (a.order, a.name.as_str(), a.id.0).cmp(&(b.order, b.name.as_str(), b.id.0))
        });
        Ok(categories)
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryStore {
    async fn insert(&self, portfolio: NewPortfolio) -> DomainResult<Portfolio> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(category_id) = portfolio.category_id {
            if !tables.categories.iter().any(|c| c.id == category_id) {
                return Err(DomainError::invalid(
                    "category",
                    MessageKey::PortfolioCategoryMissing,
                ));
            }
        }
        let created = Portfolio {
            id: PortfolioId(tables.next_id()),
            author_id: portfolio.author_id,
            title: portfolio.title,
            subtitle: portfolio.subtitle,
            image: portfolio.image,
            category_id: portfolio.category_id,
            body: portfolio.body,
            completed: portfolio.completed,
            created_at: portfolio.created_at,
            updated_at: portfolio.created_at,
        };
        tables.portfolios.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: PortfolioUpdate) -> DomainResult<Portfolio> {
        let mut tables = self.tables.lock().unwrap();
        let portfolio = tables
            .portfolios
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::not_found(MessageKey::PortfolioNotFound))?;
        update.apply_to(portfolio);
        Ok(portfolio.clone())
    }

    async fn delete(&self, id: PortfolioId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.portfolios.len();
        tables.portfolios.retain(|p| p.id != id);
        if tables.portfolios.len() == before {
            return Err(DomainError::not_found(MessageKey::PortfolioNotFound));
        }
        tables.images.retain(|i| i.portfolio_id != id);
        Ok(())
    }

    async fn find_by_id(&self, id: PortfolioId) -> DomainResult<Option<Portfolio>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.portfolios.iter().find(|p| p.id == id).cloned())
    }

    async fn count(&self, filter: PortfolioFilter) -> DomainResult<u64> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.portfolios.iter().filter(|p| matches(filter, p)).count() as u64)
    }

    async fn list(&self, filter: PortfolioFilter, window: Window) -> DomainResult<Vec<Portfolio>> {
        let tables = self.tables.lock().unwrap();
        let mut portfolios: Vec<Portfolio> = tables
            .portfolios
            .iter()
            .filter(|p| matches(filter, p))
            .cloned()
            .collect();
        portfolios.sort_by(|a, b| (b.created_at, b.id.0).cmp(&(a.created_at, a.id.0)));
        Ok(portfolios
            .into_iter()
            .skip(usize::try_from(window.offset).unwrap())
            .take(usize::try_from(window.limit).unwrap())
            .collect())
    }
}

#[async_trait]
impl PortfolioImageRepository for InMemoryStore {
    async fn insert(&self, image: NewPortfolioImage) -> DomainResult<PortfolioImage> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.portfolios.iter().any(|p| p.id == image.portfolio_id) {
            return Err(DomainError::not_found(MessageKey::PortfolioNotFound));
        }
        let created = PortfolioImage {
            id: PortfolioImageId(tables.next_id()),
            portfolio_id: image.portfolio_id,
            image: image.image,
            caption: image.caption,
            created_at: image.created_at,
        };
        tables.images.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, portfolio_id: PortfolioId, id: PortfolioImageId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.images.len();
        tables
            .images
            .retain(|i| !(i.portfolio_id == portfolio_id && i.id == id));
        if tables.images.len() == before {
            return Err(DomainError::not_found(MessageKey::PortfolioImageNotFound));
        }
        Ok(())
    }

    async fn find(
        &self,
        portfolio_id: PortfolioId,
        id: PortfolioImageId,
    ) -> DomainResult<Option<PortfolioImage>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .images
            .iter()
            .find(|i| i.portfolio_id == portfolio_id && i.id == id)
            .cloned())
    }

    async fn list_for_portfolio(
        &self,
        portfolio_id: PortfolioId,
    ) -> DomainResult<Vec<PortfolioImage>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .images
            .iter()
            .filter(|i| i.portfolio_id == portfolio_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PortfolioInfoRepository for InMemoryStore {
    async fn first(&self) -> DomainResult<Option<PortfolioInfo>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.infos.iter().min_by_key(|i| i.id).cloned())
    }

    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<PortfolioInfo>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .infos
            .iter()
            .find(|i| i.user_id == Some(user_id))
            .cloned())
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut tables = self.tables.lock().unwrap();
        let created = Post {
            id: PostId(tables.next_id()),
            author_id: post.author_id,
            title: post.title,
            subtitle: post.subtitle,
            category: post.category,
            body: post.body,
            created_at: post.created_at,
            updated_at: post.created_at,
        };
        tables.posts.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut tables = self.tables.lock().unwrap();
        let post = tables
            .posts
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::not_found(MessageKey::PostNotFound))?;
        update.apply_to(post);
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.posts.len();
        tables.posts.retain(|p| p.id != id);
        if tables.posts.len() == before {
            return Err(DomainError::not_found(MessageKey::PostNotFound));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn list_by_author(&self, author_id: UserId) -> DomainResult<Vec<Post>> {
        let tables = self.tables.lock().unwrap();
        let mut posts: Vec<Post> = tables
            .posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| (b.created_at, b.id.0).cmp(&(a.created_at, a.id.0)));
        Ok(posts)
    }
}
