use super::PortfolioQueryService;
use crate::{
    application::{
        commands::portfolios::policy,
        dto::{AuthenticatedUser, Listing, Page, PortfolioDto, pagination::last_page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryId,
        message::MessageKey,
        portfolio::{PortfolioFilter, Window},
    },
};

pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, Default)]
pub struct ListPortfoliosQuery {
    pub category_id: Option<i64>,
    /// Only the most recent entries (six by default).
    pub recent: bool,
    /// Return a bare array instead of a page envelope.
    pub no_pagination: bool,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl PortfolioQueryService {
    pub async fn list_portfolios(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListPortfoliosQuery,
    ) -> ApplicationResult<Listing<PortfolioDto>> {
        policy::READ.authorize_request(actor)?;

        let filter = PortfolioFilter {
            category_id: query.category_id.map(CategoryId::new).transpose()?,
        };
        let mut total = self.portfolio_repo.count(filter).await?;
        if query.recent {
            total = total.min(self.settings.recent_limit);
        }

        if query.no_pagination {
            let records = self
                .portfolio_repo
                .list(
                    filter,
                    Window {
                        offset: 0,
                        limit: total,
                    },
                )
                .await?;
            return Ok(Listing::Plain(self.with_authors(records).await?));
        }

        let page_size = query
            .page_size
            .unwrap_or(self.settings.page_size)
            .clamp(1, MAX_PAGE_SIZE);
        let page = query.page.unwrap_or(1);
        if page == 0 || page > last_page(total, page_size) {
            return Err(ApplicationError::not_found(MessageKey::InvalidPage));
        }

        let offset = (page - 1) * page_size;
        let limit = page_size.min(total.saturating_sub(offset));
        let records = if limit == 0 {
            Vec::new()
        } else {
            self.portfolio_repo
                .list(filter, Window { offset, limit })
                .await?
        };

        let results = self.with_authors(records).await?;
        Ok(Listing::Paged(Page::new(results, total, page, page_size)))
    }
}
