// src/presentation/http/controllers/portfolios.rs
use crate::application::{
    commands::portfolios::{
        CreatePortfolioCommand, DeletePortfolioCommand, ImageChange, UpdatePortfolioCommand,
        policy,
    },
    dto::{Listing, Page, PortfolioDto, PortfolioInfoDto},
    queries::portfolios::ListPortfoliosQuery,
};
use crate::domain::message::MessageKey;
use crate::presentation::http::error::{ErrorBody, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{MaybeAuthenticated, Payload, lenient};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Query string of the portfolio list. Everything arrives as text so that
/// malformed values can be reported the same way as in the body.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PortfolioListParams {
    /// Only portfolios in this category.
    pub category_id: Option<String>,
    /// Truthy: only the most recent portfolios.
    pub recent: Option<String>,
    /// Truthy: a bare array instead of a page envelope.
    pub no_pagination: Option<String>,
    pub page: Option<String>,
    /// At most 100.
    pub page_size: Option<String>,
}

impl PortfolioListParams {
    fn into_query(self) -> HttpResult<ListPortfoliosQuery> {
        let category_id = match self.category_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<i64>()
                    .map_err(|_| HttpError::malformed(format!("category_id: {raw}")))?,
            ),
        };
        let page = match self.page.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|_| HttpError::new(StatusCode::NOT_FOUND, MessageKey::InvalidPage))?,
            ),
        };
        // an unusable page size falls back to the default
        let page_size = self
            .page_size
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|size| *size > 0);

        Ok(ListPortfoliosQuery {
            category_id,
            recent: self.recent.as_deref().is_some_and(lenient::truthy),
            no_pagination: self.no_pagination.as_deref().is_some_and(lenient::truthy),
            page,
            page_size,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePortfolioRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    #[serde(default, deserialize_with = "lenient::id")]
    pub category_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub completed: Option<bool>,
    /// Multipart only.
    #[serde(skip)]
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<()>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePortfolioRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::double_option")]
    #[schema(value_type = Option<String>)]
    pub subtitle: Option<Option<String>>,
    pub body: Option<String>,
    #[serde(default, deserialize_with = "lenient::nullable_id")]
    #[schema(value_type = Option<i64>)]
    pub category_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub completed: Option<bool>,
    /// A file replaces the image; `null` or an empty value removes it.
    #[serde(skip)]
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<()>,
}

#[utoipa::path(
    get,
    path = "/api/portfolio/",
    params(PortfolioListParams),
    responses(
        (status = 200, description = "A page of portfolios, newest first, or a bare array with `no_pagination`.", body = Page<PortfolioDto>),
        (status = 404, description = "The page is out of range.", body = ErrorBody)
    ),
    security(()),
    tag = "Portfolios"
)]
pub async fn list_portfolios(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Query(params): Query<PortfolioListParams>,
) -> HttpResult<Json<Listing<PortfolioDto>>> {
    let query = params.into_query()?;
    state
        .services
        .portfolio_queries
        .list_portfolios(actor.user(), query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/portfolio/{id}/",
    params(("id" = i64, Path, description = "Portfolio id")),
    responses(
        (status = 200, description = "The portfolio.", body = PortfolioDto),
        (status = 404, description = "No such portfolio.", body = ErrorBody)
    ),
    security(()),
    tag = "Portfolios"
)]
pub async fn get_portfolio(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<PortfolioDto>> {
    state
        .services
        .portfolio_queries
        .get_portfolio(actor.user(), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/portfolio/",
    request_body(
        content(
            (CreatePortfolioRequest = "application/json"),
            (CreatePortfolioRequest = "multipart/form-data")
        )
    ),
    responses(
        (status = 201, description = "Portfolio created.", body = PortfolioDto),
        (status = 400, description = "Invalid fields, unknown category or image over 5MB.", body = ErrorBody),
        (status = 401, description = "Not authenticated.", body = ErrorBody),
        (status = 403, description = "Not a superuser.", body = ErrorBody)
    ),
    tag = "Portfolios"
)]
pub async fn create_portfolio(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    body: Result<Payload, HttpError>,
) -> HttpResult<(StatusCode, Json<PortfolioDto>)> {
    let mut payload = actor.admit(&policy::MANAGE, body)?;
    let request: CreatePortfolioRequest = payload.parse()?;
    let command = CreatePortfolioCommand {
        title: request.title,
        subtitle: request.subtitle,
        body: request.body,
        category_id: request.category_id,
        completed: request.completed.unwrap_or(false),
        image: payload.take_file("image"),
    };

    let portfolio = state
        .services
        .portfolio_commands
        .create_portfolio(actor.user(), command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(portfolio)))
}

#[utoipa::path(
    put,
    path = "/api/portfolio/{id}/",
    params(("id" = i64, Path, description = "Portfolio id")),
    request_body(
        content(
            (UpdatePortfolioRequest = "application/json"),
            (UpdatePortfolioRequest = "multipart/form-data")
        )
    ),
    responses(
        (status = 200, description = "Portfolio updated.", body = PortfolioDto),
        (status = 400, description = "Invalid fields, unknown category or image over 5MB.", body = ErrorBody),
        (status = 403, description = "Not a superuser.", body = ErrorBody),
        (status = 404, description = "No such portfolio.", body = ErrorBody)
    ),
    tag = "Portfolios"
)]
pub async fn update_portfolio(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
    body: Result<Payload, HttpError>,
) -> HttpResult<Json<PortfolioDto>> {
    let mut payload = actor.admit(&policy::MANAGE, body)?;
    let request: UpdatePortfolioRequest = payload.parse()?;
    let image = match payload.take_file("image") {
        Some(file) => ImageChange::Replace(file),
        None if payload.is_cleared("image") => ImageChange::Clear,
        None => ImageChange::Keep,
    };
    let command = UpdatePortfolioCommand {
        id,
        title: request.title,
        subtitle: request.subtitle,
        body: request.body,
        category_id: request.category_id,
        completed: request.completed,
        image,
    };

    state
        .services
        .portfolio_commands
        .update_portfolio(actor.user(), command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/portfolio/{id}/",
    params(("id" = i64, Path, description = "Portfolio id")),
    responses(
        (status = 204, description = "Portfolio and its images deleted."),
        (status = 403, description = "Not a superuser.", body = ErrorBody),
        (status = 404, description = "No such portfolio.", body = ErrorBody)
    ),
    tag = "Portfolios"
)]
pub async fn delete_portfolio(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .portfolio_commands
        .delete_portfolio(actor.user(), DeletePortfolioCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/portfolio/info/",
    responses(
        (status = 200, description = "Site metadata and its owner's contact details.", body = PortfolioInfoDto),
        (status = 404, description = "No site metadata yet.", body = ErrorBody)
    ),
    security(()),
    tag = "Portfolios"
)]
pub async fn portfolio_info(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<PortfolioInfoDto>> {
    state
        .services
        .portfolio_queries
        .get_info()
        .await
        .into_http()
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> PortfolioListParams {
        let mut params = PortfolioListParams::default();
        for (key, value) in pairs {
            let value = Some((*value).to_string());
            match *key {
                "category_id" => params.category_id = value,
                "recent" => params.recent = value,
                "no_pagination" => params.no_pagination = value,
                "page" => params.page = value,
                "page_size" => params.page_size = value,
                _ => unreachable!(),
            }
        }
        params
    }

    #[test]
    fn flags_accept_common_truthy_spellings() {
        let query = params(&[("recent", "True"), ("no_pagination", "1")])
            .into_query()
            .unwrap();
        assert!(query.recent);
        assert!(query.no_pagination);

        let query = params(&[("recent", "false")]).into_query().unwrap();
        assert!(!query.recent);
    }

    #[test]
    fn non_numeric_page_is_not_found() {
        let err = params(&[("page", "abc")]).into_query().unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_page_size_falls_back_to_default() {
        let query = params(&[("page_size", "zero"), ("category_id", "4")])
            .into_query()
            .unwrap();
        assert_eq!(query.page_size, None);
        assert_eq!(query.category_id, Some(4));
    }
}
